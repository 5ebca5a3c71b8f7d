//! Typewriter text that types, pauses, deletes and cycles through phrases.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::Deserialize;

/// Timing for the typewriter, in milliseconds.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypewriterOptions {
	/// Delay between typed characters.
	pub speed_ms: u32,
	/// Delay between deleted characters.
	pub delete_speed_ms: u32,
	/// Hold time once a phrase is fully typed.
	pub pause_ms: u32,
	/// Cycle forever; otherwise stop after the last phrase is typed.
	pub looping: bool,
}

impl Default for TypewriterOptions {
	fn default() -> Self {
		Self {
			speed_ms: 50,
			delete_speed_ms: 30,
			pause_ms: 2000,
			looping: true,
		}
	}
}

/// Text to display and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeStep {
	/// Visible prefix of the current phrase.
	pub text: String,
	/// Wait before the next step.
	pub delay_ms: u32,
}

/// Typing state machine. Counts characters as Unicode scalar values.
#[derive(Clone, Debug)]
pub struct Typewriter {
	texts: Vec<String>,
	options: TypewriterOptions,
	text_index: usize,
	char_index: usize,
	deleting: bool,
	finished: bool,
}

impl Typewriter {
	/// Start before the first character of the first phrase.
	pub fn new(texts: Vec<String>, options: TypewriterOptions) -> Self {
		Self {
			texts,
			options,
			text_index: 0,
			char_index: 0,
			deleting: false,
			finished: false,
		}
	}

	/// Advance by one character. `None` once there is nothing left to do.
	pub fn step(&mut self) -> Option<TypeStep> {
		if self.finished {
			return None;
		}
		let current = self.texts.get(self.text_index)?;
		let len = current.chars().count();

		if self.deleting {
			self.char_index = self.char_index.saturating_sub(1);
		} else {
			self.char_index += 1;
		}
		let text: String = current.chars().take(self.char_index.min(len)).collect();

		let mut delay_ms = if self.deleting {
			self.options.delete_speed_ms
		} else {
			self.options.speed_ms
		};

		if !self.deleting && self.char_index >= len {
			delay_ms = self.options.pause_ms;
			if !self.options.looping && self.text_index + 1 == self.texts.len() {
				self.finished = true;
			} else {
				self.deleting = true;
			}
		} else if self.deleting && self.char_index == 0 {
			self.deleting = false;
			self.text_index = (self.text_index + 1) % self.texts.len();
		}

		Some(TypeStep { text, delay_ms })
	}
}

fn schedule(machine: Rc<RefCell<Typewriter>>, text: RwSignal<String>, delay_ms: u32) {
	Timeout::new(delay_ms, move || {
		let Some(step) = machine.borrow_mut().step() else {
			return;
		};
		// A disposed signal means the component is gone.
		if text.try_set(step.text).is_some() {
			return;
		}
		schedule(machine, text, step.delay_ms);
	})
	.forget();
}

/// Renders a span whose content is typed out phrase by phrase.
#[component]
pub fn TypewriterText(
	#[prop(into)] texts: Vec<String>,
	#[prop(optional)] options: Option<TypewriterOptions>,
	#[prop(default = "typewriter")] class: &'static str,
) -> impl IntoView {
	let text = RwSignal::new(String::new());
	let machine = Rc::new(RefCell::new(Typewriter::new(
		texts,
		options.unwrap_or_default(),
	)));
	schedule(machine, text, 0);

	view! { <span class=class>{move || text.get()}</span> }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(machine: &mut Typewriter, steps: usize) -> Vec<TypeStep> {
		(0..steps).map_while(|_| machine.step()).collect()
	}

	fn texts(steps: &[TypeStep]) -> Vec<&str> {
		steps.iter().map(|s| s.text.as_str()).collect()
	}

	#[test]
	fn types_pauses_deletes_and_cycles() {
		let mut tw = Typewriter::new(
			vec!["ab".into(), "c".into()],
			TypewriterOptions::default(),
		);
		let steps = run(&mut tw, 8);
		assert_eq!(texts(&steps), vec!["a", "ab", "a", "", "c", "", "a", "ab"]);
		let delays: Vec<_> = steps.iter().map(|s| s.delay_ms).collect();
		assert_eq!(delays, vec![50, 2000, 30, 30, 2000, 30, 50, 2000]);
	}

	#[test]
	fn non_looping_stops_after_last_phrase() {
		let options = TypewriterOptions {
			looping: false,
			..TypewriterOptions::default()
		};
		let mut tw = Typewriter::new(vec!["x".into(), "yz".into()], options);
		let steps = run(&mut tw, 20);
		assert_eq!(texts(&steps), vec!["x", "", "y", "yz"]);
		assert_eq!(tw.step(), None);
	}

	#[test]
	fn counts_characters_not_bytes() {
		let mut tw = Typewriter::new(vec!["héllo".into()], TypewriterOptions::default());
		let steps = run(&mut tw, 5);
		assert_eq!(steps[1].text, "hé");
		assert_eq!(steps[4].text, "héllo");
		assert_eq!(steps[4].delay_ms, 2000);
	}

	#[test]
	fn empty_phrase_list_does_nothing() {
		let mut tw = Typewriter::new(Vec::new(), TypewriterOptions::default());
		assert_eq!(tw.step(), None);
	}

	#[test]
	fn empty_phrase_is_skipped_over() {
		let mut tw = Typewriter::new(vec![String::new(), "q".into()], TypewriterOptions::default());
		let steps = run(&mut tw, 3);
		assert_eq!(texts(&steps), vec!["", "", "q"]);
	}
}
