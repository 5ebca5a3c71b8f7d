//! Hover-triggered glitch effect for headings.
//!
//! While the pointer is over a heading, a fixed-period timer scrambles a
//! random subset of its characters and flickers its color. Leaving restores
//! the original text and color.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::config::GlitchConfig;
use super::env::RandomSource;
use super::theme::{Color, NeonPalette};

/// Replacement characters for scrambled positions.
pub const GLITCH_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// Glitch state for one heading, independent of the DOM.
#[derive(Clone, Debug)]
pub struct GlitchText {
	original: String,
	active: bool,
}

impl GlitchText {
	/// Idle state for a title reading `original`.
	pub fn new(original: impl Into<String>) -> Self {
		Self {
			original: original.into(),
			active: false,
		}
	}

	/// Text restored when the glitch ends.
	pub fn original(&self) -> &str {
		&self.original
	}

	/// True between `begin` and `end`.
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Mark the effect active. Returns false if it already was, in which
	/// case the caller must not start another timer.
	pub fn begin(&mut self) -> bool {
		!std::mem::replace(&mut self.active, true)
	}

	/// Mark the effect idle and return the text to restore.
	pub fn end(&mut self) -> &str {
		self.active = false;
		&self.original
	}

	/// One glitch frame: each character is replaced with probability
	/// `probability`, and one of `colors` is chosen uniformly.
	pub fn scramble(
		&self,
		probability: f64,
		colors: &[Color],
		rng: &mut impl RandomSource,
	) -> (String, Color) {
		let pool: Vec<char> = GLITCH_CHARS.chars().collect();
		let text = self
			.original
			.chars()
			.map(|c| {
				if rng.chance(probability) {
					pool[rng.pick(pool.len())]
				} else {
					c
				}
			})
			.collect();
		(text, colors[rng.pick(colors.len())])
	}
}

struct GlitchInner {
	element: HtmlElement,
	text: GlitchText,
	timer: Option<Interval>,
	rng: fastrand::Rng,
}

impl GlitchInner {
	fn stop(&mut self) {
		self.timer.take();
		let original = self.text.end().to_string();
		self.element.set_text_content(Some(&original));
		let _ = self.element.style().remove_property("color");
	}
}

/// Binds the glitch effect to one element's pointer enter/leave events.
pub struct GlitchBinding {
	inner: Rc<RefCell<GlitchInner>>,
	on_enter: Closure<dyn FnMut()>,
	on_leave: Closure<dyn FnMut()>,
}

impl GlitchBinding {
	/// Register hover listeners on `element`, capturing its current text.
	pub fn attach(
		element: HtmlElement,
		config: &GlitchConfig,
		palette: &NeonPalette,
		seed: u64,
	) -> Result<Self, JsValue> {
		let original = element.text_content().unwrap_or_default();
		let inner = Rc::new(RefCell::new(GlitchInner {
			element: element.clone(),
			text: GlitchText::new(original),
			timer: None,
			rng: fastrand::Rng::with_seed(seed),
		}));

		let (inner_enter, period, probability, colors) = (
			inner.clone(),
			config.interval_ms,
			config.probability,
			palette.glitch,
		);
		let on_enter = Closure::<dyn FnMut()>::new(move || {
			let mut state = inner_enter.borrow_mut();
			if !state.text.begin() {
				return;
			}
			let inner_tick = inner_enter.clone();
			state.timer = Some(Interval::new(period, move || {
				let mut guard = inner_tick.borrow_mut();
				let st = &mut *guard;
				let (text, color) = st.text.scramble(probability, &colors, &mut st.rng);
				st.element.set_text_content(Some(&text));
				let _ = st.element.style().set_property("color", &color.to_css());
			}));
		});

		let inner_leave = inner.clone();
		let on_leave = Closure::<dyn FnMut()>::new(move || {
			inner_leave.borrow_mut().stop();
		});

		element.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
		element.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;

		Ok(Self {
			inner,
			on_enter,
			on_leave,
		})
	}

	/// Stop any running glitch and detach the listeners.
	pub fn detach(&self) {
		let mut state = self.inner.borrow_mut();
		if state.text.is_active() {
			state.stop();
		}
		let _ = state.element.remove_event_listener_with_callback(
			"mouseenter",
			self.on_enter.as_ref().unchecked_ref(),
		);
		let _ = state.element.remove_event_listener_with_callback(
			"mouseleave",
			self.on_leave.as_ref().unchecked_ref(),
		);
	}
}
