//! Toast notifications: one transient message at a time, auto-dismissed.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::effects::config::ToastConfig;
use crate::components::effects::theme::{Color, NeonPalette};

/// Outcome a toast reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// The request went through.
	Success,
	/// Validation or submission failed.
	Error,
}

impl ToastKind {
	/// Border color for this kind.
	pub fn accent(self, palette: &NeonPalette) -> Color {
		match self {
			ToastKind::Success => palette.success,
			ToastKind::Error => palette.error,
		}
	}
}

/// One message in the toast slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	/// Distinguishes a toast from the ones that replaced it.
	pub id: u64,
	/// Text shown to the visitor.
	pub message: String,
	/// Picks the accent color.
	pub kind: ToastKind,
	/// Playing the exit transition.
	pub leaving: bool,
}

/// Holds the visible toast. Showing a new one replaces the old; timers are
/// keyed by id so a replaced toast's timers leave its successor alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
	current: Option<Toast>,
	next_id: u64,
}

impl ToastSlot {
	/// The toast on screen, if any.
	pub fn current(&self) -> Option<&Toast> {
		self.current.as_ref()
	}

	/// Replace whatever is shown and return the new toast's id.
	pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.current = Some(Toast {
			id,
			message: message.into(),
			kind,
			leaving: false,
		});
		id
	}

	/// Start the exit transition. False if `id` is no longer shown.
	pub fn begin_exit(&mut self, id: u64) -> bool {
		match self.current.as_mut() {
			Some(t) if t.id == id => {
				t.leaving = true;
				true
			}
			_ => false,
		}
	}

	/// Clear the slot. False if `id` is no longer shown.
	pub fn remove(&mut self, id: u64) -> bool {
		if self.current.as_ref().is_some_and(|t| t.id == id) {
			self.current = None;
			true
		} else {
			false
		}
	}
}

/// Handle for raising toasts, shared through context.
#[derive(Clone, Copy)]
pub struct Toaster {
	slot: RwSignal<ToastSlot>,
	visible_ms: u32,
	exit_ms: u32,
}

impl Toaster {
	/// An empty slot with the configured timings.
	pub fn new(config: &ToastConfig) -> Self {
		Self {
			slot: RwSignal::new(ToastSlot::default()),
			visible_ms: config.visible_ms,
			exit_ms: config.exit_ms,
		}
	}

	/// Show a toast, then start its exit after `visible_ms` and remove it
	/// `exit_ms` later.
	pub fn show(&self, message: &str, kind: ToastKind) {
		let Some(id) = self.slot.try_update(|s| s.show(message, kind)) else {
			return;
		};
		let (slot, exit_ms) = (self.slot, self.exit_ms);
		Timeout::new(self.visible_ms, move || {
			if slot.try_update(|s| s.begin_exit(id)) == Some(true) {
				Timeout::new(exit_ms, move || {
					slot.try_update(|s| s.remove(id));
				})
				.forget();
			}
		})
		.forget();
	}
}

fn toast_style(toast: &Toast, palette: &NeonPalette) -> String {
	format!(
		"position: fixed; top: 20px; right: 20px; padding: 1rem 2rem; \
		 background: rgba(0, 0, 0, 0.9); color: white; border: 2px solid {}; \
		 border-radius: 4px; z-index: 10000; font-family: var(--font-heading); \
		 animation: {} 0.3s ease;",
		toast.kind.accent(palette).to_css(),
		if toast.leaving { "slideOut" } else { "slideIn" },
	)
}

/// Renders the current toast, if any.
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
	let slot = toaster.slot;
	let palette = NeonPalette::neon();
	move || {
		slot.with(|s| {
			s.current().map(|t| {
				view! {
					<div class="notification" role="status" style={toast_style(t, &palette)}>
						{t.message.clone()}
					</div>
				}
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_toast_replaces_existing() {
		let mut slot = ToastSlot::default();
		let first = slot.show("one", ToastKind::Error);
		let second = slot.show("two", ToastKind::Success);
		assert_ne!(first, second);
		let current = slot.current().unwrap();
		assert_eq!(current.message, "two");
		assert_eq!(current.kind, ToastKind::Success);
	}

	#[test]
	fn stale_timers_do_not_touch_successor() {
		let mut slot = ToastSlot::default();
		let first = slot.show("one", ToastKind::Error);
		let second = slot.show("two", ToastKind::Success);
		assert!(!slot.begin_exit(first));
		assert!(!slot.remove(first));
		assert!(!slot.current().unwrap().leaving);

		assert!(slot.begin_exit(second));
		assert!(slot.current().unwrap().leaving);
		assert!(slot.remove(second));
		assert!(slot.current().is_none());
	}

	#[test]
	fn style_reflects_kind_and_phase() {
		let mut slot = ToastSlot::default();
		let id = slot.show("ok", ToastKind::Success);
		let palette = NeonPalette::neon();
		let style = toast_style(slot.current().unwrap(), &palette);
		assert!(style.contains("2px solid #00ff88"));
		assert!(style.contains("slideIn"));
		slot.begin_exit(id);
		assert!(toast_style(slot.current().unwrap(), &palette).contains("slideOut"));
	}

	#[test]
	fn accents_come_from_palette() {
		let mut palette = NeonPalette::neon();
		assert_eq!(ToastKind::Success.accent(&palette), palette.success);
		assert_eq!(ToastKind::Error.accent(&palette).to_css(), "#ff0033");

		palette.error = palette.glitch[1];
		let mut slot = ToastSlot::default();
		slot.show("bad", ToastKind::Error);
		assert!(toast_style(slot.current().unwrap(), &palette).contains("2px solid #9d00ff"));
	}
}
