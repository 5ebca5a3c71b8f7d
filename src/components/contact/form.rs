//! Contact form submission flow, independent of how the form is rendered.

use std::sync::LazyLock;

use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use regex::Regex;
use thiserror::Error;

use super::toast::ToastKind;
use crate::components::effects::theme::{Color, NeonPalette};

/// Submit button text while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";
/// Toast shown once the request is accepted.
pub const SUCCESS_MESSAGE: &str = "Demo request received! We'll contact you shortly.";
/// Toast shown for a malformed address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
/// Toast shown when the backend rejects the request.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

static EMAIL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` shape with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL.is_match(email)
}

/// Why a submission did not go through.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
	/// The address failed validation.
	#[error("invalid email address")]
	InvalidEmail,
	/// The backend refused the request.
	#[error("submission rejected: {0}")]
	Rejected(String),
}

impl SubmitError {
	/// Message shown to the visitor.
	pub fn user_message(&self) -> &'static str {
		match self {
			SubmitError::InvalidEmail => INVALID_EMAIL_MESSAGE,
			SubmitError::Rejected(_) => FAILURE_MESSAGE,
		}
	}
}

/// Delivers a validated email address somewhere.
pub trait Submitter {
	/// Send `email`, resolving once the backend has answered.
	fn submit(&self, email: &str) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in backend that accepts every request after a fixed delay.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter {
	/// Simulated round trip.
	pub delay_ms: u32,
}

impl SimulatedSubmitter {
	/// Accept requests after `delay_ms`.
	pub fn new(delay_ms: u32) -> Self {
		Self { delay_ms }
	}
}

impl Submitter for SimulatedSubmitter {
	async fn submit(&self, _email: &str) -> Result<(), SubmitError> {
		TimeoutFuture::new(self.delay_ms).await;
		Ok(())
	}
}

/// The parts of the form the submission flow drives.
pub trait FormView {
	/// Current submit button text.
	fn label(&self) -> String;
	/// Replace the submit button text.
	fn set_label(&self, label: &str);
	/// Disable or re-enable the submit button.
	fn set_busy(&self, busy: bool);
	/// Empty the email field.
	fn clear_input(&self);
	/// Raise a toast.
	fn notify(&self, message: &str, kind: ToastKind);
}

/// Validate, submit, and report the outcome.
///
/// Invalid input is reported before any async work starts. Otherwise the
/// submit control shows [`SENDING_LABEL`] and is disabled until the
/// submitter settles; it is restored whatever the outcome.
pub async fn handle_submit(
	view: &impl FormView,
	submitter: &impl Submitter,
	email: &str,
) -> Result<(), SubmitError> {
	if !is_valid_email(email) {
		let err = SubmitError::InvalidEmail;
		view.notify(err.user_message(), ToastKind::Error);
		return Err(err);
	}

	let original = view.label();
	view.set_label(SENDING_LABEL);
	view.set_busy(true);

	let result = submitter.submit(email).await;
	match &result {
		Ok(()) => {
			info!("neon-landing: demo request submitted");
			view.notify(SUCCESS_MESSAGE, ToastKind::Success);
			view.clear_input();
		}
		Err(e) => {
			warn!("neon-landing: {}", e);
			view.notify(e.user_message(), ToastKind::Error);
		}
	}

	view.set_label(&original);
	view.set_busy(false);
	result
}

/// Live feedback on the email field while typing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputTone {
	/// A well-formed address.
	Valid,
	/// Not (yet) a valid address.
	Pending,
}

impl InputTone {
	/// Tone for the field's current value.
	pub fn for_input(value: &str) -> Self {
		if is_valid_email(value) {
			InputTone::Valid
		} else {
			InputTone::Pending
		}
	}

	/// Border and glow color for this tone.
	pub fn color(self, palette: &NeonPalette) -> Color {
		match self {
			InputTone::Valid => palette.success,
			InputTone::Pending => palette.pending,
		}
	}

	/// Inline style for the email field.
	pub fn css(self, palette: &NeonPalette) -> String {
		let color = self.color(palette);
		format!(
			"border-color: {}; box-shadow: 0 0 15px {};",
			color.to_css(),
			color.with_alpha(0.5).to_css()
		)
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;

	#[derive(Debug, PartialEq)]
	enum Event {
		Label(String),
		Busy(bool),
		Cleared,
		Toast(String, ToastKind),
	}

	struct Recorder {
		label: RefCell<String>,
		events: RefCell<Vec<Event>>,
	}

	impl Recorder {
		fn new(label: &str) -> Self {
			Self {
				label: RefCell::new(label.to_string()),
				events: RefCell::new(Vec::new()),
			}
		}
	}

	impl FormView for Recorder {
		fn label(&self) -> String {
			self.label.borrow().clone()
		}
		fn set_label(&self, label: &str) {
			*self.label.borrow_mut() = label.to_string();
			self.events.borrow_mut().push(Event::Label(label.to_string()));
		}
		fn set_busy(&self, busy: bool) {
			self.events.borrow_mut().push(Event::Busy(busy));
		}
		fn clear_input(&self) {
			self.events.borrow_mut().push(Event::Cleared);
		}
		fn notify(&self, message: &str, kind: ToastKind) {
			self.events
				.borrow_mut()
				.push(Event::Toast(message.to_string(), kind));
		}
	}

	/// Resolves immediately, remembering the label visible while in flight.
	struct Probe<'a> {
		view: &'a Recorder,
		outcome: Result<(), SubmitError>,
		seen_label: RefCell<Option<String>>,
	}

	impl Submitter for Probe<'_> {
		fn submit(&self, _email: &str) -> impl Future<Output = Result<(), SubmitError>> {
			*self.seen_label.borrow_mut() = Some(self.view.label());
			std::future::ready(self.outcome.clone())
		}
	}

	#[test]
	fn email_shapes() {
		assert!(is_valid_email("a@b.co"));
		assert!(!is_valid_email("a@b"));
		assert!(!is_valid_email("a b@c.com"));
		assert!(!is_valid_email(""));
		assert!(!is_valid_email("a@@b.co"));
		assert!(is_valid_email("first.last@sub.example.org"));
	}

	#[test]
	fn invalid_email_reports_without_submitting() {
		let view = Recorder::new("Request Demo");
		let probe = Probe {
			view: &view,
			outcome: Ok(()),
			seen_label: RefCell::new(None),
		};
		let result = block_on(handle_submit(&view, &probe, "not-an-email"));
		assert_eq!(result, Err(SubmitError::InvalidEmail));
		assert_eq!(*probe.seen_label.borrow(), None);
		assert_eq!(
			*view.events.borrow(),
			vec![Event::Toast(INVALID_EMAIL_MESSAGE.into(), ToastKind::Error)]
		);
	}

	#[test]
	fn success_shows_sending_then_toast_and_clears() {
		let view = Recorder::new("Request Demo");
		let probe = Probe {
			view: &view,
			outcome: Ok(()),
			seen_label: RefCell::new(None),
		};
		let result = block_on(handle_submit(&view, &probe, "a@b.co"));
		assert_eq!(result, Ok(()));
		assert_eq!(probe.seen_label.borrow().as_deref(), Some(SENDING_LABEL));
		assert_eq!(
			*view.events.borrow(),
			vec![
				Event::Label(SENDING_LABEL.into()),
				Event::Busy(true),
				Event::Toast(SUCCESS_MESSAGE.into(), ToastKind::Success),
				Event::Cleared,
				Event::Label("Request Demo".into()),
				Event::Busy(false),
			]
		);
	}

	#[test]
	fn rejection_restores_control_and_keeps_input() {
		let view = Recorder::new("Request Demo");
		let probe = Probe {
			view: &view,
			outcome: Err(SubmitError::Rejected("503".into())),
			seen_label: RefCell::new(None),
		};
		let result = block_on(handle_submit(&view, &probe, "a@b.co"));
		assert!(matches!(result, Err(SubmitError::Rejected(_))));
		let events = view.events.borrow();
		assert!(events.contains(&Event::Toast(FAILURE_MESSAGE.into(), ToastKind::Error)));
		assert!(!events.contains(&Event::Cleared));
		assert_eq!(
			&events[events.len() - 2..],
			&[Event::Label("Request Demo".into()), Event::Busy(false)]
		);
	}

	#[test]
	fn tone_tracks_validity() {
		assert_eq!(InputTone::for_input("a@b"), InputTone::Pending);
		assert_eq!(InputTone::for_input("a@b.co"), InputTone::Valid);
		let palette = NeonPalette::neon();
		assert_eq!(
			InputTone::Valid.css(&palette),
			"border-color: #00ff88; box-shadow: 0 0 15px rgba(0, 255, 136, 0.5);"
		);
		assert_eq!(
			InputTone::Pending.css(&palette),
			"border-color: #00f3ff; box-shadow: 0 0 15px rgba(0, 243, 255, 0.5);"
		);
	}
}
