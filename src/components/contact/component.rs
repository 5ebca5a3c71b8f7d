//! Leptos component for the demo request form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use super::form::{FormView, InputTone, SimulatedSubmitter, handle_submit};
use super::toast::{ToastKind, Toaster};
use crate::components::effects::theme::NeonPalette;

/// Signals backing the rendered form.
#[derive(Clone, Copy)]
struct SignalForm {
	email: RwSignal<String>,
	label: RwSignal<String>,
	busy: RwSignal<bool>,
	toaster: Toaster,
}

impl FormView for SignalForm {
	fn label(&self) -> String {
		self.label.get_untracked()
	}

	fn set_label(&self, label: &str) {
		self.label.set(label.to_string());
	}

	fn set_busy(&self, busy: bool) {
		self.busy.set(busy);
	}

	fn clear_input(&self) {
		self.email.set(String::new());
	}

	fn notify(&self, message: &str, kind: ToastKind) {
		self.toaster.show(message, kind);
	}
}

/// Email capture form that validates as you type and submits through a
/// simulated backend.
#[component]
pub fn ContactForm(
	toaster: Toaster,
	#[prop(default = 1500)] submit_delay_ms: u32,
	#[prop(default = "Request Demo")] button_label: &'static str,
) -> impl IntoView {
	let form = SignalForm {
		email: RwSignal::new(String::new()),
		label: RwSignal::new(button_label.to_string()),
		busy: RwSignal::new(false),
		toaster,
	};
	let tone = RwSignal::new(None::<InputTone>);
	let palette = NeonPalette::neon();

	let on_input = move |ev: web_sys::Event| {
		let value = event_target_value(&ev);
		tone.set(Some(InputTone::for_input(&value)));
		form.email.set(value);
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if form.busy.get_untracked() {
			return;
		}
		let email = form.email.get_untracked();
		spawn_local(async move {
			let submitter = SimulatedSubmitter::new(submit_delay_ms);
			if let Err(e) = handle_submit(&form, &submitter, &email).await {
				debug!("neon-landing: demo request not sent: {}", e);
			}
		});
	};

	view! {
		<form class="cta-form" on:submit=on_submit novalidate=true>
			<input
				type="email"
				class="form-input"
				placeholder="Enter your work email"
				prop:value=move || form.email.get()
				on:input=on_input
				style=move || tone.get().map(|t| t.css(&palette)).unwrap_or_default()
			/>
			<button type="submit" class="btn btn-primary btn-large" disabled=move || form.busy.get()>
				<span>{move || form.label.get()}</span>
			</button>
		</form>
	}
}
