//! In-page navigation: smooth anchor scrolling and the mobile menu toggle.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

/// Scroll position for an anchor `href` whose target sits at `offset_top`.
/// A bare `#` has no target.
pub fn scroll_target(href: &str, offset_top: f64, offset: f64) -> Option<f64> {
	if href == "#" || !href.starts_with('#') {
		return None;
	}
	Some(offset_top - offset)
}

/// Inline `display` state of the navigation links on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuDisplay {
	/// No inline style; the stylesheet decides.
	#[default]
	Unset,
	/// Menu forced open.
	Flex,
	/// Menu forced closed.
	Hidden,
}

impl MenuDisplay {
	/// State after the menu button is pressed.
	pub fn toggled(self) -> Self {
		match self {
			MenuDisplay::Flex => MenuDisplay::Hidden,
			_ => MenuDisplay::Flex,
		}
	}

	/// State after the viewport is resized to `width`. Wide viewports drop
	/// the inline override so the desktop layout applies.
	pub fn after_resize(self, width: f64, breakpoint: f64) -> Self {
		if width > breakpoint {
			MenuDisplay::Unset
		} else {
			self
		}
	}

	/// Inline `display` value, if any.
	pub fn as_css(self) -> Option<&'static str> {
		match self {
			MenuDisplay::Unset => None,
			MenuDisplay::Flex => Some("flex"),
			MenuDisplay::Hidden => Some("none"),
		}
	}
}

fn smooth_scroll(href: &str, offset: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(target) = window
		.document()
		.and_then(|d| d.get_element_by_id(href.trim_start_matches('#')))
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		debug!("neon-landing: no anchor target for {}", href);
		return;
	};
	let Some(top) = scroll_target(href, target.offset_top() as f64, offset) else {
		return;
	};

	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Anchor that smooth-scrolls to its in-page target, leaving room for the
/// fixed header.
#[component]
pub fn AnchorLink(
	href: &'static str,
	#[prop(default = 80.0)] offset: f64,
	#[prop(optional)] class: &'static str,
	children: Children,
) -> impl IntoView {
	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		if href != "#" {
			smooth_scroll(href, offset);
		}
	};

	view! {
		<a href=href class=class on:click=on_click>
			{children()}
		</a>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bare_hash_has_no_target() {
		assert_eq!(scroll_target("#", 500.0, 80.0), None);
		assert_eq!(scroll_target("https://example.com", 500.0, 80.0), None);
	}

	#[test]
	fn target_leaves_header_offset() {
		assert_eq!(scroll_target("#features", 1200.0, 80.0), Some(1120.0));
		assert_eq!(scroll_target("#top", 20.0, 80.0), Some(-60.0));
	}

	#[test]
	fn toggle_alternates_from_any_state() {
		assert_eq!(MenuDisplay::Unset.toggled(), MenuDisplay::Flex);
		assert_eq!(MenuDisplay::Flex.toggled(), MenuDisplay::Hidden);
		assert_eq!(MenuDisplay::Hidden.toggled(), MenuDisplay::Flex);
	}

	#[test]
	fn resize_past_breakpoint_clears_override() {
		assert_eq!(
			MenuDisplay::Flex.after_resize(1024.0, 768.0),
			MenuDisplay::Unset
		);
		assert_eq!(
			MenuDisplay::Hidden.after_resize(768.0, 768.0),
			MenuDisplay::Hidden
		);
		assert_eq!(MenuDisplay::Flex.as_css(), Some("flex"));
		assert_eq!(MenuDisplay::Unset.as_css(), None);
	}
}
