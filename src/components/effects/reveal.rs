//! Scroll-triggered reveal: cards get an animation class the first time
//! they scroll into view.

use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::config::RevealConfig;
use super::render::query_all;

/// Owns the observer and its callback for the page lifetime.
pub struct ScrollReveal {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
	/// Observe every element matching the configured selector.
	pub fn observe(document: &Document, config: &RevealConfig) -> Result<Self, JsValue> {
		let class_name = config.class_name.clone();
		let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
			move |entries: Array, _observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if entry.is_intersecting() {
						let _ = entry.target().class_list().add_1(&class_name);
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(config.threshold));
		options.set_root_margin(&config.root_margin);
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

		let targets = query_all(document, &config.selector);
		for target in &targets {
			observer.observe(target);
		}
		debug!("neon-landing: observing {} reveal targets", targets.len());

		Ok(Self {
			observer,
			_callback: callback,
		})
	}

	/// Stop observing all targets.
	pub fn disconnect(&self) {
		self.observer.disconnect();
	}
}
