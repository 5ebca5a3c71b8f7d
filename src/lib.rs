//! neon-landing: animated landing page for the Neon Grid compute mesh.
//!
//! This crate renders the marketing page as a WASM client-side app and
//! drives its effects from Rust: drifting particles, bouncing floating
//! shapes, glitching headings, scroll reveal, a typewriter tagline, smooth
//! anchor scrolling and a demo request form with toast feedback.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlScriptElement, PageTransitionEvent, Window};

pub mod components;

use components::nav::{AnchorLink, MenuDisplay};
use components::typewriter::TypewriterText;
pub use components::contact::{ContactForm, ToastHost, Toaster};
pub use components::effects::{EffectsConfig, EffectsRuntime, PageExit};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neon-landing: logging initialized");
}

/// Load effect overrides from a script element with id="landing-config".
/// Missing or malformed config falls back to the defaults.
fn load_config() -> EffectsConfig {
	let Some(json_text) = config_script_text() else {
		return EffectsConfig::default();
	};

	match EffectsConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"neon-landing: loaded config ({} particles)",
				config.particles.count
			);
			config
		}
		Err(e) => {
			warn!("neon-landing: failed to parse config: {}", e);
			EffectsConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("landing-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Keyframes and layout rules the effects rely on.
const EFFECT_STYLES: &str = r#"
.particles-container {
	position: fixed;
	inset: 0;
	overflow: hidden;
	pointer-events: none;
	z-index: -1;
}

.floating-element {
	position: fixed;
	border-radius: 50%;
	pointer-events: none;
	z-index: -1;
}

@keyframes slideIn {
	from { transform: translateX(100%); opacity: 0; }
	to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
	from { transform: translateX(0); opacity: 1; }
	to { transform: translateX(100%); opacity: 0; }
}

.animate-in {
	animation: fadeInUp 0.6s ease forwards;
}

@keyframes fadeInUp {
	from { opacity: 0; transform: translateY(30px); }
	to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 768px) {
	.nav-links {
		position: fixed;
		top: 80px;
		left: 0;
		width: 100%;
		background: rgba(10, 10, 15, 0.95);
		backdrop-filter: blur(10px);
		flex-direction: column;
		padding: 2rem;
		display: none;
		border-bottom: 1px solid rgba(0, 243, 255, 0.2);
	}
}
"#;

const TAGLINES: [&str; 3] = [
	"Distributed compute at the speed of light.",
	"Zero-trust mesh networking for every node.",
	"Deploy anywhere. Scale everywhere.",
];

const FEATURES: [(&str, &str); 3] = [
	(
		"Quantum Routing",
		"Traffic finds the shortest path across the mesh in real time.",
	),
	(
		"Edge Native",
		"Workloads run next to your users, not in a distant region.",
	),
	(
		"Self Healing",
		"Failed nodes are detected and replaced before anyone notices.",
	),
];

const ARCHITECTURE: [(&str, &str); 3] = [
	("Control Plane", "Declarative scheduling with signed manifests."),
	("Data Plane", "Encrypted overlay with per-flow isolation."),
	("Observability", "Every hop traced, every packet accounted for."),
];

fn tagline_texts() -> Vec<String> {
	TAGLINES.iter().map(|t| t.to_string()).collect()
}

/// Main application component.
/// Renders the landing page and starts the effects runtime once mounted.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let toaster = Toaster::new(&config.toast);
	let menu = RwSignal::new(MenuDisplay::default());
	let scroll_offset = config.nav.scroll_offset;
	let particles_ref = NodeRef::<leptos::html::Div>::new();
	let taglines = tagline_texts();

	let runtime: Rc<RefCell<Option<EffectsRuntime>>> = Rc::new(RefCell::new(None));
	let pagehide_cb: Rc<RefCell<Option<Closure<dyn FnMut(PageTransitionEvent)>>>> =
		Rc::new(RefCell::new(None));
	let effects_config = config.clone();

	Effect::new(move |_| {
		let Some(container) = particles_ref.get() else {
			return;
		};
		if runtime.borrow().is_some() {
			return;
		}
		*runtime.borrow_mut() = EffectsRuntime::start(&effects_config, &container, menu);

		let runtime_stop = runtime.clone();
		*pagehide_cb.borrow_mut() = Some(Closure::new(move |ev: PageTransitionEvent| {
			if let Some(ref mut rt) = *runtime_stop.borrow_mut() {
				rt.page_hidden(PageExit::from_persisted(ev.persisted()));
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), &*pagehide_cb.borrow()) {
			let _ = window.add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref());
		}
	});

	let nav_style = move || {
		menu.get()
			.as_css()
			.map(|display| format!("display: {display};"))
			.unwrap_or_default()
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Neon Grid | Distributed Compute Mesh" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{EFFECT_STYLES}</Style>

		<div class="particles-container" node_ref=particles_ref></div>
		<div class="floating-elements" aria-hidden="true">
			<div class="floating-element"></div>
			<div class="floating-element"></div>
			<div class="floating-element"></div>
		</div>

		<nav class="navbar">
			<div class="logo">"NEON//GRID"</div>
			<ul class="nav-links" style=nav_style>
				<li><AnchorLink href="#features" offset=scroll_offset>"Features"</AnchorLink></li>
				<li><AnchorLink href="#architecture" offset=scroll_offset>"Architecture"</AnchorLink></li>
				<li><AnchorLink href="#contact" offset=scroll_offset>"Contact"</AnchorLink></li>
			</ul>
			<button
				class="mobile-menu"
				aria-label="Toggle navigation"
				on:click=move |_| menu.update(|m| *m = m.toggled())
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
		</nav>

		<main>
			<section class="hero" id="top">
				<h1 class="hero-title">"NEON GRID"</h1>
				<p class="hero-subtitle">
					<TypewriterText texts=taglines options={config.typewriter.clone()} />
				</p>
				<div class="hero-cta">
					<AnchorLink href="#contact" class="btn btn-primary" offset=scroll_offset>
						"Request Demo"
					</AnchorLink>
					<AnchorLink href="#features" class="btn btn-secondary" offset=scroll_offset>
						"Learn More"
					</AnchorLink>
				</div>
			</section>

			<section class="features" id="features">
				<h2 class="section-title">"Features"</h2>
				<div class="feature-grid">
					{FEATURES
						.iter()
						.map(|(title, body)| {
							view! {
								<div class="feature-card">
									<h3>{*title}</h3>
									<p>{*body}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="architecture" id="architecture">
				<h2 class="section-title">"Architecture"</h2>
				<div class="arch-grid">
					{ARCHITECTURE
						.iter()
						.map(|(title, body)| {
							view! {
								<div class="arch-card">
									<h3>{*title}</h3>
									<p>{*body}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="cta" id="contact">
				<h2 class="section-title">"Get Early Access"</h2>
				<ContactForm toaster=toaster submit_delay_ms={config.submit_delay_ms} />
			</section>
		</main>

		<footer class="footer">
			<p>"© 2026 Neon Grid. All rights reserved."</p>
		</footer>

		<ToastHost toaster=toaster />
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hero_cycles_through_every_tagline() {
		let texts = tagline_texts();
		assert_eq!(texts.len(), TAGLINES.len());
		assert!(texts.iter().all(|t| !t.is_empty()));
		assert_eq!(texts[0], TAGLINES[0]);
	}
}
