//! Composition root for the DOM-bound effects.
//!
//! `EffectsRuntime` owns every long-lived effect: the particle and floating
//! frame loops, the glitch bindings, the reveal observer and the resize
//! listener for the mobile menu. Nothing here lives in global state; dropping
//! or stopping the runtime tears all of it down.

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::config::EffectsConfig;
use super::env::{Clock, PerformanceClock};
use super::floating::FloatingField;
use super::glitch::GlitchBinding;
use super::particles::ParticleField;
use super::render::{FloatingLayer, ParticleLayer, query_all, viewport_size};
use super::reveal::ScrollReveal;
use super::run_loop::{AnimationFrames, FrameLoop, FrameScheduler};
use super::theme::NeonPalette;
use crate::components::nav::MenuDisplay;

/// Headings that glitch on hover.
pub const GLITCH_SELECTOR: &str = ".hero-title, .section-title";
/// Decorative elements driven by the floating animator.
pub const FLOATING_SELECTOR: &str = ".floating-element";

/// How the page is being left when `pagehide` fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageExit {
	/// Kept in the back/forward cache and may be shown again.
	Cached,
	/// Gone for good.
	Unloaded,
}

impl PageExit {
	/// Classify a `pagehide` by its `persisted` flag.
	pub fn from_persisted(persisted: bool) -> Self {
		if persisted {
			PageExit::Cached
		} else {
			PageExit::Unloaded
		}
	}

	/// Cached pages keep their effects so they resume when restored.
	pub fn stops_effects(self) -> bool {
		self == PageExit::Unloaded
	}
}

/// The particle and floating frame loops. Either may be absent when its
/// elements could not be set up.
struct Animations<S: FrameScheduler + 'static = AnimationFrames> {
	particles: Option<FrameLoop<S>>,
	floating: Option<FrameLoop<S>>,
}

impl<S: FrameScheduler + 'static> Animations<S> {
	fn is_running(&self) -> bool {
		[&self.particles, &self.floating]
			.into_iter()
			.flatten()
			.any(FrameLoop::is_running)
	}

	fn stop(&mut self) {
		for mut l in [self.particles.take(), self.floating.take()]
			.into_iter()
			.flatten()
		{
			l.stop();
		}
	}
}

/// Every running page effect, torn down together by [`stop`](Self::stop).
pub struct EffectsRuntime {
	window: Window,
	animations: Animations,
	glitches: Vec<GlitchBinding>,
	reveal: Option<ScrollReveal>,
	resize: Option<Closure<dyn FnMut()>>,
}

impl EffectsRuntime {
	/// Wire every effect to the mounted page. Effects whose elements are
	/// missing are skipped with a warning.
	pub fn start(
		config: &EffectsConfig,
		particle_container: &Element,
		menu: RwSignal<MenuDisplay>,
	) -> Option<Self> {
		let window = web_sys::window()?;
		let document = window.document()?;
		let palette = NeonPalette::neon();
		let mut rng = fastrand::Rng::new();

		let particle_loop = start_particles(
			particle_container,
			config,
			&palette,
			PerformanceClock::new(),
			&mut rng,
		);
		let floating_loop = start_floating(
			&window,
			&document,
			config,
			&palette,
			PerformanceClock::new(),
			&mut rng,
		);

		let glitches: Vec<_> = query_all(&document, GLITCH_SELECTOR)
			.into_iter()
			.filter_map(|el| {
				GlitchBinding::attach(el, &config.glitch, &palette, rng.u64(..))
					.map_err(|e| warn!("neon-landing: glitch binding failed: {:?}", e))
					.ok()
			})
			.collect();

		let reveal = match ScrollReveal::observe(&document, &config.reveal) {
			Ok(r) => Some(r),
			Err(e) => {
				warn!("neon-landing: scroll reveal unavailable: {:?}", e);
				None
			}
		};

		let resize = bind_menu_reset(&window, menu, config.nav.menu_breakpoint);

		info!(
			"neon-landing: effects started ({} glitch titles)",
			glitches.len()
		);

		Some(Self {
			window,
			animations: Animations {
				particles: particle_loop,
				floating: floating_loop,
			},
			glitches,
			reveal,
			resize,
		})
	}

	/// True while either frame loop is still scheduling frames.
	pub fn is_running(&self) -> bool {
		self.animations.is_running()
	}

	/// React to `pagehide`. Effects survive a trip through the back/forward
	/// cache and are torn down only when the page is unloaded.
	pub fn page_hidden(&mut self, exit: PageExit) {
		if !exit.stops_effects() {
			debug!("neon-landing: page cached, effects kept");
			return;
		}
		if self.is_running() {
			self.stop();
		}
	}

	/// Stop both frame loops and release every listener.
	pub fn stop(&mut self) {
		self.animations.stop();
		for g in self.glitches.drain(..) {
			g.detach();
		}
		if let Some(r) = self.reveal.take() {
			r.disconnect();
		}
		if let Some(cb) = self.resize.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		info!("neon-landing: effects stopped");
	}
}

fn start_particles(
	container: &Element,
	config: &EffectsConfig,
	palette: &NeonPalette,
	clock: impl Clock + 'static,
	rng: &mut fastrand::Rng,
) -> Option<FrameLoop> {
	let mut field = ParticleField::new(&config.particles, rng);
	let layer = match ParticleLayer::mount(container, &field, palette) {
		Ok(layer) => layer,
		Err(e) => {
			warn!("neon-landing: could not create particles: {:?}", e);
			return None;
		}
	};
	info!("neon-landing: {} particles", field.len());

	Some(FrameLoop::start("particle", move || {
		field.advance(clock.now_ms());
		layer.sync(&field);
	}))
}

fn start_floating(
	window: &Window,
	document: &Document,
	config: &EffectsConfig,
	palette: &NeonPalette,
	clock: impl Clock + 'static,
	rng: &mut fastrand::Rng,
) -> Option<FrameLoop> {
	let elements = query_all(document, FLOATING_SELECTOR);
	if elements.is_empty() {
		debug!("neon-landing: no floating elements on page");
		return None;
	}

	let mut field = FloatingField::new(elements.len(), &config.floating, rng);
	let layer = FloatingLayer::bind(elements, window.clone(), &field, palette);
	info!("neon-landing: {} floating elements", layer.len());

	Some(FrameLoop::start("floating", move || {
		let extents = layer.measure();
		field.advance(clock.now_ms(), |i| {
			extents.get(i).copied().unwrap_or_default()
		});
		layer.sync(&field);
	}))
}

/// Clear the mobile menu's inline display once the viewport is wide enough
/// for the desktop layout.
fn bind_menu_reset(
	window: &Window,
	menu: RwSignal<MenuDisplay>,
	breakpoint: f64,
) -> Option<Closure<dyn FnMut()>> {
	let win = window.clone();
	let cb = Closure::<dyn FnMut()>::new(move || {
		let Some((width, _)) = viewport_size(&win) else {
			return;
		};
		let Some(current) = menu.try_get_untracked() else {
			return;
		};
		let next = current.after_resize(width, breakpoint);
		if next != current {
			menu.set(next);
		}
	});
	window
		.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
		.ok()?;
	Some(cb)
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;
	use crate::components::effects::run_loop::testing::ManualFrames;

	fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
		let count = Rc::new(Cell::new(0));
		let seen = count.clone();
		(count, move || seen.set(seen.get() + 1))
	}

	#[test]
	fn stop_halts_both_loops() {
		let frames = ManualFrames::default();
		let (particle_frames, particle_tick) = counter();
		let (floating_frames, floating_tick) = counter();
		let mut animations = Animations {
			particles: Some(FrameLoop::with_scheduler("particle", frames.clone(), particle_tick)),
			floating: Some(FrameLoop::with_scheduler("floating", frames.clone(), floating_tick)),
		};
		frames.refresh();
		assert!(animations.is_running());
		assert_eq!((particle_frames.get(), floating_frames.get()), (1, 1));

		animations.stop();
		assert!(!animations.is_running());
		assert!(animations.particles.is_none());
		assert!(animations.floating.is_none());
		assert_eq!(frames.queued(), 0);
		frames.refresh();
		assert_eq!((particle_frames.get(), floating_frames.get()), (1, 1));

		animations.stop();
	}

	#[test]
	fn only_unloading_stops_effects() {
		assert_eq!(PageExit::from_persisted(true), PageExit::Cached);
		assert_eq!(PageExit::from_persisted(false), PageExit::Unloaded);
		assert!(!PageExit::Cached.stops_effects());
		assert!(PageExit::Unloaded.stops_effects());
	}

	#[test]
	fn missing_loops_are_not_running() {
		let mut animations: Animations<ManualFrames> = Animations {
			particles: None,
			floating: None,
		};
		assert!(!animations.is_running());
		animations.stop();
	}
}
