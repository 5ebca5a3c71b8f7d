//! Large decorative shapes that drift, bounce off the viewport edges, spin
//! and breathe in opacity.
//!
//! Motion state lives here in a parallel vector indexed like the bound DOM
//! elements; nothing is stored on the elements themselves.

use super::config::FloatingConfig;
use super::env::RandomSource;
use super::particles::VIEWPORT_SPAN;

/// Number of distinct gradient/border styles, assigned cyclically.
pub const FLOATING_STYLES: usize = 3;

/// Live layout size of an element as a percentage of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
	/// Rendered width as a percentage of the viewport width.
	pub width_pct: f64,
	/// Rendered height as a percentage of the viewport height.
	pub height_pct: f64,
}

/// Motion state for one floating element.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingShape {
	/// Horizontal position in viewport percent.
	pub x: f64,
	/// Vertical position in viewport percent.
	pub y: f64,
	/// Horizontal velocity per frame.
	pub speed_x: f64,
	/// Vertical velocity per frame.
	pub speed_y: f64,
	/// Accumulated rotation in degrees. Never wrapped.
	pub rotation: f64,
	/// Degrees added to `rotation` every frame.
	pub rotation_speed: f64,
	/// Edge length in pixels.
	pub size: f64,
	/// Gradient and border choice, `index % FLOATING_STYLES`.
	pub style_index: usize,
	/// Opacity from the last frame.
	pub opacity: f64,
}

/// Owns the motion state of every floating element.
pub struct FloatingField {
	shapes: Vec<FloatingShape>,
	opacity_base: f64,
	opacity_pulse: f64,
}

impl FloatingField {
	/// Create motion state for `count` elements, styled cyclically.
	pub fn new(count: usize, config: &FloatingConfig, rng: &mut impl RandomSource) -> Self {
		let shapes = (0..count)
			.map(|index| FloatingShape {
				size: rng.uniform(config.size_min, config.size_max),
				style_index: index % FLOATING_STYLES,
				x: rng.uniform(config.spawn_min, config.spawn_max),
				y: rng.uniform(config.spawn_min, config.spawn_max),
				speed_x: rng.symmetric(config.max_speed),
				speed_y: rng.symmetric(config.max_speed),
				rotation: rng.uniform(0.0, 360.0),
				rotation_speed: rng.symmetric(config.max_rotation_speed),
				opacity: 1.0,
			})
			.collect();

		Self {
			shapes,
			opacity_base: config.opacity_base,
			opacity_pulse: config.opacity_pulse,
		}
	}

	/// Shapes indexed like the bound elements.
	pub fn shapes(&self) -> &[FloatingShape] {
		&self.shapes
	}

	/// Number of shapes.
	pub fn len(&self) -> usize {
		self.shapes.len()
	}

	/// True when there are no shapes.
	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty()
	}

	/// Advance every shape one frame.
	///
	/// `extent(i)` reports the current rendered size of element `i`. A
	/// velocity component flips when the candidate position reaches either
	/// bound, but the shape still moves to that unclamped candidate, so it
	/// may overshoot the bound for a single frame.
	pub fn advance(&mut self, elapsed_ms: f64, mut extent: impl FnMut(usize) -> Extent) {
		let phase = elapsed_ms * 0.001;
		for (i, s) in self.shapes.iter_mut().enumerate() {
			let bounds = extent(i);
			let nx = s.x + s.speed_x;
			let ny = s.y + s.speed_y;

			if nx <= 0.0 || nx >= VIEWPORT_SPAN - bounds.width_pct {
				s.speed_x = -s.speed_x;
			}
			if ny <= 0.0 || ny >= VIEWPORT_SPAN - bounds.height_pct {
				s.speed_y = -s.speed_y;
			}

			s.x = nx;
			s.y = ny;
			s.rotation += s.rotation_speed;
			s.opacity = self.opacity_base + (phase + nx).sin() * self.opacity_pulse;
		}
	}
}
