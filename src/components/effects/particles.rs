//! Ambient background particles drifting across the viewport.
//!
//! Positions are in viewport percent (0 to 100 on each axis). Particles wrap
//! toroidally at the edges and pulse in scale with a shared time term offset
//! by their own x coordinate.

use super::config::ParticleConfig;
use super::env::RandomSource;

/// Side length of the viewport in percent units.
pub const VIEWPORT_SPAN: f64 = 100.0;

/// Reset value for a coordinate that crossed the low edge. Keeps positions
/// inside the half-open `[0, 100)` range.
pub const WRAP_CEILING: f64 = VIEWPORT_SPAN - 1e-9;

/// Number of colors a particle can be tinted with.
pub const PARTICLE_COLORS: usize = 4;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in viewport percent.
	pub x: f64,
	/// Vertical position in viewport percent.
	pub y: f64,
	/// Horizontal drift per frame.
	pub speed_x: f64,
	/// Vertical drift per frame.
	pub speed_y: f64,
	/// Diameter in pixels.
	pub size: f64,
	/// Index into the palette's particle colors.
	pub color: usize,
	/// Current pulse scale, recomputed each frame.
	pub scale: f64,
}

/// Owns every background particle for the lifetime of the page.
pub struct ParticleField {
	particles: Vec<Particle>,
	pulse: f64,
}

impl ParticleField {
	/// Scatter `config.count` particles uniformly over the viewport.
	pub fn new(config: &ParticleConfig, rng: &mut impl RandomSource) -> Self {
		let particles = (0..config.count)
			.map(|_| Particle {
				x: rng.uniform(0.0, VIEWPORT_SPAN),
				y: rng.uniform(0.0, VIEWPORT_SPAN),
				speed_x: rng.symmetric(config.max_speed),
				speed_y: rng.symmetric(config.max_speed),
				size: rng.uniform(config.size_min, config.size_max),
				color: rng.pick(PARTICLE_COLORS),
				scale: 1.0,
			})
			.collect();

		Self {
			particles,
			pulse: config.pulse,
		}
	}

	/// Particles in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True when the field holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Move every particle one frame and refresh its pulse scale.
	pub fn advance(&mut self, elapsed_ms: f64) {
		let phase = elapsed_ms * 0.001;
		for p in &mut self.particles {
			p.x = wrap(p.x + p.speed_x);
			p.y = wrap(p.y + p.speed_y);
			p.scale = 1.0 + (phase + p.x).sin() * self.pulse;
		}
	}
}

/// Teleport a coordinate that left the viewport to the opposite edge.
fn wrap(v: f64) -> f64 {
	if v >= VIEWPORT_SPAN {
		0.0
	} else if v < 0.0 {
		WRAP_CEILING
	} else {
		v
	}
}
