//! Host collaborators the effects depend on: a monotonic clock and a
//! uniform random source.

use web_sys::Performance;

/// Monotonic milliseconds since an arbitrary epoch.
pub trait Clock {
	/// Current time in milliseconds.
	fn now_ms(&self) -> f64;
}

/// Clock backed by `performance.now()`, with `Date.now()` as fallback when
/// the Performance API is unavailable.
pub struct PerformanceClock {
	performance: Option<Performance>,
}

impl PerformanceClock {
	/// Bind to the window's Performance object, if any.
	pub fn new() -> Self {
		Self {
			performance: web_sys::window().and_then(|w| w.performance()),
		}
	}
}

impl Default for PerformanceClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for PerformanceClock {
	fn now_ms(&self) -> f64 {
		match &self.performance {
			Some(p) => p.now(),
			None => js_sys::Date::now(),
		}
	}
}

/// Uniform random numbers in `[0, 1)`.
pub trait RandomSource {
	/// Next sample in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Uniform sample in `[lo, hi)`.
	fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}

	/// Uniform sample in `[-magnitude, magnitude)`.
	fn symmetric(&mut self, magnitude: f64) -> f64 {
		(self.next_f64() - 0.5) * 2.0 * magnitude
	}

	/// Uniform index in `0..len`. `len` must be non-zero.
	fn pick(&mut self, len: usize) -> usize {
		((self.next_f64() * len as f64) as usize).min(len - 1)
	}

	/// True with probability `p`.
	fn chance(&mut self, p: f64) -> bool {
		self.next_f64() < p
	}
}

impl RandomSource for fastrand::Rng {
	fn next_f64(&mut self) -> f64 {
		self.f64()
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::RandomSource;

	/// Replays a fixed sequence of samples, cycling when exhausted.
	pub struct Sequence {
		values: Vec<f64>,
		next: usize,
	}

	impl Sequence {
		pub fn new(values: &[f64]) -> Self {
			Self {
				values: values.to_vec(),
				next: 0,
			}
		}
	}

	impl RandomSource for Sequence {
		fn next_f64(&mut self) -> f64 {
			let v = self.values[self.next % self.values.len()];
			self.next += 1;
			v
		}
	}
}

#[cfg(test)]
mod tests {
	use super::testing::Sequence;
	use super::*;

	#[test]
	fn uniform_maps_unit_interval_onto_range() {
		let mut rng = Sequence::new(&[0.0, 0.5, 0.999]);
		assert_eq!(rng.uniform(100.0, 300.0), 100.0);
		assert_eq!(rng.uniform(100.0, 300.0), 200.0);
		assert!(rng.uniform(100.0, 300.0) < 300.0);
	}

	#[test]
	fn symmetric_is_centered_on_zero() {
		let mut rng = Sequence::new(&[0.0, 0.5]);
		assert_eq!(rng.symmetric(0.25), -0.25);
		assert_eq!(rng.symmetric(0.25), 0.0);
	}

	#[test]
	fn pick_stays_in_bounds() {
		let mut rng = fastrand::Rng::with_seed(7);
		for _ in 0..1000 {
			assert!(rng.pick(4) < 4);
		}
		let mut edge = Sequence::new(&[0.9999999999]);
		assert_eq!(edge.pick(4), 3);
	}
}
