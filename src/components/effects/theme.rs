//! Neon color theming for the landing page effects.
//!
//! Provides the RGBA color type and the fixed palettes used by particles,
//! floating shapes, glitch titles and form feedback.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color at alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex for opaque colors, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Soft radial glow fading to transparent at 70% of the radius.
	pub fn to_radial_gradient(self) -> String {
		format!(
			"radial-gradient(circle, {} 0%, transparent 70%)",
			self.to_css()
		)
	}
}

/// Primary accent.
pub const CYAN: Color = Color::rgb(0, 243, 255);
/// Secondary accent.
pub const VIOLET: Color = Color::rgb(157, 0, 255);
/// Success and valid state.
pub const MINT: Color = Color::rgb(0, 255, 136);
/// Warm particle tint.
pub const AMBER: Color = Color::rgb(255, 222, 0);
/// Errors.
pub const ALERT: Color = Color::rgb(255, 0, 51);

/// The fixed neon palette shared by every effect.
#[derive(Clone, Copy, Debug)]
pub struct NeonPalette {
	/// Translucent particle fills. Particles pick one uniformly.
	pub particles: [Color; 4],
	/// Floating shape glow colors, chosen by `index % 3`.
	pub glows: [Color; 3],
	/// Floating shape border colors, chosen by `index % 3`.
	pub borders: [Color; 3],
	/// Colors a glitching title flickers between.
	pub glitch: [Color; 2],
	/// Accent for success toasts and valid input.
	pub success: Color,
	/// Accent for error toasts.
	pub error: Color,
	/// Accent for input that is not (yet) a valid email.
	pub pending: Color,
}

impl NeonPalette {
	/// The stock page colors.
	pub fn neon() -> Self {
		Self {
			particles: [
				CYAN.with_alpha(0.5),
				VIOLET.with_alpha(0.5),
				MINT.with_alpha(0.5),
				AMBER.with_alpha(0.5),
			],
			glows: [
				CYAN.with_alpha(0.1),
				VIOLET.with_alpha(0.1),
				MINT.with_alpha(0.1),
			],
			borders: [CYAN, VIOLET, MINT],
			glitch: [CYAN, VIOLET],
			success: MINT,
			error: ALERT,
			pending: CYAN,
		}
	}

	/// Particle fill for a color index.
	pub fn particle(&self, index: usize) -> Color {
		self.particles[index % self.particles.len()]
	}

	/// Background gradient for the floating shape with this style index.
	pub fn glow_gradient(&self, index: usize) -> String {
		self.glows[index % self.glows.len()].to_radial_gradient()
	}

	/// Border color for the floating shape with this style index.
	pub fn border(&self, index: usize) -> Color {
		self.borders[index % self.borders.len()]
	}
}

impl Default for NeonPalette {
	fn default() -> Self {
		Self::neon()
	}
}
