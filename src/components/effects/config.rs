//! Tunable constants for every landing page effect.
//!
//! The defaults reproduce the stock page. A page can override any subset by
//! embedding JSON in a `<script id="landing-config">` element; omitted fields
//! keep their defaults.
//!
//! ```json
//! { "particles": { "count": 80 }, "toast": { "visible_ms": 8000 } }
//! ```

use serde::Deserialize;

use crate::components::typewriter::TypewriterOptions;

/// Ambient particle field settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Number of particles created at start-up.
	pub count: usize,
	/// Maximum absolute per-frame velocity on each axis, in viewport percent.
	pub max_speed: f64,
	/// Smallest particle diameter in pixels.
	pub size_min: f64,
	/// Largest particle diameter in pixels.
	pub size_max: f64,
	/// Amplitude of the scale pulse around 1.0.
	pub pulse: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 50,
			max_speed: 0.25,
			size_min: 1.0,
			size_max: 5.0,
			pulse: 0.3,
		}
	}
}

/// Floating decorative shape settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FloatingConfig {
	/// Maximum absolute per-frame velocity on each axis, in viewport percent.
	pub max_speed: f64,
	/// Maximum absolute rotation per frame, in degrees.
	pub max_rotation_speed: f64,
	/// Smallest edge length in pixels.
	pub size_min: f64,
	/// Largest edge length in pixels.
	pub size_max: f64,
	/// Initial positions are sampled from `[spawn_min, spawn_max]` on each axis.
	pub spawn_min: f64,
	/// Upper end of the spawn range.
	pub spawn_max: f64,
	/// Opacity oscillates in `[opacity_base - opacity_pulse, opacity_base + opacity_pulse]`.
	pub opacity_base: f64,
	/// Amplitude of the opacity oscillation.
	pub opacity_pulse: f64,
}

impl Default for FloatingConfig {
	fn default() -> Self {
		Self {
			max_speed: 0.15,
			max_rotation_speed: 0.25,
			size_min: 100.0,
			size_max: 300.0,
			spawn_min: 10.0,
			spawn_max: 90.0,
			opacity_base: 0.8,
			opacity_pulse: 0.2,
		}
	}
}

/// Hover glitch settings for titles.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlitchConfig {
	/// Time between scramble ticks while hovered.
	pub interval_ms: u32,
	/// Chance that any one character is replaced on a glitch tick.
	pub probability: f64,
}

impl Default for GlitchConfig {
	fn default() -> Self {
		Self {
			interval_ms: 100,
			probability: 0.3,
		}
	}
}

/// Scroll-triggered reveal settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
	/// Visible fraction that counts as intersecting.
	pub threshold: f64,
	/// Margin applied to the viewport before intersecting.
	pub root_margin: String,
	/// Elements observed for reveal.
	pub selector: String,
	/// Class added once an element becomes visible.
	pub class_name: String,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin: "0px 0px -100px 0px".to_string(),
			selector: ".arch-card, .feature-card".to_string(),
			class_name: "animate-in".to_string(),
		}
	}
}

/// Toast notification timings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
	/// Time a toast stays fully visible before it starts leaving.
	pub visible_ms: u32,
	/// Duration of the exit transition.
	pub exit_ms: u32,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self {
			visible_ms: 5000,
			exit_ms: 300,
		}
	}
}

/// Navigation behavior.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
	/// Space left above an anchor target after smooth scrolling (fixed header height).
	pub scroll_offset: f64,
	/// Viewport width above which the mobile menu's inline display is cleared.
	pub menu_breakpoint: f64,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			scroll_offset: 80.0,
			menu_breakpoint: 768.0,
		}
	}
}

/// Every tunable used by the page, grouped by effect.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
	/// Background particles.
	pub particles: ParticleConfig,
	/// Floating decorative shapes.
	pub floating: FloatingConfig,
	/// Title hover glitch.
	pub glitch: GlitchConfig,
	/// Scroll reveal of cards.
	pub reveal: RevealConfig,
	/// Hero tagline typewriter.
	pub typewriter: TypewriterOptions,
	/// Toast timings.
	pub toast: ToastConfig,
	/// Smooth scrolling and mobile menu.
	pub nav: NavConfig,
	/// Simulated round trip of the contact form submission.
	pub submit_delay_ms: u32,
}

impl Default for EffectsConfig {
	fn default() -> Self {
		Self {
			particles: ParticleConfig::default(),
			floating: FloatingConfig::default(),
			glitch: GlitchConfig::default(),
			reveal: RevealConfig::default(),
			typewriter: TypewriterOptions::default(),
			toast: ToastConfig::default(),
			nav: NavConfig::default(),
			submit_delay_ms: 1500,
		}
	}
}

impl EffectsConfig {
	/// Parse a JSON override; fields that are absent keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_stock_page() {
		let config = EffectsConfig::default();
		assert_eq!(config.particles.count, 50);
		assert_eq!(config.particles.max_speed, 0.25);
		assert_eq!(config.floating.max_speed, 0.15);
		assert_eq!(config.floating.size_min, 100.0);
		assert_eq!(config.floating.size_max, 300.0);
		assert_eq!(config.glitch.interval_ms, 100);
		assert_eq!(config.reveal.threshold, 0.1);
		assert_eq!(config.toast.visible_ms, 5000);
		assert_eq!(config.toast.exit_ms, 300);
		assert_eq!(config.nav.scroll_offset, 80.0);
		assert_eq!(config.nav.menu_breakpoint, 768.0);
		assert_eq!(config.submit_delay_ms, 1500);
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config =
			EffectsConfig::from_json(r#"{ "particles": { "count": 80 }, "submit_delay_ms": 10 }"#)
				.unwrap();
		assert_eq!(config.particles.count, 80);
		assert_eq!(config.particles.size_max, 5.0);
		assert_eq!(config.submit_delay_ms, 10);
		assert_eq!(config.floating, FloatingConfig::default());
	}

	#[test]
	fn malformed_override_is_an_error() {
		assert!(EffectsConfig::from_json(r#"{ "particles": { "count": "many" } }"#).is_err());
	}
}
