//! Decorative page effects.
//!
//! - Ambient particles that drift and wrap around the viewport
//! - Floating shapes that bounce off the edges, spin and breathe
//! - Hover glitch on headings
//! - Scroll-triggered reveal of cards
//!
//! The motion models (`particles`, `floating`) are plain state machines
//! advanced once per frame; `render` copies their state onto DOM nodes and
//! `runtime` owns the frame loops that tie the two together.

pub mod config;
pub mod env;
pub mod floating;
pub mod glitch;
pub mod particles;
mod render;
mod reveal;
pub mod run_loop;
mod runtime;
pub mod theme;

pub use config::EffectsConfig;
pub use runtime::{EffectsRuntime, PageExit};
