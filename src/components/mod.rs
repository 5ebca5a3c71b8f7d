//! Page components and the effects they drive.

pub mod contact;
pub mod effects;
pub mod nav;
pub mod typewriter;
