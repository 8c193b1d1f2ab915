//! Easing curves and the small tween type driving book and camera motion.

pub mod easing;
pub mod tween;

pub use easing::{Easing, apply_easing};
pub use tween::Vec3Tween;
