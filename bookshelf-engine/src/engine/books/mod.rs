//! Book entities: spawning, layout targets, interaction feedback and motion.
//!
//! The committed `ShelfLayout` is authoritative. Each book entity tweens
//! towards its slot, and its `Transform` is what the picker reads back.

pub mod components;
pub mod effects;
pub mod layout_targets;
pub mod motion;
pub mod spawn;

pub use components::{Book, BookMotion, BookPresentation, BookSize};
pub use effects::apply_interaction_effects;
pub use layout_targets::apply_layout_targets;
pub use motion::animate_books;
pub use spawn::{announce_initial_layout, spawn_missing_books};
