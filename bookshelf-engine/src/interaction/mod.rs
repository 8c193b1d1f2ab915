//! Pointer interaction: ray picking against book volumes and the
//! hover/drag/click state machine that turns pointer events into effects.
//!
//! The machine never touches the ECS. The shell builds a volume list from the
//! current book transforms, feeds it one `PointerInput` at a time and applies
//! the returned `InteractionEffect`s.

pub mod hit_test;
pub mod ray;
pub mod state_machine;

pub use hit_test::{BookHit, BookVolume, pick_book};
pub use ray::PointerRay;
pub use state_machine::{
    InteractionEffect, InteractionMachine, InteractionState, PointerInput, PointerKind,
};
