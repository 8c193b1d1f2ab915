//! Pointer capture and the bridge between ECS book entities and the
//! interaction state machine.

pub mod interaction_driver;
pub mod pointer_capture;

pub use interaction_driver::{collect_book_volumes, drive_interaction};
pub use pointer_capture::{PointerTracker, capture_pointer_input};
