//! Session controller: the single owner of mutable shelf state.
//!
//! UI commands, keyboard shortcuts and drop commits all arrive as
//! `ShelfCommand` events and are applied by one system, so a layout committed
//! in a frame is complete before any presentation system reads it.

/// Command events and the system that applies them.
pub mod commands;

/// `ShelfSession` resource and its operations.
pub mod shelf_session;

pub use commands::{
    BookEditCommitted, CameraPoseRequest, CommandApplied, CommandReport, CommandSource,
    LayoutCommitted, ShelfAction, ShelfChanged, ShelfCommand, apply_shelf_commands,
    handle_shelf_keyboard_shortcuts,
};
pub use shelf_session::{LayoutChange, ShelfSession};
