//! Shelf layout engine.
//!
//! Pure functions mapping the book list, the active shelf view and the filter
//! context to a slot for every book, plus the fixed camera pose per shelf and
//! nearest-shelf lookup used when a drag is dropped.
//!
//! ## Slot geometry
//!
//! ```text
//! level 1   [8] [9] ...                         y = 1 * 2 + 0.6
//! level 0   [0] [1] [2] [3] [4] [5] [6] [7]     y = 0 * 2 + 0.6
//!            x = anchor.x + (index - 4) * 0.7,  z = anchor.z + 0.3
//! ```
//!
//! Books that do not match the active shelf are `Hidden`. The layout is always
//! recomputed in full; it is never patched.

/// Filtering and slot assignment.
pub mod arrangement;

/// Shelf identifiers, anchors, filter context and camera poses.
pub mod shelf;

pub use arrangement::{ShelfLayout, Slot, SlotAssignment, compute_layout, matches_shelf};
pub use shelf::{CameraPose, FilterContext, MinimumRating, ShelfView, camera_pose, find_nearest_shelf};
