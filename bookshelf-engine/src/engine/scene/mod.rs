//! Static scene pieces and short-lived visual feedback.

/// Expanding ring shown where a book lands.
pub mod drop_feedback;

/// Shelf units, floor, back wall and lights.
pub mod shelves;
