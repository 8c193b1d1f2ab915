//! Runtime overlays and diagnostics.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the frontend via RPC and updates the native overlay.
pub mod fps_tracking;

/// Native heading showing the active shelf's title.
pub mod shelf_label;
