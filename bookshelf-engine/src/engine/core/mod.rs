//! Core application setup.
//!
//! Builds the Bevy app for both native and WASM targets, and owns the frame
//! ordering every other system slots into.

/// Application setup and plugin configuration for the Bevy engine.
///
/// `BookshelfCorePlugin` carries the session, the interaction machine and the
/// RPC bridge. `create_app` adds windowing, rendering and presentation on top.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
