//! Shared configuration for the bookshelf layout engine and its renderer.

pub mod animation;
pub mod render_settings;
pub mod shelf_layout;
