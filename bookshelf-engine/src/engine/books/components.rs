use bevy::prelude::*;
use constants::render_settings::{BOOK_BASE_SIZE, BOOK_SIZE_VARIATION, HIDDEN_Y};
use constants::animation::ARRANGE_DURATION_JITTER;

use crate::engine::animation::Vec3Tween;
use crate::library::{BookId, Genre};

/// Marks the entity rendering one library book.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
}

/// Unscaled mesh dimensions, used for picking.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BookSize(pub Vec3);

/// Interaction flags mirrored from the state machine's effects.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct BookPresentation {
    pub hovered: bool,
    pub dragging: bool,
    pub on_shelf: bool,
    /// Seconds since the book was opened, if it is open.
    pub opened: Option<f32>,
    /// Slot from the last committed layout.
    pub slot: Option<Vec3>,
}

/// Tweened components that add up to the book's transform.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BookMotion {
    /// Slot, hidden spot or drag position.
    pub base: Vec3Tween,
    /// Hover nudge, drag lift or open lift on top of `base`.
    pub offset: Vec3Tween,
    pub scale: Vec3Tween,
}

impl BookMotion {
    pub fn resting_at(position: Vec3) -> Self {
        Self {
            base: Vec3Tween::settled(position),
            offset: Vec3Tween::settled(Vec3::ZERO),
            scale: Vec3Tween::settled(Vec3::ONE),
        }
    }
}

// Integer hash giving a stable value in 0..1 per (book, salt).
pub(crate) fn unit_noise(id: BookId, salt: u32) -> f32 {
    let mut x = id.0.wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 24) as f32
}

/// Deterministic per-book dimensions within the configured variation.
pub fn book_dimensions(id: BookId) -> Vec3 {
    let base = Vec3::from_array(BOOK_BASE_SIZE);
    let variation = Vec3::from_array(BOOK_SIZE_VARIATION);
    base + variation * Vec3::new(unit_noise(id, 1), unit_noise(id, 2), unit_noise(id, 3))
}

/// Off-screen spawn point below the floor, scattered per book.
pub fn scatter_position(id: BookId) -> Vec3 {
    Vec3::new(
        unit_noise(id, 4) * 20.0 - 10.0,
        HIDDEN_Y,
        unit_noise(id, 5) * 10.0 - 5.0,
    )
}

/// Extra arrival time so books do not land in lockstep.
pub fn arrival_jitter(id: BookId) -> f32 {
    unit_noise(id, 6) * ARRANGE_DURATION_JITTER
}

/// Cover colour for each genre.
pub fn genre_colour(genre: Genre) -> Color {
    match genre {
        Genre::Fiction => Color::srgb_u8(0x8B, 0x00, 0x00),
        Genre::ScienceFiction => Color::srgb_u8(0x41, 0x69, 0xE1),
        Genre::Fantasy => Color::srgb_u8(0x8A, 0x2B, 0xE2),
        Genre::Mystery => Color::srgb_u8(0x2F, 0x4F, 0x4F),
        Genre::Romance => Color::srgb_u8(0xFF, 0x69, 0xB4),
        Genre::NonFiction => Color::srgb_u8(0x22, 0x8B, 0x22),
    }
}
