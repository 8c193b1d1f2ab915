use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use constants::shelf_layout::{
    CAMERA_DISTANCE, CAMERA_HEIGHT, FRONT_OFFSET, GENRE_ANCHOR, MAX_RATING_FILTER,
    MIN_RATING_FILTER, RATED_ANCHOR, TO_BE_READ_ANCHOR,
};
use serde::{Deserialize, Serialize};

use crate::error::BookshelfError;
use crate::library::Genre;

/// The three top-level display modes. Declaration order breaks nearest-shelf ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShelfView {
    ToBeRead,
    #[default]
    Rated,
    Genre,
}

impl ShelfView {
    pub const ALL: [ShelfView; 3] = [ShelfView::ToBeRead, ShelfView::Rated, ShelfView::Genre];

    /// Fixed base position of the shelf unit.
    pub fn anchor(self) -> Vec3 {
        match self {
            Self::ToBeRead => Vec3::from_array(TO_BE_READ_ANCHOR),
            Self::Rated => Vec3::from_array(RATED_ANCHOR),
            Self::Genre => Vec3::from_array(GENRE_ANCHOR),
        }
    }

    /// Wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToBeRead => "to-be-read",
            Self::Rated => "rated",
            Self::Genre => "genre",
        }
    }

    /// Heading shown above the shelf.
    pub fn title(self, filters: &FilterContext) -> String {
        match self {
            Self::ToBeRead => "To Be Read".to_string(),
            Self::Rated => "Rated Books".to_string(),
            Self::Genre => format!("{} Books", filters.active_genre),
        }
    }
}

impl fmt::Display for ShelfView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShelfView {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to-be-read" | "tbr" => Ok(Self::ToBeRead),
            "rated" => Ok(Self::Rated),
            "genre" => Ok(Self::Genre),
            _ => Err(BookshelfError::UnknownShelfView(s.to_string())),
        }
    }
}

/// Minimum rating accepted by the rated shelf, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MinimumRating(u8);

impl MinimumRating {
    pub fn new(value: u8) -> Result<Self, BookshelfError> {
        if (MIN_RATING_FILTER..=MAX_RATING_FILTER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BookshelfError::InvalidRatingFilter(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Step up or down, clamped to the valid range.
    pub fn step(self, delta: i32) -> Self {
        let next = (self.0 as i32 + delta).clamp(MIN_RATING_FILTER as i32, MAX_RATING_FILTER as i32);
        Self(next as u8)
    }
}

impl Default for MinimumRating {
    fn default() -> Self {
        Self(4)
    }
}

/// Ambient genre and rating selection. Each filter only matters while its
/// owning shelf view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterContext {
    pub active_genre: Genre,
    pub minimum_rating: MinimumRating,
}

/// Camera placement for a shelf view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Fixed camera pose for each shelf, derived from its anchor.
pub fn camera_pose(shelf: ShelfView) -> CameraPose {
    let anchor = shelf.anchor();
    CameraPose {
        position: Vec3::new(anchor.x, CAMERA_HEIGHT, CAMERA_DISTANCE),
        look_at: Vec3::new(anchor.x, CAMERA_HEIGHT, anchor.z + FRONT_OFFSET),
    }
}

/// Shelf whose anchor is closest to `point` on the floor plane (x, z).
/// Ties go to the shelf declared first.
pub fn find_nearest_shelf(point: Vec3) -> ShelfView {
    let mut nearest = ShelfView::ToBeRead;
    let mut nearest_distance = f32::INFINITY;

    for shelf in ShelfView::ALL {
        let anchor = shelf.anchor();
        let distance = Vec2::new(point.x - anchor.x, point.z - anchor.z).length();
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = shelf;
        }
    }

    nearest
}
