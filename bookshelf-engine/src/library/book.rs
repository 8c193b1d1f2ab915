use std::fmt;
use std::str::FromStr;

use constants::shelf_layout::MAX_BOOK_RATING;
use serde::{Deserialize, Serialize};

use crate::error::BookshelfError;
use crate::layout::ShelfView;

/// Stable book identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed genre set. Declaration order is the spinner order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    #[serde(rename = "Fantasy")]
    Fantasy,
    #[serde(rename = "Mystery")]
    Mystery,
    #[serde(rename = "Romance")]
    Romance,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Romance,
        Genre::NonFiction,
    ];

    /// Display label, also the wire format.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::ScienceFiction => "Science Fiction",
            Self::Fantasy => "Fantasy",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::NonFiction => "Non-Fiction",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|g| *g == self).unwrap_or(0)
    }

    /// Step through the genre list, wrapping at both ends.
    pub fn cycle(self, direction: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let next = (self.index() as i32 + direction).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BookshelfError::UnknownGenre(s.to_string()))
    }
}

/// Reading status. Only the to-be-read shelf looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[serde(rename = "tbr", alias = "to-be-read")]
    ToBeRead,
    #[serde(rename = "read")]
    Read,
}

impl FromStr for ReadingStatus {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tbr" | "to-be-read" => Ok(Self::ToBeRead),
            "read" => Ok(Self::Read),
            _ => Err(BookshelfError::UnknownStatus(s.to_string())),
        }
    }
}

/// Book metadata as held by the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    /// 0 means unrated.
    #[serde(default)]
    pub rating: u8,
    pub status: ReadingStatus,
    #[serde(default)]
    pub notes: String,
    /// Shelf chosen by the last successful drag-drop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_assignment: Option<ShelfView>,
}

impl BookRecord {
    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    pub fn validate(&self) -> Result<(), BookshelfError> {
        validate_rating(self.id, self.rating)
    }
}

/// Fields the detail view can change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookEdit {
    pub rating: u8,
    #[serde(default)]
    pub notes: String,
}

pub(crate) fn validate_rating(book: BookId, rating: u8) -> Result<(), BookshelfError> {
    if rating > MAX_BOOK_RATING {
        return Err(BookshelfError::InvalidRating { book, rating });
    }
    Ok(())
}
