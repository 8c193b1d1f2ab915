//! Error types shared by the layout engine, the interaction state machine and
//! the session controller.

use thiserror::Error;

use crate::library::BookId;

/// Errors surfaced by the bookshelf core.
///
/// Configuration errors come from unrecognised identifiers at the boundary and
/// are reported to the caller straight away. Invalid events are logged and
/// leave all state untouched.
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// A shelf view identifier that is not one of the three known shelves.
    #[error("Configuration error: unknown shelf view '{0}'")]
    UnknownShelfView(String),
    /// A genre label outside the fixed genre set.
    #[error("Configuration error: unknown genre '{0}'")]
    UnknownGenre(String),
    /// A reading status label that is neither to-be-read nor read.
    #[error("Configuration error: unknown reading status '{0}'")]
    UnknownStatus(String),
    /// Rating filter outside 1..=5.
    #[error("Invalid event: minimum rating {0} is outside 1..=5")]
    InvalidRatingFilter(u8),
    /// Book rating outside 0..=5.
    #[error("Invalid event: rating {rating} for book {book} is outside 0..=5")]
    InvalidRating { book: BookId, rating: u8 },
    /// An event referenced a book that is not in the library.
    #[error("Invalid event: unknown book {0}")]
    UnknownBook(BookId),
    /// A book with this id already exists.
    #[error("Invalid event: book {0} already exists")]
    DuplicateBook(BookId),
    /// The embedded book dataset failed to parse.
    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}

impl BookshelfError {
    /// Programming errors at the configuration boundary, as opposed to
    /// transient malformed events.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownShelfView(_) | Self::UnknownGenre(_) | Self::UnknownStatus(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        assert!(BookshelfError::UnknownShelfView("attic".into()).is_configuration_error());
        assert!(BookshelfError::UnknownGenre("Poetry".into()).is_configuration_error());
        assert!(!BookshelfError::UnknownBook(BookId(3)).is_configuration_error());
        assert!(!BookshelfError::InvalidRatingFilter(0).is_configuration_error());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = BookshelfError::InvalidRating {
            book: BookId(7),
            rating: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('9'));
    }
}
