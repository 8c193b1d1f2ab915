use super::{BookRecord, Library};
use crate::error::BookshelfError;

/// The starter collection shipped with the app.
const DEFAULT_DATASET: &str = include_str!("../../assets/books.json");

/// Parse a JSON array of book records into a library.
pub fn parse_library(json: &str) -> Result<Library, BookshelfError> {
    let books: Vec<BookRecord> = serde_json::from_str(json)?;
    Library::new(books)
}

/// Load the embedded starter collection.
pub fn load_default_library() -> Result<Library, BookshelfError> {
    parse_library(DEFAULT_DATASET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{BookId, Genre, ReadingStatus};

    #[test]
    fn default_dataset_loads_twenty_books() {
        let library = load_default_library().unwrap();
        assert_eq!(library.len(), 20);
        let first = library.get(BookId(1)).unwrap();
        assert_eq!(first.title, "The Great Gatsby");
        assert_eq!(first.genre, Genre::Fiction);
    }

    #[test]
    fn default_dataset_has_four_unread_books() {
        let library = load_default_library().unwrap();
        let tbr = library
            .iter()
            .filter(|b| b.status == ReadingStatus::ToBeRead)
            .count();
        assert_eq!(tbr, 4);
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        let err = parse_library("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, BookshelfError::Dataset(_)));
    }
}
