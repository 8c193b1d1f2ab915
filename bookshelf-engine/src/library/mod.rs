//! Book metadata and the ordered collection the layout engine reads.
//!
//! The library keeps books in dataset order. Layout is stable with respect to
//! that order, so appending a book never reshuffles the ones already shelved.

/// Book identity, genre, reading status and editable fields.
pub mod book;

/// Embedded default dataset and JSON parsing.
pub mod dataset;

pub use book::{BookEdit, BookId, BookRecord, Genre, ReadingStatus};

use crate::error::BookshelfError;

/// Ordered, id-unique list of books.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<BookRecord>,
}

impl Library {
    /// Build a library, rejecting duplicate ids and out-of-range ratings.
    pub fn new(books: Vec<BookRecord>) -> Result<Self, BookshelfError> {
        let mut library = Self::default();
        for book in books {
            library.insert(book)?;
        }
        Ok(library)
    }

    /// Append a book at the end of the ordering.
    pub fn insert(&mut self, book: BookRecord) -> Result<(), BookshelfError> {
        book.validate()?;
        if self.contains(book.id) {
            return Err(BookshelfError::DuplicateBook(book.id));
        }
        self.books.push(book);
        Ok(())
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.books.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: BookId) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut BookRecord> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Position of a book in the ordering.
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.iter()
    }

    pub fn as_slice(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> BookRecord {
        BookRecord {
            id: BookId(id),
            title: format!("Book {id}"),
            author: "Anon".into(),
            genre: Genre::Fiction,
            rating: 3,
            status: ReadingStatus::Read,
            notes: String::new(),
            shelf_assignment: None,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Library::new(vec![record(1), record(2), record(1)]);
        assert!(matches!(result, Err(BookshelfError::DuplicateBook(BookId(1)))));
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut library = Library::new(vec![record(5), record(2)]).unwrap();
        library.insert(record(9)).unwrap();
        let ids: Vec<u32> = library.iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![5, 2, 9]);
        assert_eq!(library.position(BookId(9)), Some(2));
    }

    #[test]
    fn invalid_rating_blocks_insert() {
        let mut bad = record(4);
        bad.rating = 8;
        let mut library = Library::default();
        assert!(library.insert(bad).is_err());
        assert!(library.is_empty());
    }
}
