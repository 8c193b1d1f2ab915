use bevy::prelude::*;

use crate::error::BookshelfError;
use crate::layout::{
    CameraPose, FilterContext, MinimumRating, ShelfLayout, ShelfView, camera_pose, compute_layout,
};
use crate::library::{BookEdit, BookId, BookRecord, Genre, Library, dataset::load_default_library};
use crate::library::book::validate_rating;

/// Whether an operation replaced the committed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    Recomputed,
    Unchanged,
}

impl LayoutChange {
    pub fn is_recomputed(self) -> bool {
        matches!(self, Self::Recomputed)
    }
}

/// Resource owning the library, the active shelf, the filters and the last
/// committed layout.
///
/// Every mutation that affects placement recomputes the whole layout and
/// replaces it in one step, bumping `generation`.
#[derive(Resource, Debug, Clone)]
pub struct ShelfSession {
    library: Library,
    active_shelf: ShelfView,
    filters: FilterContext,
    layout: ShelfLayout,
    generation: u64,
}

impl Default for ShelfSession {
    fn default() -> Self {
        Self::new(Library::default())
    }
}

impl ShelfSession {
    pub fn new(library: Library) -> Self {
        let mut session = Self {
            library,
            active_shelf: ShelfView::default(),
            filters: FilterContext::default(),
            layout: ShelfLayout::default(),
            generation: 0,
        };
        session.relayout();
        session
    }

    /// Session over the embedded starter collection.
    pub fn from_default_dataset() -> Result<Self, BookshelfError> {
        Ok(Self::new(load_default_library()?))
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn active_shelf(&self) -> ShelfView {
        self.active_shelf
    }

    pub fn filters(&self) -> &FilterContext {
        &self.filters
    }

    pub fn layout(&self) -> &ShelfLayout {
        &self.layout
    }

    /// Counts committed layouts, starting at 1 for the initial one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn camera_pose(&self) -> CameraPose {
        camera_pose(self.active_shelf)
    }

    pub fn shelf_title(&self) -> String {
        self.active_shelf.title(&self.filters)
    }

    /// Recompute and replace the committed layout.
    pub fn relayout(&mut self) -> LayoutChange {
        self.layout = compute_layout(self.library.as_slice(), self.active_shelf, &self.filters);
        self.generation += 1;
        debug!(
            "Layout {} committed for {}: {} placed, {} hidden",
            self.generation,
            self.active_shelf,
            self.layout.placed_count(),
            self.layout.hidden_count()
        );
        LayoutChange::Recomputed
    }

    /// Switch shelves. Always relayouts, even when the shelf is unchanged.
    pub fn set_shelf_view(&mut self, shelf: ShelfView) -> LayoutChange {
        self.active_shelf = shelf;
        self.relayout()
    }

    pub fn set_genre_filter(&mut self, genre: Genre) -> LayoutChange {
        self.filters.active_genre = genre;
        self.relayout_if_active(ShelfView::Genre)
    }

    pub fn cycle_genre(&mut self, direction: i32) -> LayoutChange {
        self.set_genre_filter(self.filters.active_genre.cycle(direction))
    }

    pub fn set_rating_filter(&mut self, minimum: u8) -> Result<LayoutChange, BookshelfError> {
        let minimum = MinimumRating::new(minimum)?;
        Ok(self.apply_rating_filter(minimum))
    }

    /// Nudge the minimum rating, clamped to 1..=5.
    pub fn step_rating_filter(&mut self, delta: i32) -> LayoutChange {
        let minimum = self.filters.minimum_rating.step(delta);
        self.apply_rating_filter(minimum)
    }

    fn apply_rating_filter(&mut self, minimum: MinimumRating) -> LayoutChange {
        self.filters.minimum_rating = minimum;
        self.relayout_if_active(ShelfView::Rated)
    }

    fn relayout_if_active(&mut self, owner: ShelfView) -> LayoutChange {
        if self.active_shelf == owner {
            self.relayout()
        } else {
            LayoutChange::Unchanged
        }
    }

    /// Store a new rating and notes. Placement is left as it is until the
    /// next relayout.
    pub fn commit_book_edit(
        &mut self,
        id: BookId,
        edit: &BookEdit,
    ) -> Result<&BookRecord, BookshelfError> {
        validate_rating(id, edit.rating)?;
        let book = self
            .library
            .get_mut(id)
            .ok_or(BookshelfError::UnknownBook(id))?;
        book.rating = edit.rating;
        book.notes = edit.notes.clone();
        Ok(book)
    }

    /// Record the shelf a book was dropped on and relayout.
    pub fn commit_drop(&mut self, id: BookId, shelf: ShelfView) -> Result<LayoutChange, BookshelfError> {
        let book = self
            .library
            .get_mut(id)
            .ok_or(BookshelfError::UnknownBook(id))?;
        book.shelf_assignment = Some(shelf);
        Ok(self.relayout())
    }

    /// Append a book to the end of the library and relayout.
    pub fn add_book(&mut self, record: BookRecord) -> Result<LayoutChange, BookshelfError> {
        self.library.insert(record)?;
        Ok(self.relayout())
    }
}
