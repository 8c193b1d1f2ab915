use std::collections::BTreeMap;

use bevy::prelude::*;
use constants::shelf_layout::{BASE_OFFSET, BOOKS_PER_LEVEL, FRONT_OFFSET, LEVEL_HEIGHT, SLOT_SPACING};

use super::shelf::{FilterContext, ShelfView};
use crate::library::{BookId, BookRecord, ReadingStatus};

/// A visible slot on the active shelf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub book_id: BookId,
    pub level_index: usize,
    pub index_on_level: usize,
    pub position: Vec3,
}

impl Slot {
    /// Running index across all levels, used to stagger arrival.
    pub fn order(&self) -> usize {
        self.level_index * BOOKS_PER_LEVEL + self.index_on_level
    }
}

/// Layout outcome for one book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotAssignment {
    Placed(Slot),
    Hidden,
}

impl SlotAssignment {
    pub fn slot(&self) -> Option<&Slot> {
        match self {
            Self::Placed(slot) => Some(slot),
            Self::Hidden => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

/// Full assignment of every book for one shelf view and filter context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShelfLayout {
    shelf: ShelfView,
    assignments: BTreeMap<BookId, SlotAssignment>,
}

impl ShelfLayout {
    pub fn shelf(&self) -> ShelfView {
        self.shelf
    }

    pub fn get(&self, id: BookId) -> Option<&SlotAssignment> {
        self.assignments.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BookId, &SlotAssignment)> {
        self.assignments.iter()
    }

    /// Placed slots in arrangement order.
    pub fn slots(&self) -> Vec<&Slot> {
        let mut slots: Vec<&Slot> = self.assignments.values().filter_map(|a| a.slot()).collect();
        slots.sort_by_key(|slot| slot.order());
        slots
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.assignments.values().filter(|a| a.is_placed()).count()
    }

    pub fn hidden_count(&self) -> usize {
        self.len() - self.placed_count()
    }

    /// Number of books on each level, index = level.
    pub fn level_counts(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        for slot in self.assignments.values().filter_map(|a| a.slot()) {
            if counts.len() <= slot.level_index {
                counts.resize(slot.level_index + 1, 0);
            }
            counts[slot.level_index] += 1;
        }
        counts
    }
}

/// Whether a book belongs on `shelf` under `filters`.
pub fn matches_shelf(book: &BookRecord, shelf: ShelfView, filters: &FilterContext) -> bool {
    match shelf {
        ShelfView::ToBeRead => book.status == ReadingStatus::ToBeRead,
        ShelfView::Rated => book.is_rated() && book.rating >= filters.minimum_rating.get(),
        ShelfView::Genre => book.genre == filters.active_genre,
    }
}

/// World position of the `k`-th selected book on `shelf`.
pub fn slot_position(shelf: ShelfView, k: usize) -> (usize, usize, Vec3) {
    let anchor = shelf.anchor();
    let level = k / BOOKS_PER_LEVEL;
    let index = k % BOOKS_PER_LEVEL;
    let position = Vec3::new(
        anchor.x + (index as f32 - BOOKS_PER_LEVEL as f32 / 2.0) * SLOT_SPACING,
        level as f32 * LEVEL_HEIGHT + BASE_OFFSET,
        anchor.z + FRONT_OFFSET,
    );
    (level, index, position)
}

/// Assign every book either a slot on `active_shelf` or `Hidden`.
///
/// Selected books keep the order of `books`; no sorting is applied. The result
/// depends only on the arguments, so repeated calls agree.
///
/// Book ids must be unique, as `Library` guarantees. A repeated id would take
/// a slot for each occurrence while only the last one is kept in the result.
pub fn compute_layout(
    books: &[BookRecord],
    active_shelf: ShelfView,
    filters: &FilterContext,
) -> ShelfLayout {
    let mut assignments = BTreeMap::new();
    let mut k = 0;

    for book in books {
        let assignment = if matches_shelf(book, active_shelf, filters) {
            let (level_index, index_on_level, position) = slot_position(active_shelf, k);
            k += 1;
            SlotAssignment::Placed(Slot {
                book_id: book.id,
                level_index,
                index_on_level,
                position,
            })
        } else {
            SlotAssignment::Hidden
        };
        let previous = assignments.insert(book.id, assignment);
        debug_assert!(previous.is_none(), "duplicate book id {}", book.id);
    }

    ShelfLayout {
        shelf: active_shelf,
        assignments,
    }
}
