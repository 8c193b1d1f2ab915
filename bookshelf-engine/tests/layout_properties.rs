//! Property-based invariant tests for the shelf layout engine.
//!
//! 1. Every book is either placed or hidden, never both, never missing.
//! 2. A book is placed exactly when it matches the active shelf.
//! 3. Slots fill levels contiguously, at most eight per level, in library order.
//! 4. Recomputing with the same inputs gives the same layout.
//! 5. The nearest shelf is no further away than any other shelf.

use std::collections::HashSet;

use bevy::math::Vec3;
use bookshelf_engine::layout::{
    FilterContext, MinimumRating, ShelfView, compute_layout, find_nearest_shelf, matches_shelf,
};
use bookshelf_engine::library::{BookId, BookRecord, Genre, ReadingStatus};
use constants::shelf_layout::BOOKS_PER_LEVEL;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn books(max_len: usize) -> impl Strategy<Value = Vec<BookRecord>> {
    proptest::collection::vec((0usize..Genre::ALL.len(), 0u8..=5, any::<bool>()), 0..=max_len)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (genre, rating, tbr))| BookRecord {
                    id: BookId(i as u32 + 1),
                    title: format!("Book {}", i + 1),
                    author: "Anon".into(),
                    genre: Genre::ALL[genre],
                    rating,
                    status: if tbr { ReadingStatus::ToBeRead } else { ReadingStatus::Read },
                    notes: String::new(),
                    shelf_assignment: None,
                })
                .collect()
        })
}

fn shelf() -> impl Strategy<Value = ShelfView> {
    (0usize..ShelfView::ALL.len()).prop_map(|i| ShelfView::ALL[i])
}

fn filters() -> impl Strategy<Value = FilterContext> {
    (0usize..Genre::ALL.len(), 1u8..=5).prop_map(|(genre, minimum)| FilterContext {
        active_genre: Genre::ALL[genre],
        minimum_rating: MinimumRating::new(minimum).unwrap_or_default(),
    })
}

fn floor_distance(point: Vec3, shelf: ShelfView) -> f32 {
    let anchor = shelf.anchor();
    ((point.x - anchor.x).powi(2) + (point.z - anchor.z).powi(2)).sqrt()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Partition and matching
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_book_is_assigned_once(books in books(40), shelf in shelf(), filters in filters()) {
        let layout = compute_layout(&books, shelf, &filters);

        prop_assert_eq!(layout.len(), books.len());
        prop_assert_eq!(layout.placed_count() + layout.hidden_count(), books.len());
        for book in &books {
            let assignment = layout.get(book.id);
            prop_assert!(assignment.is_some(), "book {} missing from layout", book.id);
            prop_assert_eq!(
                assignment.map(|a| a.is_placed()),
                Some(matches_shelf(book, shelf, &filters)),
                "book {} placement disagrees with its filter", book.id
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Capacity, contiguity and order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn levels_fill_contiguously_in_library_order(
        books in books(40),
        shelf in shelf(),
        filters in filters(),
    ) {
        let layout = compute_layout(&books, shelf, &filters);
        let counts = layout.level_counts();

        for (level, &count) in counts.iter().enumerate() {
            prop_assert!(count <= BOOKS_PER_LEVEL);
            if level + 1 < counts.len() {
                prop_assert_eq!(count, BOOKS_PER_LEVEL, "level {} not full before the next", level);
            }
        }

        let expected: Vec<BookId> = books
            .iter()
            .filter(|b| matches_shelf(b, shelf, &filters))
            .map(|b| b.id)
            .collect();
        let placed: Vec<BookId> = layout.slots().iter().map(|s| s.book_id).collect();
        prop_assert_eq!(&placed, &expected);

        let orders: Vec<usize> = layout.slots().iter().map(|s| s.order()).collect();
        let dense: Vec<usize> = (0..expected.len()).collect();
        prop_assert_eq!(orders, dense);

        let positions: HashSet<[u32; 3]> = layout
            .slots()
            .iter()
            .map(|s| s.position.to_array().map(f32::to_bits))
            .collect();
        prop_assert_eq!(positions.len(), expected.len(), "two books share a slot");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recomputing_is_idempotent(books in books(30), shelf in shelf(), filters in filters()) {
        let first = compute_layout(&books, shelf, &filters);
        let second = compute_layout(&books, shelf, &filters);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hidden_books_do_not_shift_placed_ones(
        books in books(30),
        filters in filters(),
        extra_genre in 0usize..Genre::ALL.len(),
    ) {
        // Appending a book never moves the books already on the shelf.
        let before = compute_layout(&books, ShelfView::Genre, &filters);
        let mut grown = books.clone();
        grown.push(BookRecord {
            id: BookId(1000),
            title: "Appended".into(),
            author: "Anon".into(),
            genre: Genre::ALL[extra_genre],
            rating: 3,
            status: ReadingStatus::Read,
            notes: String::new(),
            shelf_assignment: None,
        });
        let after = compute_layout(&grown, ShelfView::Genre, &filters);

        for book in &books {
            prop_assert_eq!(before.get(book.id), after.get(book.id));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Nearest shelf
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nearest_shelf_is_never_beaten(x in -20.0f32..20.0, y in -5.0f32..5.0, z in -10.0f32..10.0) {
        let point = Vec3::new(x, y, z);
        let nearest = find_nearest_shelf(point);
        let best = floor_distance(point, nearest);
        for shelf in ShelfView::ALL {
            prop_assert!(best <= floor_distance(point, shelf));
        }
    }

    #[test]
    fn nearest_shelf_ignores_height(x in -20.0f32..20.0, z in -10.0f32..10.0, y in -50.0f32..50.0) {
        prop_assert_eq!(
            find_nearest_shelf(Vec3::new(x, 0.0, z)),
            find_nearest_shelf(Vec3::new(x, y, z))
        );
    }
}

#[test]
fn midpoints_between_anchors_go_to_the_earlier_shelf() {
    assert_eq!(find_nearest_shelf(Vec3::new(-4.0, 0.0, 0.0)), ShelfView::ToBeRead);
    assert_eq!(find_nearest_shelf(Vec3::new(4.0, 0.0, 0.0)), ShelfView::Rated);
}

#[test]
fn drop_at_genre_anchor_resolves_to_genre() {
    assert_eq!(find_nearest_shelf(Vec3::new(8.0, 2.0, 0.0)), ShelfView::Genre);
}
