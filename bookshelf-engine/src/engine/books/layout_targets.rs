use bevy::prelude::*;
use constants::animation::{ARRANGE_DURATION, ARRANGE_STAGGER, HIDE_DURATION};
use constants::render_settings::HIDDEN_Y;

use super::components::{Book, BookMotion, BookPresentation, arrival_jitter};
use crate::engine::animation::{Easing, Vec3Tween};
use crate::layout::{ShelfLayout, SlotAssignment};
use crate::session::LayoutCommitted;

/// Retarget every book at the newest committed layout.
///
/// Only the last layout of the frame is applied; earlier ones are superseded.
pub fn apply_layout_targets(
    mut layout_events: EventReader<LayoutCommitted>,
    mut books: Query<(&Book, &mut BookMotion, &mut BookPresentation)>,
) {
    let Some(latest) = layout_events.read().last() else {
        return;
    };

    for (book, mut motion, mut presentation) in &mut books {
        let current = motion.base.value();
        retarget_book(&latest.layout, book, current, &mut motion, &mut presentation);
    }
}

pub(crate) fn retarget_book(
    layout: &ShelfLayout,
    book: &Book,
    current: Vec3,
    motion: &mut BookMotion,
    presentation: &mut BookPresentation,
) {
    match layout.get(book.id) {
        Some(SlotAssignment::Placed(slot)) => {
            presentation.on_shelf = true;
            presentation.slot = Some(slot.position);
            if presentation.dragging || motion.base.to == slot.position {
                return;
            }
            let duration = ARRANGE_DURATION + arrival_jitter(book.id);
            motion.base = Vec3Tween::new(current, slot.position, duration, Easing::EaseOutBack)
                .with_delay(slot.order() as f32 * ARRANGE_STAGGER);
        }
        Some(SlotAssignment::Hidden) | None => {
            presentation.on_shelf = false;
            presentation.slot = None;
            let hidden = Vec3::new(current.x, HIDDEN_Y, current.z);
            if presentation.dragging || motion.base.to.y == HIDDEN_Y {
                return;
            }
            motion.base = Vec3Tween::new(current, hidden, HIDE_DURATION, Easing::EaseIn);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FilterContext, ShelfView, compute_layout};
    use crate::library::dataset::load_default_library;
    use crate::library::BookId;

    #[test]
    fn placed_books_head_for_their_slot_with_stagger() {
        let library = load_default_library().unwrap();
        let layout = compute_layout(library.as_slice(), ShelfView::Rated, &FilterContext::default());
        let book = Book { id: BookId(2) };
        let mut motion = BookMotion::resting_at(Vec3::new(0.0, HIDDEN_Y, 0.0));
        let mut presentation = BookPresentation::default();

        retarget_book(&layout, &book, motion.base.value(), &mut motion, &mut presentation);

        let slot = layout.get(BookId(2)).unwrap().slot().unwrap();
        assert!(presentation.on_shelf);
        assert_eq!(motion.base.to, slot.position);
        assert!((motion.base.delay - ARRANGE_STAGGER).abs() < 1e-6);
        assert_eq!(motion.base.easing, Easing::EaseOutBack);
    }

    #[test]
    fn filtered_books_sink_in_place() {
        let library = load_default_library().unwrap();
        let layout = compute_layout(library.as_slice(), ShelfView::ToBeRead, &FilterContext::default());
        let book = Book { id: BookId(1) };
        let start = Vec3::new(-2.8, 0.6, 0.3);
        let mut motion = BookMotion::resting_at(start);
        let mut presentation = BookPresentation {
            on_shelf: true,
            slot: Some(start),
            ..default()
        };

        retarget_book(&layout, &book, start, &mut motion, &mut presentation);

        assert!(!presentation.on_shelf);
        assert_eq!(motion.base.to, Vec3::new(-2.8, HIDDEN_Y, 0.3));
        assert_eq!(motion.base.easing, Easing::EaseIn);
    }

    #[test]
    fn dragged_book_keeps_following_the_pointer() {
        let library = load_default_library().unwrap();
        let layout = compute_layout(library.as_slice(), ShelfView::Rated, &FilterContext::default());
        let book = Book { id: BookId(1) };
        let held = Vec3::new(3.0, 2.0, 0.3);
        let mut motion = BookMotion::resting_at(held);
        let mut presentation = BookPresentation {
            dragging: true,
            ..default()
        };

        retarget_book(&layout, &book, held, &mut motion, &mut presentation);

        assert_eq!(motion.base.to, held);
        assert!(presentation.slot.is_some());
    }
}
