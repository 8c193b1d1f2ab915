use std::collections::HashMap;

use bevy::prelude::*;

use crate::engine::books::{Book, BookSize};
use crate::interaction::{BookVolume, InteractionEffect, InteractionMachine, PointerInput};
use crate::layout::SlotAssignment;
use crate::library::BookId;
use crate::session::{CommandSource, ShelfAction, ShelfCommand, ShelfSession};

/// Volumes of the books placed in the committed layout, in library order.
pub fn collect_book_volumes(
    session: &ShelfSession,
    bounds: &HashMap<BookId, (Vec3, Vec3)>,
) -> Vec<BookVolume> {
    session
        .library()
        .iter()
        .filter(|record| matches!(session.layout().get(record.id), Some(SlotAssignment::Placed(_))))
        .filter_map(|record| {
            bounds
                .get(&record.id)
                .map(|(center, size)| BookVolume::new(record.id, *center, *size))
        })
        .collect()
}

/// Feed pointer input through the state machine and publish its effects.
/// Drops become `CommitDrop` commands for the session.
pub fn drive_interaction(
    mut inputs: EventReader<PointerInput>,
    mut machine: ResMut<InteractionMachine>,
    session: Res<ShelfSession>,
    books: Query<(&Book, &Transform, &BookSize)>,
    mut effect_events: EventWriter<InteractionEffect>,
    mut shelf_commands: EventWriter<ShelfCommand>,
) {
    if inputs.is_empty() {
        return;
    }

    let bounds: HashMap<BookId, (Vec3, Vec3)> = books
        .iter()
        .map(|(book, transform, size)| (book.id, (transform.translation, size.0 * transform.scale)))
        .collect();
    let volumes = collect_book_volumes(&session, &bounds);

    for input in inputs.read() {
        for effect in machine.handle(input, &volumes) {
            debug!("Interaction effect {:?}", effect);
            if let InteractionEffect::Drop { book, shelf, .. } = effect {
                shelf_commands.write(ShelfCommand::new(
                    ShelfAction::CommitDrop { book, shelf },
                    CommandSource::Pointer,
                ));
            }
            effect_events.write(effect);
        }
    }
}
