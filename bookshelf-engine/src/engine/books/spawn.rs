use std::collections::HashSet;

use bevy::prelude::*;

use super::components::{Book, BookMotion, BookPresentation, BookSize, book_dimensions, genre_colour, scatter_position};
use crate::session::{LayoutCommitted, ShelfSession};

/// Publish the session's initial layout so the books fly in on the first frame.
pub fn announce_initial_layout(
    session: Res<ShelfSession>,
    mut layout_events: EventWriter<LayoutCommitted>,
) {
    info!(
        "Shelving {} books on {}",
        session.library().len(),
        session.active_shelf()
    );
    layout_events.write(LayoutCommitted {
        layout: session.layout().clone(),
        generation: session.generation(),
    });
}

/// Spawn an entity for every library book that does not have one yet.
pub fn spawn_missing_books(
    mut commands: Commands,
    session: Res<ShelfSession>,
    existing: Query<&Book>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !session.is_changed() {
        return;
    }

    let present: HashSet<_> = existing.iter().map(|book| book.id).collect();

    for record in session.library().iter().filter(|b| !present.contains(&b.id)) {
        let size = book_dimensions(record.id);
        let start = scatter_position(record.id);

        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: genre_colour(record.genre),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(start),
            Book { id: record.id },
            BookSize(size),
            BookPresentation::default(),
            BookMotion::resting_at(start),
            Name::new(record.title.clone()),
        ));
        debug!("Spawned book {} '{}'", record.id, record.title);
    }
}
