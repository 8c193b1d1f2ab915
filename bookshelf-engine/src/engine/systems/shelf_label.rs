use bevy::prelude::*;

use crate::session::{ShelfChanged, ShelfSession};

/// Heading naming the active shelf (native builds).
#[derive(Component)]
pub struct ShelfLabel;

pub fn spawn_shelf_label(mut commands: Commands, session: Res<ShelfSession>) {
    commands.spawn((
        Text::new(session.shelf_title()),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(0.3, 0.2, 0.2)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
        ShelfLabel,
    ));
}

pub fn update_shelf_label(
    mut changes: EventReader<ShelfChanged>,
    mut labels: Query<&mut Text, With<ShelfLabel>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    for mut text in &mut labels {
        text.0 = change.title.clone();
    }
}
