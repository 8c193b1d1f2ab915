use bevy::prelude::*;
use constants::render_settings::{
    BACK_WALL_CENTRE, BACK_WALL_SIZE, BACKGROUND_COLOUR, FLOOR_SIZE, FLOOR_Y, SHELF_COLOUR,
};
use constants::shelf_layout::{LEVEL_HEIGHT, PLANK_SIZE, SHELF_LEVELS, SUPPORT_OFFSET_X, SUPPORT_SIZE};

use crate::layout::ShelfView;

/// Static shelf unit geometry, tagged with the view it belongs to.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShelfUnit {
    pub shelf: ShelfView,
}

/// Local offsets of every plank and support in one shelf unit.
pub fn shelf_part_offsets() -> (Vec<Vec3>, Vec<Vec3>) {
    let mut planks = Vec::with_capacity(SHELF_LEVELS);
    let mut supports = Vec::with_capacity((SHELF_LEVELS - 1) * 2);
    for level in 0..SHELF_LEVELS {
        let y = level as f32 * LEVEL_HEIGHT;
        planks.push(Vec3::new(0.0, y, 0.0));
        // Supports only between planks.
        if level + 1 < SHELF_LEVELS {
            let mid = y + LEVEL_HEIGHT / 2.0;
            supports.push(Vec3::new(-SUPPORT_OFFSET_X, mid, 0.0));
            supports.push(Vec3::new(SUPPORT_OFFSET_X, mid, 0.0));
        }
    }
    (planks, supports)
}

pub fn spawn_shelves(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let [r, g, b] = SHELF_COLOUR;
    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb(r, g, b),
        perceptual_roughness: 0.9,
        ..default()
    });
    let plank = meshes.add(Cuboid::from_size(Vec3::from_array(PLANK_SIZE)));
    let support = meshes.add(Cuboid::from_size(Vec3::from_array(SUPPORT_SIZE)));
    let (plank_offsets, support_offsets) = shelf_part_offsets();

    for shelf in ShelfView::ALL {
        commands
            .spawn((
                Transform::from_translation(shelf.anchor()),
                Visibility::default(),
                ShelfUnit { shelf },
                Name::new(format!("{shelf} shelf")),
            ))
            .with_children(|parent| {
                for offset in &plank_offsets {
                    parent.spawn((
                        Mesh3d(plank.clone()),
                        MeshMaterial3d(wood.clone()),
                        Transform::from_translation(*offset),
                    ));
                }
                for offset in &support_offsets {
                    parent.spawn((
                        Mesh3d(support.clone()),
                        MeshMaterial3d(wood.clone()),
                        Transform::from_translation(*offset),
                    ));
                }
            });
    }
}

pub fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let [r, g, b] = BACKGROUND_COLOUR;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));

    let [fw, fd] = FLOOR_SIZE;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(fw, fd))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, 0.6),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        Name::new("Floor"),
    ));

    let [sr, sg, sb] = SHELF_COLOUR;
    let [ww, wh] = BACK_WALL_SIZE;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Z, Vec2::new(ww / 2.0, wh / 2.0)).mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(sr, sg, sb, 0.4),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_translation(Vec3::from_array(BACK_WALL_CENTRE)),
        Name::new("Back wall"),
    ));
}

pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0xFF, 0xC2, 0xE8),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for (colour, position, range) in [
        (Color::srgb_u8(0xBD, 0xE0, 0xFE), Vec3::new(-5.0, 8.0, 3.0), 20.0),
        (Color::srgb_u8(0xFF, 0xF6, 0xA3), Vec3::new(5.0, 6.0, -2.0), 15.0),
    ] {
        commands.spawn((
            PointLight {
                color: colour,
                range,
                intensity: 200_000.0,
                ..default()
            },
            Transform::from_translation(position),
        ));
    }
}
