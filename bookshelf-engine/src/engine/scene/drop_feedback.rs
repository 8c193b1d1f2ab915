use bevy::prelude::*;
use constants::animation::DROP_FEEDBACK_DURATION;
use constants::render_settings::DROP_RING_RADII;

use crate::engine::animation::easing::ease_out;
use crate::interaction::InteractionEffect;

const RING_OPACITY: f32 = 0.7;

/// Expanding ring shown where a book was dropped.
#[derive(Component, Debug, Default)]
pub struct DropRing {
    pub elapsed: f32,
}

pub fn spawn_drop_rings(
    mut commands: Commands,
    mut effects: EventReader<InteractionEffect>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for effect in effects.read() {
        let InteractionEffect::Drop { position, .. } = *effect else {
            continue;
        };
        let [inner, outer] = DROP_RING_RADII;
        commands.spawn((
            Mesh3d(meshes.add(Annulus::new(inner, outer))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(0.0, 1.0, 0.0, RING_OPACITY),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_translation(Vec3::from_array(position) - Vec3::Y * 0.5)
                .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            DropRing::default(),
        ));
    }
}

/// Grow and fade rings, removing them once the effect has played.
pub fn animate_drop_rings(
    mut commands: Commands,
    time: Res<Time>,
    mut rings: Query<(Entity, &mut DropRing, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, mut ring, mut transform, material) in &mut rings {
        ring.elapsed += time.delta_secs();
        let t = (ring.elapsed / DROP_FEEDBACK_DURATION).min(1.0);
        if t >= 1.0 {
            commands.entity(entity).despawn();
            materials.remove(&material.0);
            continue;
        }
        let eased = ease_out(t);
        transform.scale = Vec3::splat(1.0 + eased);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(RING_OPACITY * (1.0 - eased));
        }
    }
}
