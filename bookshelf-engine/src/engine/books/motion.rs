use bevy::prelude::*;
use constants::animation::{
    DRAG_WOBBLE_AMPLITUDE, DRAG_WOBBLE_SPEED, IDLE_BOB_AMPLITUDE, IDLE_BOB_SPEED, OPEN_DURATION,
    OPEN_TILT,
};

use super::components::{BookMotion, BookPresentation};
use crate::engine::animation::easing::ease_out;

/// Advance book tweens and write the resulting transforms.
pub fn animate_books(
    time: Res<Time>,
    mut books: Query<(&mut Transform, &mut BookMotion, &mut BookPresentation)>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for (mut transform, mut motion, mut presentation) in &mut books {
        motion.base.advance(dt);
        motion.offset.advance(dt);
        motion.scale.advance(dt);
        if let Some(opened) = presentation.opened.as_mut() {
            *opened += dt;
        }

        let base = motion.base.value();
        transform.translation = base + motion.offset.value() + Vec3::Y * idle_bob(&presentation, base, now);
        transform.scale = motion.scale.value();
        transform.rotation = Quat::from_rotation_y(book_yaw(&presentation, now));
    }
}

/// Gentle float for books resting on the shelf.
fn idle_bob(presentation: &BookPresentation, base: Vec3, now: f32) -> f32 {
    if !presentation.on_shelf || presentation.hovered || presentation.dragging {
        return 0.0;
    }
    (now * IDLE_BOB_SPEED + base.x * 0.1).sin() * IDLE_BOB_AMPLITUDE
}

fn book_yaw(presentation: &BookPresentation, now: f32) -> f32 {
    if presentation.dragging {
        return (now * DRAG_WOBBLE_SPEED).sin() * DRAG_WOBBLE_AMPLITUDE;
    }
    match presentation.opened {
        Some(elapsed) => OPEN_TILT * ease_out((elapsed / OPEN_DURATION).min(1.0)),
        None => 0.0,
    }
}
