use bevy::prelude::*;
use constants::animation::{DRAG_LIFT_DURATION, HOVER_DURATION, OPEN_DURATION, OPEN_LIFT};
use constants::render_settings::{DRAG_LIFT, DRAG_SCALE, HOVER_NUDGE_Z, HOVER_SCALE};

use super::components::{Book, BookMotion, BookPresentation};
use crate::engine::animation::{Easing, Vec3Tween};
use crate::interaction::InteractionEffect;

/// Mirror interaction effects onto the affected book's flags and tweens.
pub fn apply_interaction_effects(
    mut effects: EventReader<InteractionEffect>,
    mut books: Query<(&Book, &mut BookMotion, &mut BookPresentation)>,
) {
    for effect in effects.read() {
        let target = effect.book();
        let Some((_, mut motion, mut presentation)) =
            books.iter_mut().find(|(book, ..)| book.id == target)
        else {
            warn!("Interaction effect for unknown book {}", target);
            continue;
        };
        apply_effect(effect, &mut motion, &mut presentation);
    }
}

pub(crate) fn apply_effect(
    effect: &InteractionEffect,
    motion: &mut BookMotion,
    presentation: &mut BookPresentation,
) {
    match *effect {
        InteractionEffect::HoverEnter { .. } => {
            presentation.hovered = true;
            set_offset(motion, Vec3::Z * HOVER_NUDGE_Z, HOVER_DURATION, Easing::EaseOut);
            set_scale(motion, HOVER_SCALE, HOVER_DURATION, Easing::EaseOutBack);
        }
        InteractionEffect::HoverExit { .. } => {
            presentation.hovered = false;
            presentation.opened = None;
            set_offset(motion, Vec3::ZERO, HOVER_DURATION, Easing::EaseOut);
            set_scale(motion, 1.0, HOVER_DURATION, Easing::EaseOut);
        }
        InteractionEffect::DragStart { position, .. } => {
            presentation.hovered = false;
            presentation.dragging = true;
            presentation.opened = None;
            let held = Vec3::from_array(position) - motion.offset.value();
            motion.base = Vec3Tween::settled(held);
            set_offset(motion, Vec3::Y * DRAG_LIFT, DRAG_LIFT_DURATION, Easing::EaseOut);
            set_scale(motion, DRAG_SCALE, DRAG_LIFT_DURATION, Easing::EaseOutBack);
        }
        InteractionEffect::DragUpdate { position, .. } => {
            motion.base = Vec3Tween::settled(Vec3::from_array(position));
        }
        InteractionEffect::Drop { .. } | InteractionEffect::DragCancel { .. } => {
            presentation.dragging = false;
            set_offset(motion, Vec3::ZERO, DRAG_LIFT_DURATION, Easing::EaseOut);
            set_scale(motion, 1.0, DRAG_LIFT_DURATION, Easing::EaseOut);
            if let Some(slot) = presentation.slot {
                let current = motion.base.value();
                motion.base = Vec3Tween::new(current, slot, OPEN_DURATION, Easing::EaseOutBack);
            }
        }
        InteractionEffect::Open { .. } => {
            presentation.opened = Some(0.0);
            set_offset(motion, Vec3::Y * OPEN_LIFT, OPEN_DURATION, Easing::EaseOutBack);
        }
    }
}

fn set_offset(motion: &mut BookMotion, to: Vec3, duration: f32, easing: Easing) {
    let current = motion.offset.value();
    motion.offset.retarget(current, to, duration, easing);
}

fn set_scale(motion: &mut BookMotion, factor: f32, duration: f32, easing: Easing) {
    let current = motion.scale.value();
    motion.scale.retarget(current, Vec3::splat(factor), duration, easing);
}
