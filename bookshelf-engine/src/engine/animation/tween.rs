use bevy::prelude::*;

use super::easing::{Easing, apply_easing};

/// Time-based interpolation between two points, with an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3Tween {
    pub from: Vec3,
    pub to: Vec3,
    pub delay: f32,
    pub duration: f32,
    pub easing: Easing,
    elapsed: f32,
}

impl Vec3Tween {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration,
            easing,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// A tween that is already at rest on `value`.
    pub fn settled(value: Vec3) -> Self {
        Self::new(value, value, 0.0, Easing::Linear)
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn progress(&self) -> f32 {
        let active = self.elapsed - self.delay;
        if active < 0.0 {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            (active / self.duration).min(1.0)
        }
    }

    pub fn value(&self) -> Vec3 {
        let t = apply_easing(self.progress(), self.easing);
        self.from.lerp(self.to, t)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Restart towards a new target from `current`, unless already heading there.
    pub fn retarget(&mut self, current: Vec3, to: Vec3, duration: f32, easing: Easing) {
        if self.to == to {
            return;
        }
        *self = Self::new(current, to, duration, easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_holds_the_start_value() {
        let mut tween = Vec3Tween::new(Vec3::ZERO, Vec3::X, 1.0, Easing::Linear).with_delay(0.5);
        tween.advance(0.4);
        assert_eq!(tween.value(), Vec3::ZERO);
        tween.advance(0.6);
        assert!((tween.value().x - 0.5).abs() < 1e-5);
        tween.advance(1.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec3::X);
    }

    #[test]
    fn settled_tween_is_finished() {
        let tween = Vec3Tween::settled(Vec3::ONE);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec3::ONE);
    }

    #[test]
    fn retarget_to_same_point_keeps_progress() {
        let mut tween = Vec3Tween::new(Vec3::ZERO, Vec3::X, 1.0, Easing::Linear);
        tween.advance(0.5);
        tween.retarget(Vec3::splat(9.0), Vec3::X, 1.0, Easing::Linear);
        assert!((tween.progress() - 0.5).abs() < 1e-6);

        tween.retarget(tween.value(), Vec3::Y, 2.0, Easing::EaseOut);
        assert_eq!(tween.progress(), 0.0);
        assert_eq!(tween.to, Vec3::Y);
    }
}
