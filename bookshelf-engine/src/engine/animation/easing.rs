//! Easing curves for the book and camera tweens.

use constants::animation::BACK_OVERSHOOT;

/// Easing curve applied to a tween's normalised time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    EaseOutBack,
}

#[inline]
pub const fn ease_linear(t: f32) -> f32 {
    t
}

/// Slow start, accelerates.
#[inline]
pub fn ease_in(t: f32) -> f32 {
    t * t * t
}

/// Fast start, decelerates.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t1 = t - 1.0;
    (t1 * t1).mul_add(t1, 1.0)
}

/// Slow start and end.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = 2.0f32.mul_add(t, -2.0);
        (0.5 * t1 * t1).mul_add(t1, 1.0)
    }
}

/// Decelerates past the target and settles back onto it.
#[inline]
pub fn ease_out_back(t: f32) -> f32 {
    let c1 = BACK_OVERSHOOT;
    let c3 = c1 + 1.0;
    let t1 = t - 1.0;
    1.0 + c3 * t1 * t1 * t1 + c1 * t1 * t1
}

/// Apply `easing` to `t`, clamped to 0..=1.
#[inline]
pub fn apply_easing(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => ease_linear(t),
        Easing::EaseIn => ease_in(t),
        Easing::EaseOut => ease_out(t),
        Easing::EaseInOut => ease_in_out(t),
        Easing::EaseOutBack => ease_out_back(t),
    }
}
