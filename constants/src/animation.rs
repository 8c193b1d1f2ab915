/// Base duration of a book sliding into its slot, in seconds.
pub const ARRANGE_DURATION: f32 = 1.0;

/// Extra duration spread across books so they do not land in lockstep.
pub const ARRANGE_DURATION_JITTER: f32 = 0.5;

/// Delay added per position in the arrangement order.
pub const ARRANGE_STAGGER: f32 = 0.05;

/// Time for a filtered-out book to sink out of view.
pub const HIDE_DURATION: f32 = 0.5;

/// Hover scale tween duration.
pub const HOVER_DURATION: f32 = 0.3;

/// Drag lift and scale tween duration.
pub const DRAG_LIFT_DURATION: f32 = 0.3;

/// Camera move between shelf poses.
pub const CAMERA_TRANSITION_DURATION: f32 = 1.5;

/// Drop ring expand and fade.
pub const DROP_FEEDBACK_DURATION: f32 = 0.5;

/// Overshoot of the ease-out-back curve.
pub const BACK_OVERSHOOT: f32 = 1.7;

/// Idle bob height around the slot and its time scale.
pub const IDLE_BOB_AMPLITUDE: f32 = 0.03;
pub const IDLE_BOB_SPEED: f32 = 1.0;

/// Drag wobble around Y while a book follows the pointer.
pub const DRAG_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const DRAG_WOBBLE_SPEED: f32 = 10.0;

/// Opening a book tilts it about Y and lifts it slightly.
pub const OPEN_DURATION: f32 = 0.8;
pub const OPEN_TILT: f32 = std::f32::consts::PI * 0.1;
pub const OPEN_LIFT: f32 = 0.5;
