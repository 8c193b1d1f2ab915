use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::ShelfCameraRig;
use crate::interaction::{PointerInput, PointerKind, PointerRay};

/// Which touch, if any, is acting as the pointer, and where the pointers
/// were last seen.
#[derive(Resource, Debug, Default)]
pub struct PointerTracker {
    primary_touch: Option<u64>,
    last_touch: Vec2,
    last_cursor: Option<Vec2>,
}

impl PointerTracker {
    /// Current cursor position, or the last one seen while the cursor is
    /// outside the window.
    fn cursor_or_last(&mut self, current: Option<Vec2>) -> Option<Vec2> {
        if current.is_some() {
            self.last_cursor = current;
        }
        self.last_cursor
    }
}

/// How the primary touch finished this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEnd {
    Released,
    /// Cancelled by the platform, or gone without a release.
    Canceled,
}

/// Pointer kinds for one frame of mouse input, in the order they are fed to
/// the state machine. A release is always followed by its click.
pub fn mouse_sequence(moved: bool, pressed: bool, released: bool) -> Vec<PointerKind> {
    let mut kinds = Vec::with_capacity(4);
    if moved {
        kinds.push(PointerKind::Move);
    }
    if pressed {
        kinds.push(PointerKind::Down);
    }
    if released {
        kinds.push(PointerKind::Up);
        kinds.push(PointerKind::Click);
    }
    kinds
}

/// Pointer kinds for one frame of the primary touch. A touch that starts and
/// ends in the same frame still gets its press before the release; a
/// cancelled touch releases without a click.
pub fn touch_sequence(started: bool, moved: bool, ended: Option<TouchEnd>) -> Vec<PointerKind> {
    let mut kinds = Vec::with_capacity(4);
    if started {
        kinds.push(PointerKind::Move);
        kinds.push(PointerKind::Down);
    } else if moved {
        kinds.push(PointerKind::Move);
    }
    match ended {
        Some(TouchEnd::Released) => {
            kinds.push(PointerKind::Up);
            kinds.push(PointerKind::Click);
        }
        Some(TouchEnd::Canceled) => kinds.push(PointerKind::Up),
        None => {}
    }
    kinds
}

/// Turn mouse and primary-touch input into world-space `PointerInput` events.
pub fn capture_pointer_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ShelfCameraRig>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut tracker: ResMut<PointerTracker>,
    mut pointer_events: EventWriter<PointerInput>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let to_ray = |screen: Vec2| {
        camera
            .viewport_to_world(camera_transform, screen)
            .ok()
            .map(PointerRay::from)
    };
    let mut emit = |kind: PointerKind, screen: Vec2| {
        if let Some(ray) = to_ray(screen) {
            pointer_events.write(PointerInput::new(kind, ray));
        }
    };

    // Mouse
    let moved = cursor_moved.read().count() > 0;
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());
    let released = mouse_button.just_released(MouseButton::Left);
    match (cursor, tracker.cursor_or_last(cursor)) {
        (Some(position), _) => {
            let kinds = mouse_sequence(moved, mouse_button.just_pressed(MouseButton::Left), released);
            for kind in kinds {
                emit(kind, position);
            }
        }
        // Released outside the window: end any press or drag, but no click.
        (None, Some(last)) if released => emit(PointerKind::Up, last),
        _ => {}
    }

    // Primary touch
    let (id, started, start_position) = match tracker.primary_touch {
        Some(id) => (id, false, tracker.last_touch),
        None => match touches.iter_just_pressed().next() {
            Some(touch) => (touch.id(), true, touch.position()),
            None => return,
        },
    };

    let (position, moved, ended) = if let Some(touch) = touches.get_pressed(id) {
        (touch.position(), touch.delta() != Vec2::ZERO, None)
    } else if let Some(touch) = touches.get_released(id) {
        (touch.position(), touch.delta() != Vec2::ZERO, Some(TouchEnd::Released))
    } else if let Some(touch) = touches.iter_just_canceled().find(|t| t.id() == id) {
        (touch.position(), false, Some(TouchEnd::Canceled))
    } else {
        (start_position, false, Some(TouchEnd::Canceled))
    };

    for kind in touch_sequence(started, moved, ended) {
        emit(kind, position);
    }

    tracker.last_touch = position;
    tracker.primary_touch = if ended.is_some() { None } else { Some(id) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_in_one_frame_keep_order() {
        assert_eq!(
            mouse_sequence(true, true, true),
            vec![
                PointerKind::Move,
                PointerKind::Down,
                PointerKind::Up,
                PointerKind::Click
            ]
        );
    }

    #[test]
    fn idle_mouse_emits_nothing() {
        assert!(mouse_sequence(false, false, false).is_empty());
        assert_eq!(mouse_sequence(false, false, true).len(), 2);
    }

    #[test]
    fn tap_within_one_frame_presses_before_releasing() {
        assert_eq!(
            touch_sequence(true, false, Some(TouchEnd::Released)),
            vec![
                PointerKind::Move,
                PointerKind::Down,
                PointerKind::Up,
                PointerKind::Click
            ]
        );
    }

    #[test]
    fn held_touch_only_reports_movement() {
        assert_eq!(touch_sequence(false, true, None), vec![PointerKind::Move]);
        assert!(touch_sequence(false, false, None).is_empty());
        assert_eq!(
            touch_sequence(true, true, None),
            vec![PointerKind::Move, PointerKind::Down]
        );
    }

    #[test]
    fn cancelled_or_lost_touch_releases_without_click() {
        assert_eq!(
            touch_sequence(false, false, Some(TouchEnd::Canceled)),
            vec![PointerKind::Up]
        );
        assert_eq!(
            touch_sequence(true, false, Some(TouchEnd::Canceled)),
            vec![PointerKind::Move, PointerKind::Down, PointerKind::Up]
        );
    }

    #[test]
    fn cursor_outside_the_window_falls_back_to_last_position() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.cursor_or_last(None), None);
        assert_eq!(
            tracker.cursor_or_last(Some(Vec2::new(40.0, 12.0))),
            Some(Vec2::new(40.0, 12.0))
        );
        assert_eq!(tracker.cursor_or_last(None), Some(Vec2::new(40.0, 12.0)));
    }
}
