use bevy::prelude::*;
use constants::animation::CAMERA_TRANSITION_DURATION;

use crate::engine::animation::{Easing, Vec3Tween};
use crate::layout::CameraPose;
use crate::session::{CameraPoseRequest, ShelfSession};

/// Marks the camera that frames the active shelf.
#[derive(Component)]
pub struct ShelfCameraRig;

/// Camera move in progress between two shelf poses.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ShelfCamera {
    pub position: Vec3Tween,
    pub look_at: Vec3Tween,
}

impl ShelfCamera {
    pub fn at(pose: CameraPose) -> Self {
        Self {
            position: Vec3Tween::settled(pose.position),
            look_at: Vec3Tween::settled(pose.look_at),
        }
    }

    /// Head for `pose`, starting from wherever the camera is now.
    pub fn move_to(&mut self, pose: CameraPose) {
        let (position, look_at) = (self.position.value(), self.look_at.value());
        self.position.retarget(position, pose.position, CAMERA_TRANSITION_DURATION, Easing::EaseInOut);
        self.look_at.retarget(look_at, pose.look_at, CAMERA_TRANSITION_DURATION, Easing::EaseInOut);
    }

    pub fn advance(&mut self, dt: f32) {
        self.position.advance(dt);
        self.look_at.advance(dt);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position.value()).looking_at(self.look_at.value(), Vec3::Y)
    }
}

pub fn spawn_shelf_camera(mut commands: Commands, session: Res<ShelfSession>) {
    let rig = ShelfCamera::at(session.camera_pose());
    commands.spawn((Camera3d::default(), rig.transform(), ShelfCameraRig));
    commands.insert_resource(rig);
}

pub fn handle_camera_pose_requests(
    mut requests: EventReader<CameraPoseRequest>,
    mut rig: ResMut<ShelfCamera>,
) {
    if let Some(request) = requests.read().last() {
        debug!("Camera moving to {} shelf", request.shelf);
        rig.move_to(request.pose);
    }
}

pub fn animate_shelf_camera(
    time: Res<Time>,
    mut rig: ResMut<ShelfCamera>,
    mut camera_query: Query<&mut Transform, With<ShelfCameraRig>>,
) {
    rig.advance(time.delta_secs());
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ShelfView, camera_pose};

    #[test]
    fn camera_arrives_after_the_transition() {
        let mut rig = ShelfCamera::at(camera_pose(ShelfView::Rated));
        rig.move_to(camera_pose(ShelfView::Genre));

        rig.advance(CAMERA_TRANSITION_DURATION / 2.0);
        let halfway = rig.position.value();
        assert!((halfway.x - 4.0).abs() < 1e-4);

        rig.advance(CAMERA_TRANSITION_DURATION);
        assert_eq!(rig.position.value(), Vec3::new(8.0, 3.0, 8.0));
        assert_eq!(rig.look_at.value(), Vec3::new(8.0, 3.0, 0.3));
    }
}
