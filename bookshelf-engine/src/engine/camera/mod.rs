//! Shelf camera: fixed per-shelf poses with eased transitions between them.

pub mod shelf_camera;

pub use shelf_camera::{
    ShelfCamera, ShelfCameraRig, animate_shelf_camera, handle_camera_pose_requests,
    spawn_shelf_camera,
};
