pub mod animation;
pub mod books;
pub mod camera;
pub mod core;
pub mod input;
pub mod scene;
pub mod systems;
