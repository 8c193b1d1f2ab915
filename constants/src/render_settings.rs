/// Y coordinate hidden books sink to.
pub const HIDDEN_Y: f32 = -5.0;

/// Scale applied to a hovered book.
pub const HOVER_SCALE: f32 = 1.1;

/// Forward nudge of a hovered book towards the camera.
pub const HOVER_NUDGE_Z: f32 = 0.2;

/// Scale applied to a dragged book.
pub const DRAG_SCALE: f32 = 1.2;

/// Height a book is lifted by when a drag starts.
pub const DRAG_LIFT: f32 = 1.0;

/// Base book dimensions and the deterministic per-book variation added on top.
pub const BOOK_BASE_SIZE: [f32; 3] = [0.3, 1.2, 0.15];
pub const BOOK_SIZE_VARIATION: [f32; 3] = [0.1, 0.3, 0.05];

/// Drop ring inner and outer radii.
pub const DROP_RING_RADII: [f32; 2] = [0.5, 0.7];

/// Scene backdrop colour (sRGB).
pub const BACKGROUND_COLOUR: [f32; 3] = [1.0, 0.918, 0.655];

/// Shelf wood tint (sRGB).
pub const SHELF_COLOUR: [f32; 3] = [0.98, 0.694, 0.627];

/// Floor plane size and height.
pub const FLOOR_SIZE: [f32; 2] = [30.0, 20.0];
pub const FLOOR_Y: f32 = -1.0;

/// Back wall size and centre.
pub const BACK_WALL_SIZE: [f32; 2] = [30.0, 12.0];
pub const BACK_WALL_CENTRE: [f32; 3] = [0.0, 5.0, -3.0];
