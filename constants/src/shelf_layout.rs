/// Anchor of the to-be-read shelf (x, y, z).
pub const TO_BE_READ_ANCHOR: [f32; 3] = [-8.0, 0.0, 0.0];

/// Anchor of the rated shelf (x, y, z).
pub const RATED_ANCHOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Anchor of the genre shelf (x, y, z).
pub const GENRE_ANCHOR: [f32; 3] = [8.0, 0.0, 0.0];

/// Books that fit on a single shelf level before wrapping to the next one.
pub const BOOKS_PER_LEVEL: usize = 8;

/// Horizontal distance between neighbouring slots.
pub const SLOT_SPACING: f32 = 0.7;

/// Vertical distance between shelf levels.
pub const LEVEL_HEIGHT: f32 = 2.0;

/// Height of a book's centre above its shelf plank.
pub const BASE_OFFSET: f32 = 0.6;

/// Distance from the shelf anchor to the front row of slots.
pub const FRONT_OFFSET: f32 = 0.3;

/// Number of planks built per shelf unit.
pub const SHELF_LEVELS: usize = 4;

/// Plank dimensions (width, thickness, depth).
pub const PLANK_SIZE: [f32; 3] = [6.0, 0.2, 1.5];

/// Side support dimensions (width, height, depth) and their x offset from the anchor.
pub const SUPPORT_SIZE: [f32; 3] = [0.2, 2.0, 1.5];
pub const SUPPORT_OFFSET_X: f32 = 2.9;

/// Camera height and distance used for every shelf pose.
pub const CAMERA_HEIGHT: f32 = 3.0;
pub const CAMERA_DISTANCE: f32 = 8.0;

/// Dragged books slide along the plane z = DRAG_PLANE_Z (normal +Z).
pub const DRAG_PLANE_Z: f32 = FRONT_OFFSET;

/// Drags that never move further than this are treated as a press.
pub const CLICK_DRAG_TOLERANCE: f32 = 0.05;

/// Minimum rating filter range (inclusive).
pub const MIN_RATING_FILTER: u8 = 1;
pub const MAX_RATING_FILTER: u8 = 5;

/// Highest rating a book can carry, 0 meaning unrated.
pub const MAX_BOOK_RATING: u8 = 5;
