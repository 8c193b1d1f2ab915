//! JSON-RPC 2.0 layer between the bookshelf engine and the hosting page.
//!
//! The engine runs in an iframe and talks to its parent over `postMessage`.
//! Requests drive the shelf session, notifications report what the reader is
//! doing with the books.
//!
//! ## Message Flow
//!
//! ```text
//! Page (parent window)   <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Validate, queue ShelfCommand
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        ├─ Session applies command
//!        │ <────────── Notification (no ID) ─────┤  (layout_committed, ...)
//! ```
//!
//! Mutating methods answer as soon as their parameters validate. The resulting
//! layout arrives afterwards as a `layout_committed` notification.
//!
//! ## Calling From the Page
//!
//! ```typescript
//! frame.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "set_shelf_view",
//!   params: { shelf: "genre" },
//!   id: 1
//! }), "*");
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request (malformed JSON or wrong `jsonrpc` version)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params (unknown shelf or genre, rating out of range, unknown book)
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Shelf Control
//! - `set_shelf_view`: Switch to `to-be-read`, `rated` or `genre`
//! - `set_genre_filter`: Choose the genre shown on the genre shelf
//! - `set_rating_filter`: Minimum rating (1-5) for the rated shelf
//! - `cycle_genre`: Step the genre spinner by `direction`
//!
//! ### Books
//! - `get_books`: Full library in shelf order
//! - `get_book`: One record by `id`
//! - `commit_book_edit`: Store `rating` and `notes` for a book
//! - `add_book`: Append a new record and reshelve
//!
//! ### Layout and Camera
//! - `get_layout`: Committed layout with its generation
//! - `get_camera_pose`: Pose for the active shelf
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! `hover_enter`, `hover_exit`, `drag_start`, `drag_update`, `drag_end`,
//! `drag_cancel`, `book_opened`, `layout_committed`, `camera_pose_request`,
//! `shelf_changed`, `book_edit_committed` and `fps_update`.

/// Request handlers for every RPC method.
pub mod methods;

/// Engine events forwarded to the frontend as notifications.
pub mod notifications;

/// JSON-RPC 2.0 bidirectional communication system for frontend integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
