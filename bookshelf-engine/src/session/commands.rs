use bevy::prelude::*;

use super::shelf_session::{LayoutChange, ShelfSession};
use crate::error::BookshelfError;
use crate::layout::{CameraPose, FilterContext, ShelfLayout, ShelfView};
use crate::library::{BookEdit, BookId, BookRecord, Genre};

/// UI-level operations on the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfAction {
    SetShelfView(ShelfView),
    SetGenreFilter(Genre),
    SetRatingFilter(u8),
    StepRatingFilter(i32),
    CycleGenre(i32),
    CommitBookEdit { book: BookId, edit: BookEdit },
    CommitDrop { book: BookId, shelf: ShelfView },
    AddBook(BookRecord),
}

/// Where a command came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    Rpc,
    Keyboard,
    Pointer,
}

/// Event requesting a session change.
#[derive(Event, Debug, Clone)]
pub struct ShelfCommand {
    pub action: ShelfAction,
    pub source: CommandSource,
    /// Request id to answer once the command has been applied.
    pub reply_to: Option<serde_json::Value>,
}

impl ShelfCommand {
    pub fn new(action: ShelfAction, source: CommandSource) -> Self {
        Self {
            action,
            source,
            reply_to: None,
        }
    }

    pub fn with_reply(mut self, reply_to: serde_json::Value) -> Self {
        self.reply_to = Some(reply_to);
        self
    }
}

/// Session state right after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandReport {
    pub shelf: ShelfView,
    pub filters: FilterContext,
    pub generation: u64,
}

impl CommandReport {
    fn from_session(session: &ShelfSession) -> Self {
        Self {
            shelf: session.active_shelf(),
            filters: *session.filters(),
            generation: session.generation(),
        }
    }
}

/// Outcome of a command that carried a `reply_to`.
#[derive(Event, Debug)]
pub struct CommandApplied {
    pub reply_to: serde_json::Value,
    pub action: ShelfAction,
    pub outcome: Result<CommandReport, BookshelfError>,
}

/// A full replacement layout, fired once per recomputation.
#[derive(Event, Debug, Clone)]
pub struct LayoutCommitted {
    pub layout: ShelfLayout,
    pub generation: u64,
}

/// The camera should move to `pose`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraPoseRequest {
    pub shelf: ShelfView,
    pub pose: CameraPose,
}

/// Active shelf or its heading changed.
#[derive(Event, Debug, Clone)]
pub struct ShelfChanged {
    pub shelf: ShelfView,
    pub title: String,
}

#[derive(Event, Debug, Clone)]
pub struct BookEditCommitted {
    pub book: BookRecord,
}

/// Apply queued commands to the session in arrival order.
pub fn apply_shelf_commands(
    mut commands: EventReader<ShelfCommand>,
    mut session: ResMut<ShelfSession>,
    mut layout_events: EventWriter<LayoutCommitted>,
    mut camera_events: EventWriter<CameraPoseRequest>,
    mut shelf_events: EventWriter<ShelfChanged>,
    mut edit_events: EventWriter<BookEditCommitted>,
    mut applied_events: EventWriter<CommandApplied>,
) {
    for command in commands.read() {
        let title_before = session.shelf_title();

        let change = match &command.action {
            ShelfAction::SetShelfView(shelf) => {
                let change = session.set_shelf_view(*shelf);
                camera_events.write(CameraPoseRequest {
                    shelf: *shelf,
                    pose: session.camera_pose(),
                });
                info!("Shelf view set to {} via {:?}", shelf, command.source);
                Ok(change)
            }
            ShelfAction::SetGenreFilter(genre) => Ok(session.set_genre_filter(*genre)),
            ShelfAction::CycleGenre(direction) => Ok(session.cycle_genre(*direction)),
            ShelfAction::SetRatingFilter(minimum) => session.set_rating_filter(*minimum),
            ShelfAction::StepRatingFilter(delta) => Ok(session.step_rating_filter(*delta)),
            ShelfAction::CommitBookEdit { book, edit } => session
                .commit_book_edit(*book, edit)
                .map(|record| {
                    edit_events.write(BookEditCommitted {
                        book: record.clone(),
                    });
                    LayoutChange::Unchanged
                }),
            ShelfAction::CommitDrop { book, shelf } => {
                let result = session.commit_drop(*book, *shelf);
                if result.is_ok() {
                    info!("Book {} dropped on {}", book, shelf);
                }
                result
            }
            ShelfAction::AddBook(record) => session.add_book(record.clone()),
        };

        let outcome = match change {
            Ok(change) => {
                if change.is_recomputed() {
                    layout_events.write(LayoutCommitted {
                        layout: session.layout().clone(),
                        generation: session.generation(),
                    });
                }
                Ok(CommandReport::from_session(&session))
            }
            Err(err) => {
                warn!("Ignoring {:?} from {:?}: {}", command.action, command.source, err);
                Err(err)
            }
        };

        let applied = outcome.is_ok();
        if let Some(reply_to) = &command.reply_to {
            applied_events.write(CommandApplied {
                reply_to: reply_to.clone(),
                action: command.action.clone(),
                outcome,
            });
        }
        if !applied {
            continue;
        }

        let title = session.shelf_title();
        if title != title_before || matches!(command.action, ShelfAction::SetShelfView(_)) {
            shelf_events.write(ShelfChanged {
                shelf: session.active_shelf(),
                title,
            });
        }
    }
}

/// Keyboard shortcuts for shelves and filters (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_shelf_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<ShelfCommand>,
) {
    let mut send = |action| {
        commands.write(ShelfCommand::new(action, CommandSource::Keyboard));
    };

    if keyboard.just_pressed(KeyCode::Digit1) {
        send(ShelfAction::SetShelfView(ShelfView::ToBeRead));
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        send(ShelfAction::SetShelfView(ShelfView::Rated));
    }
    if keyboard.just_pressed(KeyCode::Digit3) {
        send(ShelfAction::SetShelfView(ShelfView::Genre));
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        send(ShelfAction::CycleGenre(-1));
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        send(ShelfAction::CycleGenre(1));
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        send(ShelfAction::StepRatingFilter(1));
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        send(ShelfAction::StepRatingFilter(-1));
    }
}

/// Placeholder for WASM builds, where the page drives shelves over RPC.
#[cfg(target_arch = "wasm32")]
pub fn handle_shelf_keyboard_shortcuts() {}
