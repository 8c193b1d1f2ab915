use bevy::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};

use super::web_rpc::{RpcError, RpcRequest, RpcResponse, create_error_response};
use crate::layout::{CameraPose, MinimumRating, ShelfLayout, ShelfView, SlotAssignment};
use crate::library::{BookEdit, BookId, BookRecord, Genre};
use crate::library::book::validate_rating;
use crate::session::{CommandApplied, CommandSource, ShelfAction, ShelfCommand, ShelfSession};

/// What a method produced: an answer now, or a command whose answer comes
/// once the session has applied it.
enum Handled {
    Reply(Value),
    Deferred(ShelfAction),
}

/// Handle one request. Queries are answered from `session` straight away.
/// Mutating methods only have their parameters checked here; they are queued
/// as commands carrying the request id and answered by `applied_response`
/// after the session has run them, so requests in the same frame see each
/// other's effects.
///
/// Returns `None` when there is nothing to send yet, or nothing to send at
/// all for requests without an id.
pub fn handle_rpc_request(
    request: &RpcRequest,
    session: &ShelfSession,
    fps: f32,
    commands: &mut Vec<ShelfCommand>,
) -> Option<RpcResponse> {
    // Notifications are still executed, they just get no reply.
    let id = request.id.clone();

    if request.jsonrpc != "2.0" {
        let error = RpcError::invalid_request("Expected jsonrpc \"2.0\"");
        return id.map(|id| create_error_response(id, error.code, &error.message, None));
    }

    let params = &request.params;
    let handled = match request.method.as_str() {
        "set_shelf_view" => parse_set_shelf_view(params).map(Handled::Deferred),
        "set_genre_filter" => parse_set_genre_filter(params).map(Handled::Deferred),
        "set_rating_filter" => parse_set_rating_filter(params).map(Handled::Deferred),
        "cycle_genre" => parse_cycle_genre(params).map(Handled::Deferred),
        "commit_book_edit" => parse_commit_book_edit(params).map(Handled::Deferred),
        "add_book" => parse_add_book(params).map(Handled::Deferred),
        "get_books" => handle_get_books(session).map(Handled::Reply),
        "get_book" => handle_get_book(params, session).map(Handled::Reply),
        "get_layout" => Ok(Handled::Reply(json!({
            "generation": session.generation(),
            "layout": layout_to_json(session.layout()),
        }))),
        "get_camera_pose" => Ok(Handled::Reply(json!({
            "shelf": session.active_shelf(),
            "pose": pose_to_json(&session.camera_pose()),
        }))),
        "get_fps" => Ok(Handled::Reply(json!({ "fps": fps }))),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    match handled {
        Ok(Handled::Deferred(action)) => {
            let command = ShelfCommand::new(action, CommandSource::Rpc);
            commands.push(match id {
                Some(id) => command.with_reply(id),
                None => command,
            });
            None
        }
        Ok(Handled::Reply(result)) => id.map(|id| success_response(id, result)),
        Err(error) => id.map(|id| RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Answer for a mutating request, built from the session state right after
/// its command ran.
pub fn applied_response(applied: &CommandApplied) -> RpcResponse {
    let report = match &applied.outcome {
        Ok(report) => report,
        Err(err) => {
            return RpcResponse {
                jsonrpc: "2.0".to_string(),
                result: None,
                error: Some(RpcError::from(err)),
                id: Some(applied.reply_to.clone()),
            };
        }
    };

    let mut result = match &applied.action {
        ShelfAction::SetShelfView(_) => json!({ "shelf": report.shelf }),
        ShelfAction::SetGenreFilter(_) | ShelfAction::CycleGenre(_) => {
            json!({ "genre": report.filters.active_genre })
        }
        ShelfAction::SetRatingFilter(_) | ShelfAction::StepRatingFilter(_) => {
            json!({ "rating": report.filters.minimum_rating })
        }
        ShelfAction::CommitBookEdit { book, .. } => json!({ "id": book }),
        ShelfAction::CommitDrop { book, shelf } => json!({ "id": book, "shelf": shelf }),
        ShelfAction::AddBook(record) => json!({ "id": record.id }),
    };
    result["success"] = json!(true);
    result["generation"] = json!(report.generation);

    success_response(applied.reply_to.clone(), result)
}

fn success_response(id: Value, result: Value) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: Some(result),
        error: None,
        id: Some(id),
    }
}

fn parse_params<T: for<'de> Deserialize<'de>>(params: &Value, expected: &str) -> Result<T, RpcError> {
    serde_json::from_value::<T>(params.clone())
        .map_err(|_| RpcError::invalid_params(&format!("Expected {expected}")))
}

fn parse_set_shelf_view(params: &Value) -> Result<ShelfAction, RpcError> {
    #[derive(Deserialize)]
    struct ShelfParams {
        shelf: String,
    }

    let parsed: ShelfParams = parse_params(params, "'shelf' parameter")?;
    let shelf: ShelfView = parsed.shelf.parse()?;
    Ok(ShelfAction::SetShelfView(shelf))
}

fn parse_set_genre_filter(params: &Value) -> Result<ShelfAction, RpcError> {
    #[derive(Deserialize)]
    struct GenreParams {
        genre: String,
    }

    let parsed: GenreParams = parse_params(params, "'genre' parameter")?;
    let genre: Genre = parsed.genre.parse()?;
    Ok(ShelfAction::SetGenreFilter(genre))
}

fn parse_set_rating_filter(params: &Value) -> Result<ShelfAction, RpcError> {
    #[derive(Deserialize)]
    struct RatingParams {
        rating: u8,
    }

    let parsed: RatingParams = parse_params(params, "'rating' between 1 and 5")?;
    let minimum = MinimumRating::new(parsed.rating)?;
    Ok(ShelfAction::SetRatingFilter(minimum.get()))
}

fn parse_cycle_genre(params: &Value) -> Result<ShelfAction, RpcError> {
    #[derive(Deserialize)]
    struct CycleParams {
        direction: i32,
    }

    let parsed: CycleParams = parse_params(params, "'direction' of 1 or -1")?;
    let direction = parsed.direction.signum();
    if direction == 0 {
        return Err(RpcError::invalid_params("Direction must be non-zero"));
    }
    Ok(ShelfAction::CycleGenre(direction))
}

// Unknown ids are caught when the session applies the edit.
fn parse_commit_book_edit(params: &Value) -> Result<ShelfAction, RpcError> {
    #[derive(Deserialize)]
    struct EditParams {
        id: BookId,
        #[serde(flatten)]
        edit: BookEdit,
    }

    let parsed: EditParams = parse_params(params, "'id', 'rating' and optional 'notes'")?;
    validate_rating(parsed.id, parsed.edit.rating)?;
    Ok(ShelfAction::CommitBookEdit {
        book: parsed.id,
        edit: parsed.edit,
    })
}

// Duplicate ids are caught when the session inserts the book.
fn parse_add_book(params: &Value) -> Result<ShelfAction, RpcError> {
    let record: BookRecord = parse_params(params, "a book record")?;
    record.validate()?;
    Ok(ShelfAction::AddBook(record))
}

fn handle_get_books(session: &ShelfSession) -> Result<Value, RpcError> {
    serde_json::to_value(session.library().as_slice())
        .map(|books| json!({ "books": books }))
        .map_err(|e| RpcError::internal_error(&e.to_string()))
}

fn handle_get_book(params: &Value, session: &ShelfSession) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct BookParams {
        id: BookId,
    }

    let parsed: BookParams = parse_params(params, "'id' parameter")?;
    let book = session
        .library()
        .get(parsed.id)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown book {}", parsed.id)))?;
    serde_json::to_value(book).map_err(|e| RpcError::internal_error(&e.to_string()))
}

/// Wire form of a layout: placed slots in order, then hidden ids.
pub fn layout_to_json(layout: &ShelfLayout) -> Value {
    let slots: Vec<Value> = layout
        .slots()
        .into_iter()
        .map(|slot| {
            json!({
                "id": slot.book_id,
                "level": slot.level_index,
                "index": slot.index_on_level,
                "position": slot.position.to_array(),
            })
        })
        .collect();
    let hidden: Vec<BookId> = layout
        .iter()
        .filter(|(_, assignment)| matches!(assignment, SlotAssignment::Hidden))
        .map(|(id, _)| *id)
        .collect();

    json!({
        "shelf": layout.shelf(),
        "slots": slots,
        "hidden": hidden,
    })
}

pub fn pose_to_json(pose: &CameraPose) -> Value {
    json!({
        "position": pose.position.to_array(),
        "look_at": pose.look_at.to_array(),
    })
}
