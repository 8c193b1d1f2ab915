use bevy::prelude::*;
use serde_json::json;

use super::methods::{layout_to_json, pose_to_json};
use super::web_rpc::WebRpcInterface;
use crate::interaction::InteractionEffect;
use crate::session::{BookEditCommitted, CameraPoseRequest, LayoutCommitted, ShelfChanged, ShelfSession};

/// Notification method name for an interaction effect.
pub fn effect_method(effect: &InteractionEffect) -> &'static str {
    match effect {
        InteractionEffect::HoverEnter { .. } => "hover_enter",
        InteractionEffect::HoverExit { .. } => "hover_exit",
        InteractionEffect::DragStart { .. } => "drag_start",
        InteractionEffect::DragUpdate { .. } => "drag_update",
        InteractionEffect::Drop { .. } => "drag_end",
        InteractionEffect::DragCancel { .. } => "drag_cancel",
        InteractionEffect::Open { .. } => "book_opened",
    }
}

/// Forward interaction effects to the frontend. Hover and open carry the
/// book record so the page can show its details.
pub fn forward_interaction_notifications(
    mut effects: EventReader<InteractionEffect>,
    session: Res<ShelfSession>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for effect in effects.read() {
        let mut params = serde_json::to_value(effect).unwrap_or_else(|_| json!({}));
        if matches!(
            effect,
            InteractionEffect::HoverEnter { .. } | InteractionEffect::Open { .. }
        ) {
            if let Some(record) = session.library().get(effect.book()) {
                params["record"] = serde_json::to_value(record).unwrap_or_default();
            }
        }
        rpc_interface.send_notification(effect_method(effect), params);
    }
}

pub fn forward_session_notifications(
    mut layouts: EventReader<LayoutCommitted>,
    mut poses: EventReader<CameraPoseRequest>,
    mut shelves: EventReader<ShelfChanged>,
    mut edits: EventReader<BookEditCommitted>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for committed in layouts.read() {
        rpc_interface.send_notification(
            "layout_committed",
            json!({
                "generation": committed.generation,
                "layout": layout_to_json(&committed.layout),
            }),
        );
    }
    for request in poses.read() {
        rpc_interface.send_notification(
            "camera_pose_request",
            json!({
                "shelf": request.shelf,
                "pose": pose_to_json(&request.pose),
            }),
        );
    }
    for change in shelves.read() {
        rpc_interface.send_notification(
            "shelf_changed",
            json!({
                "shelf": change.shelf,
                "title": change.title,
            }),
        );
    }
    for edit in edits.read() {
        rpc_interface.send_notification(
            "book_edit_committed",
            json!({ "book": edit.book }),
        );
    }
}
