use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

// Crate engine modules
use crate::engine::books::{
    animate_books, announce_initial_layout, apply_interaction_effects, apply_layout_targets,
    spawn_missing_books,
};
use crate::engine::camera::{animate_shelf_camera, handle_camera_pose_requests, spawn_shelf_camera};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::{PointerTracker, capture_pointer_input, drive_interaction};
use crate::engine::scene::drop_feedback::{animate_drop_rings, spawn_drop_rings};
use crate::engine::scene::shelves::{spawn_lighting, spawn_room, spawn_shelves};
use crate::engine::systems::fps_tracking::fps_notification_system;
// Core state
use crate::interaction::{InteractionEffect, InteractionMachine, PointerInput};
use crate::session::{
    BookEditCommitted, CameraPoseRequest, CommandApplied, LayoutCommitted, ShelfChanged, ShelfCommand,
    ShelfSession, apply_shelf_commands, handle_shelf_keyboard_shortcuts,
};
// Web RPC modules
use crate::rpc::notifications::{forward_interaction_notifications, forward_session_notifications};
use crate::rpc::web_rpc::{RpcSet, WebRpcPlugin, answer_applied_commands};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::{
    fps_tracking::{fps_text_update_system, spawn_fps_overlay},
    shelf_label::{spawn_shelf_label, update_shelf_label},
};

/// Per-frame phases, run in order between receiving and sending RPC traffic.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard and pointer capture.
    Input,
    /// Pointer events through the state machine.
    Interaction,
    /// Commands applied to the session, layouts committed.
    Session,
    /// Entities retargeted and tweened.
    Animate,
    /// Events forwarded to the frontend.
    Notify,
}

/// Session, state machine and RPC wiring without any rendering. Headless
/// apps add this on top of `MinimalPlugins`.
pub struct BookshelfCorePlugin;

impl Plugin for BookshelfCorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(WebRpcPlugin)
            .init_resource::<InteractionMachine>()
            .add_event::<PointerInput>()
            .add_event::<InteractionEffect>()
            .add_event::<ShelfCommand>()
            .add_event::<CommandApplied>()
            .add_event::<LayoutCommitted>()
            .add_event::<CameraPoseRequest>()
            .add_event::<ShelfChanged>()
            .add_event::<BookEditCommitted>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Interaction,
                    FrameSet::Session,
                    FrameSet::Animate,
                    FrameSet::Notify,
                )
                    .chain()
                    .after(RpcSet::Receive)
                    .before(RpcSet::Send),
            )
            .add_systems(Update, drive_interaction.in_set(FrameSet::Interaction))
            .add_systems(Update, apply_shelf_commands.in_set(FrameSet::Session))
            .add_systems(
                Update,
                (
                    forward_interaction_notifications,
                    forward_session_notifications,
                    answer_applied_commands,
                )
                    .in_set(FrameSet::Notify),
            );

        if !app.world().contains_resource::<ShelfSession>() {
            app.insert_resource(create_shelf_session());
        }
    }
}

/// Session over the embedded dataset, or an empty shelf if it fails to parse.
pub fn create_shelf_session() -> ShelfSession {
    match ShelfSession::from_default_dataset() {
        Ok(session) => session,
        Err(err) => {
            error!("Could not load the book dataset: {}", err);
            ShelfSession::default()
        }
    }
}

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(BookshelfCorePlugin)
        .init_resource::<PointerTracker>();

    app.add_systems(
        Startup,
        (
            spawn_room,
            spawn_lighting,
            spawn_shelves,
            spawn_shelf_camera,
            announce_initial_layout,
        ),
    );

    // Presentation systems that run on all platforms.
    app.add_systems(
        Update,
        (
            (handle_shelf_keyboard_shortcuts, capture_pointer_input).in_set(FrameSet::Input),
            (apply_interaction_effects, spawn_drop_rings)
                .after(drive_interaction)
                .in_set(FrameSet::Interaction),
            (
                spawn_missing_books,
                apply_layout_targets,
                handle_camera_pose_requests,
                animate_books,
                animate_drop_rings,
                animate_shelf_camera,
            )
                .chain()
                .in_set(FrameSet::Animate),
            fps_notification_system.in_set(FrameSet::Notify),
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, (spawn_fps_overlay, spawn_shelf_label))
            .add_systems(
                Update,
                (fps_text_update_system, update_shelf_label).in_set(FrameSet::Notify),
            );
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
