//! End-to-end interaction scenarios on a headless app: pointer input through
//! the state machine, drops committed to the session, and RPC requests
//! answered in the same frame.

use bevy::ecs::event::Events;
use bevy::prelude::*;
use bookshelf_engine::engine::books::{Book, BookSize};
use bookshelf_engine::engine::core::app_setup::{BookshelfCorePlugin, FrameSet};
use bookshelf_engine::interaction::{
    InteractionEffect, InteractionMachine, InteractionState, PointerInput, PointerKind, PointerRay,
};
use bookshelf_engine::layout::ShelfView;
use bookshelf_engine::library::{BookId, Genre};
use bookshelf_engine::rpc::web_rpc::{
    IncomingRpcMessage, RpcResponse, RpcSet, WebRpcInterface,
};
use bookshelf_engine::session::{CameraPoseRequest, LayoutCommitted, ShelfSession};

const BOOK_SIZE: Vec3 = Vec3::new(0.3, 1.2, 0.15);

/// Responses and notification names captured before the RPC layer sends them.
#[derive(Resource, Default)]
struct Outbox {
    responses: Vec<RpcResponse>,
    notifications: Vec<String>,
}

fn capture_outbox(rpc: Res<WebRpcInterface>, mut outbox: ResMut<Outbox>) {
    outbox.responses.extend(rpc.pending_responses().iter().cloned());
    outbox
        .notifications
        .extend(rpc.pending_notifications().iter().map(|n| n.method.clone()));
}

/// Headless app with one book entity per placed slot, resting in its slot.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(BookshelfCorePlugin)
        .init_resource::<Outbox>()
        .add_systems(
            Update,
            capture_outbox.after(FrameSet::Notify).before(RpcSet::Send),
        );

    let slots: Vec<(BookId, Vec3)> = app
        .world()
        .resource::<ShelfSession>()
        .layout()
        .slots()
        .iter()
        .map(|slot| (slot.book_id, slot.position))
        .collect();
    for (id, position) in slots {
        app.world_mut().spawn((
            Book { id },
            BookSize(BOOK_SIZE),
            Transform::from_translation(position),
        ));
    }
    app
}

fn slot_of(app: &App, index: usize) -> (BookId, Vec3) {
    let session = app.world().resource::<ShelfSession>();
    let slots = session.layout().slots();
    (slots[index].book_id, slots[index].position)
}

/// Ray from in front of the shelves straight into the scene at (x, y).
fn pointer(kind: PointerKind, x: f32, y: f32) -> PointerInput {
    PointerInput::new(kind, PointerRay::new(Vec3::new(x, y, 8.0), Vec3::NEG_Z))
}

fn send_pointer(app: &mut App, inputs: Vec<PointerInput>) {
    for input in inputs {
        app.world_mut().send_event(input);
    }
    app.update();
}

fn send_rpc(app: &mut App, messages: &[&str]) {
    for content in messages {
        app.world_mut().send_event(IncomingRpcMessage {
            content: content.to_string(),
        });
    }
    app.update();
}

fn effects(app: &App) -> Vec<InteractionEffect> {
    app.world()
        .resource::<Events<InteractionEffect>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}

#[test]
fn moving_between_books_exits_before_entering() {
    let mut app = headless_app();
    let (a, a_pos) = slot_of(&app, 0);
    let (b, b_pos) = slot_of(&app, 1);

    send_pointer(&mut app, vec![pointer(PointerKind::Move, a_pos.x, a_pos.y)]);
    assert_eq!(effects(&app), vec![InteractionEffect::HoverEnter { book: a }]);

    send_pointer(&mut app, vec![pointer(PointerKind::Move, b_pos.x, b_pos.y)]);
    assert_eq!(
        effects(&app),
        vec![
            InteractionEffect::HoverExit { book: a },
            InteractionEffect::HoverEnter { book: b },
        ]
    );
    assert_eq!(
        app.world().resource::<InteractionMachine>().state(),
        InteractionState::Hovering(b)
    );

    let outbox = app.world().resource::<Outbox>();
    assert_eq!(
        outbox.notifications,
        vec!["hover_enter", "hover_exit", "hover_enter"]
    );
}

#[test]
fn drag_to_genre_shelf_commits_assignment_and_relayouts() {
    let mut app = headless_app();
    let (book, start) = slot_of(&app, 0);
    let generation = app.world().resource::<ShelfSession>().generation();

    send_pointer(
        &mut app,
        vec![
            pointer(PointerKind::Move, start.x, start.y),
            pointer(PointerKind::Down, start.x, start.y),
        ],
    );
    assert_eq!(app.world().resource::<InteractionMachine>().dragging(), Some(book));

    send_pointer(&mut app, vec![pointer(PointerKind::Move, 8.0, 1.0)]);
    send_pointer(&mut app, vec![pointer(PointerKind::Up, 8.0, 1.0)]);

    let dropped: Vec<_> = effects(&app)
        .into_iter()
        .filter_map(|effect| match effect {
            InteractionEffect::Drop { book, shelf, .. } => Some((book, shelf)),
            _ => None,
        })
        .collect();
    assert_eq!(dropped, vec![(book, ShelfView::Genre)]);

    let session = app.world().resource::<ShelfSession>();
    assert_eq!(
        session.library().get(book).and_then(|b| b.shelf_assignment),
        Some(ShelfView::Genre)
    );
    assert_eq!(session.generation(), generation + 1);

    let committed: Vec<u64> = app
        .world()
        .resource::<Events<LayoutCommitted>>()
        .iter_current_update_events()
        .map(|e| e.generation)
        .collect();
    assert_eq!(committed, vec![generation + 1]);
    assert_eq!(
        app.world().resource::<InteractionMachine>().state(),
        InteractionState::Idle
    );
}

#[test]
fn click_after_drag_does_not_open_the_book() {
    let mut app = headless_app();
    let (_, start) = slot_of(&app, 2);

    send_pointer(
        &mut app,
        vec![
            pointer(PointerKind::Down, start.x, start.y),
            pointer(PointerKind::Move, start.x + 1.0, start.y),
            pointer(PointerKind::Up, start.x + 1.0, start.y),
            pointer(PointerKind::Click, start.x, start.y),
        ],
    );

    assert!(
        !effects(&app)
            .iter()
            .any(|e| matches!(e, InteractionEffect::Open { .. }))
    );
}

#[test]
fn rpc_shelf_switch_is_answered_and_applied_in_one_frame() {
    let mut app = headless_app();
    let generation = app.world().resource::<ShelfSession>().generation();

    app.world_mut().send_event(IncomingRpcMessage {
        content: r#"{"jsonrpc":"2.0","method":"set_shelf_view","params":{"shelf":"genre"},"id":7}"#
            .to_string(),
    });
    app.update();

    let session = app.world().resource::<ShelfSession>();
    assert_eq!(session.active_shelf(), ShelfView::Genre);
    assert_eq!(session.layout().shelf(), ShelfView::Genre);
    assert_eq!(session.generation(), generation + 1);

    let poses: Vec<Vec3> = app
        .world()
        .resource::<Events<CameraPoseRequest>>()
        .iter_current_update_events()
        .map(|e| e.pose.position)
        .collect();
    assert_eq!(poses, vec![Vec3::new(8.0, 3.0, 8.0)]);

    let outbox = app.world().resource::<Outbox>();
    assert_eq!(outbox.responses.len(), 1);
    assert_eq!(outbox.responses[0].id, Some(serde_json::json!(7)));
    assert!(outbox.responses[0].error.is_none());
    assert!(outbox.notifications.contains(&"layout_committed".to_string()));
    assert!(outbox.notifications.contains(&"camera_pose_request".to_string()));
}

#[test]
fn malformed_rpc_gets_invalid_request_error() {
    let mut app = headless_app();
    app.world_mut().send_event(IncomingRpcMessage {
        content: r#"{"jsonrpc":"2.0","params":{}}"#.to_string(),
    });
    app.update();

    let outbox = app.world().resource::<Outbox>();
    assert_eq!(outbox.responses.len(), 1);
    assert_eq!(outbox.responses[0].error.as_ref().map(|e| e.code), Some(-32600));
}

#[test]
fn unparseable_rpc_gets_parse_error() {
    let mut app = headless_app();
    send_rpc(&mut app, &[r#"{"jsonrpc":"2.0","method":"#]);

    let outbox = app.world().resource::<Outbox>();
    assert_eq!(outbox.responses.len(), 1);
    assert_eq!(outbox.responses[0].id, Some(serde_json::Value::Null));
    assert_eq!(outbox.responses[0].error.as_ref().map(|e| e.code), Some(-32700));
}

#[test]
fn second_add_of_the_same_book_in_one_frame_is_rejected() {
    let mut app = headless_app();
    let before = app.world().resource::<ShelfSession>().library().len();
    let add = |request_id: u32| {
        format!(
            r#"{{"jsonrpc":"2.0","method":"add_book","id":{request_id},"params":{{"id":50,"title":"Dune","author":"Frank Herbert","genre":"Fiction","rating":4,"status":"read"}}}}"#
        )
    };
    let (first, second) = (add(1), add(2));
    send_rpc(&mut app, &[&first, &second]);

    assert_eq!(app.world().resource::<ShelfSession>().library().len(), before + 1);

    let outbox = app.world().resource::<Outbox>();
    assert_eq!(outbox.responses.len(), 2);
    assert_eq!(outbox.responses[0].id, Some(serde_json::json!(1)));
    assert!(outbox.responses[0].error.is_none());
    assert_eq!(outbox.responses[1].id, Some(serde_json::json!(2)));
    assert_eq!(outbox.responses[1].error.as_ref().map(|e| e.code), Some(-32602));
}

#[test]
fn genre_cycles_in_one_frame_report_each_step() {
    let mut app = headless_app();
    let start = app.world().resource::<ShelfSession>().filters().active_genre;
    send_rpc(
        &mut app,
        &[
            r#"{"jsonrpc":"2.0","method":"cycle_genre","params":{"direction":1},"id":"a"}"#,
            r#"{"jsonrpc":"2.0","method":"cycle_genre","params":{"direction":1},"id":"b"}"#,
        ],
    );

    let expected: Vec<Genre> = vec![start.cycle(1), start.cycle(2)];
    assert_eq!(
        app.world().resource::<ShelfSession>().filters().active_genre,
        expected[1]
    );

    let outbox = app.world().resource::<Outbox>();
    let reported: Vec<serde_json::Value> = outbox
        .responses
        .iter()
        .map(|r| r.result.as_ref().map(|v| v["genre"].clone()).unwrap_or_default())
        .collect();
    let expected: Vec<serde_json::Value> = expected
        .into_iter()
        .map(|g| serde_json::to_value(g).unwrap())
        .collect();
    assert_eq!(reported, expected);
}
