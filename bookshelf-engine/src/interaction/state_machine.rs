use bevy::prelude::*;
use constants::shelf_layout::{CLICK_DRAG_TOLERANCE, DRAG_PLANE_Z};
use serde::Serialize;

use super::hit_test::{BookVolume, pick_book};
use super::ray::{PointerRay, ray_hits_z_plane};
use crate::layout::{ShelfView, find_nearest_shelf};
use crate::library::BookId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Click,
}

/// Pointer event already converted to a world-space ray.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub ray: PointerRay,
}

impl PointerInput {
    pub fn new(kind: PointerKind, ray: PointerRay) -> Self {
        Self { kind, ray }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering(BookId),
    Dragging { book: BookId, grab_offset: Vec3 },
}

/// Effects for the shell, in the order they happened.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionEffect {
    HoverEnter { book: BookId },
    HoverExit { book: BookId },
    DragStart { book: BookId, position: [f32; 3] },
    DragUpdate { book: BookId, position: [f32; 3] },
    Drop { book: BookId, position: [f32; 3], shelf: ShelfView },
    DragCancel { book: BookId },
    Open { book: BookId },
}

impl InteractionEffect {
    pub fn book(&self) -> BookId {
        match *self {
            Self::HoverEnter { book }
            | Self::HoverExit { book }
            | Self::DragStart { book, .. }
            | Self::DragUpdate { book, .. }
            | Self::Drop { book, .. }
            | Self::DragCancel { book }
            | Self::Open { book } => book,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragTrack {
    origin: Vec3,
    position: Vec3,
    moved: bool,
}

/// Hover, drag and click handling for pointer events.
///
/// Feed it one `PointerInput` at a time together with the current book
/// volumes, in the order the books are listed in the library. Malformed input
/// leaves the state alone and yields no effects.
#[derive(Resource, Debug, Default)]
pub struct InteractionMachine {
    state: InteractionState,
    drag: Option<DragTrack>,
    suppress_click: bool,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn hovered(&self) -> Option<BookId> {
        match self.state {
            InteractionState::Hovering(book) => Some(book),
            _ => None,
        }
    }

    pub fn dragging(&self) -> Option<BookId> {
        match self.state {
            InteractionState::Dragging { book, .. } => Some(book),
            _ => None,
        }
    }

    /// Current world position of the dragged book.
    pub fn drag_position(&self) -> Option<Vec3> {
        self.drag.map(|track| track.position)
    }

    pub fn handle(&mut self, input: &PointerInput, volumes: &[BookVolume]) -> Vec<InteractionEffect> {
        let mut effects = Vec::new();

        match (self.state, input.kind) {
            (InteractionState::Dragging { book, grab_offset }, PointerKind::Move) => {
                if !volumes.iter().any(|v| v.id == book) {
                    self.cancel_drag(book, &mut effects);
                } else {
                    self.drag_to(book, grab_offset, &input.ray, &mut effects);
                }
            }
            (InteractionState::Dragging { book, .. }, PointerKind::Up) => {
                if volumes.iter().any(|v| v.id == book) {
                    self.finish_drag(book, &mut effects);
                } else {
                    self.cancel_drag(book, &mut effects);
                }
            }
            // A second press or a click mid-drag changes nothing.
            (InteractionState::Dragging { .. }, PointerKind::Down | PointerKind::Click) => {}
            (_, PointerKind::Move) => {
                let target = pick_book(&input.ray, volumes).map(|hit| hit.id);
                self.hover(target, &mut effects);
            }
            (_, PointerKind::Down) => {
                self.suppress_click = false;
                if let Some(hit) = pick_book(&input.ray, volumes) {
                    self.hover(Some(hit.id), &mut effects);
                    let Some(volume) = volumes.iter().find(|v| v.id == hit.id) else {
                        return effects;
                    };
                    self.state = InteractionState::Dragging {
                        book: hit.id,
                        grab_offset: hit.point - volume.center,
                    };
                    self.drag = Some(DragTrack {
                        origin: volume.center,
                        position: volume.center,
                        moved: false,
                    });
                    effects.push(InteractionEffect::DragStart {
                        book: hit.id,
                        position: volume.center.to_array(),
                    });
                }
            }
            (_, PointerKind::Up) => {}
            (_, PointerKind::Click) => {
                if std::mem::take(&mut self.suppress_click) {
                    return effects;
                }
                if let Some(hit) = pick_book(&input.ray, volumes) {
                    effects.push(InteractionEffect::Open { book: hit.id });
                }
            }
        }

        effects
    }

    fn hover(&mut self, target: Option<BookId>, effects: &mut Vec<InteractionEffect>) {
        let current = self.hovered();
        if current == target {
            return;
        }
        if let Some(book) = current {
            effects.push(InteractionEffect::HoverExit { book });
        }
        match target {
            Some(book) => {
                effects.push(InteractionEffect::HoverEnter { book });
                self.state = InteractionState::Hovering(book);
            }
            None => self.state = InteractionState::Idle,
        }
    }

    fn drag_to(
        &mut self,
        book: BookId,
        grab_offset: Vec3,
        ray: &PointerRay,
        effects: &mut Vec<InteractionEffect>,
    ) {
        let Some(track) = self.drag.as_mut() else {
            return;
        };
        let Some(point) = ray_hits_z_plane(ray, DRAG_PLANE_Z) else {
            return;
        };
        track.position = point - grab_offset;
        if track.position.distance(track.origin) >= CLICK_DRAG_TOLERANCE {
            track.moved = true;
        }
        effects.push(InteractionEffect::DragUpdate {
            book,
            position: track.position.to_array(),
        });
    }

    fn finish_drag(&mut self, book: BookId, effects: &mut Vec<InteractionEffect>) {
        let Some(track) = self.drag.take() else {
            self.state = InteractionState::Idle;
            return;
        };
        let shelf = find_nearest_shelf(track.position);
        effects.push(InteractionEffect::Drop {
            book,
            position: track.position.to_array(),
            shelf,
        });
        self.suppress_click = track.moved;
        self.state = InteractionState::Idle;
    }

    fn cancel_drag(&mut self, book: BookId, effects: &mut Vec<InteractionEffect>) {
        self.drag = None;
        self.suppress_click = false;
        self.state = InteractionState::Idle;
        effects.push(InteractionEffect::DragCancel { book });
    }
}
