use bevy::prelude::*;

use super::ray::{PointerRay, ray_aabb_hit_t};
use crate::library::BookId;

/// Axis-aligned bounds of a book at its current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookVolume {
    pub id: BookId,
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BookVolume {
    pub fn new(id: BookId, center: Vec3, size: Vec3) -> Self {
        Self {
            id,
            center,
            half_extents: size * 0.5,
        }
    }
}

/// Nearest book under a pointer ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookHit {
    pub id: BookId,
    pub point: Vec3,
    pub distance: f32,
}

/// Nearest intersected volume along `ray`. On equal distance the volume
/// listed first wins.
pub fn pick_book(ray: &PointerRay, volumes: &[BookVolume]) -> Option<BookHit> {
    let mut best: Option<BookHit> = None;

    for volume in volumes {
        let min = volume.center - volume.half_extents;
        let max = volume.center + volume.half_extents;
        let Some(t) = ray_aabb_hit_t(ray.origin, ray.direction, min, max) else {
            continue;
        };
        if best.is_none_or(|hit| t < hit.distance) {
            best = Some(BookHit {
                id: volume.id,
                point: ray.at(t),
                distance: t,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(id: u32, x: f32, z: f32) -> BookVolume {
        BookVolume::new(BookId(id), Vec3::new(x, 0.0, z), Vec3::new(0.4, 1.4, 0.2))
    }

    fn ray_at_x(x: f32) -> PointerRay {
        PointerRay::new(Vec3::new(x, 0.0, 8.0), Vec3::NEG_Z)
    }

    #[test]
    fn empty_list_hits_nothing() {
        assert_eq!(pick_book(&ray_at_x(0.0), &[]), None);
    }

    #[test]
    fn nearest_of_overlapping_books_wins() {
        let volumes = [volume(1, 0.0, 0.0), volume(2, 0.0, 1.0)];
        let hit = pick_book(&ray_at_x(0.0), &volumes).unwrap();
        assert_eq!(hit.id, BookId(2));
        assert!((hit.point.z - 1.1).abs() < 1e-5);
    }

    #[test]
    fn identical_volumes_resolve_to_first_listed() {
        let volumes = [volume(4, 0.0, 0.0), volume(3, 0.0, 0.0)];
        assert_eq!(pick_book(&ray_at_x(0.0), &volumes).unwrap().id, BookId(4));
    }

    #[test]
    fn gap_between_books_is_a_miss() {
        let volumes = [volume(1, 0.0, 0.0), volume(2, 0.7, 0.0)];
        assert_eq!(pick_book(&ray_at_x(0.35), &volumes), None);
        assert_eq!(pick_book(&ray_at_x(0.7), &volumes).unwrap().id, BookId(2));
    }
}
