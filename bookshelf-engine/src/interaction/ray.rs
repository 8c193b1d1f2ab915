use bevy::prelude::*;

/// Pointer ray in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PointerRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl From<Ray3d> for PointerRay {
    fn from(ray: Ray3d) -> Self {
        Self::new(ray.origin, ray.direction.as_vec3())
    }
}

// Slab-method ray–AABB intersection, returns Some(t) or None.
// Points on a face count as inside, including for axis-parallel rays.
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    if ray_direction == Vec3::ZERO {
        return None;
    }

    let (mut tmin, mut tmax) = (f32::NEG_INFINITY, f32::INFINITY);
    for axis in 0..3 {
        let (origin, direction) = (ray_origin[axis], ray_direction[axis]);
        if direction == 0.0 {
            // Parallel to this slab: either always inside it or never.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t0 > t1 { std::mem::swap(&mut t0, &mut t1); }

        tmin = tmin.max(t0);
        tmax = tmax.min(t1);
        if tmin > tmax { return None; }
    }

    if tmax < 0.0 { return None; }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

/// Intersect with the plane z = `plane_z`. Rays parallel to the plane or
/// pointing away from it miss.
pub fn ray_hits_z_plane(ray: &PointerRay, plane_z: f32) -> Option<Vec3> {
    if ray.direction.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - ray.origin.z) / ray.direction.z;
    (t >= 0.0).then(|| ray.at(t))
}
