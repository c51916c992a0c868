use glam::{IVec3, Vec3};

/// Result of a grid raycast: the solid voxel struck plus the unit normal
/// of the face the ray entered through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    pub voxel: IVec3,
    /// Points back toward the ray origin. Zero when the origin's own
    /// voxel was already solid, so `voxel + normal` stays in place.
    pub normal: IVec3,
}

/// Distance along the ray to the first voxel boundary on one axis.
/// Infinite when the direction component is zero: that axis never
/// advances and the division is never taken.
fn int_bound(s: f32, ds: f32) -> f32 {
    if ds > 0.0 {
        ((s + 1.0).floor() - s) / ds
    } else if ds < 0.0 {
        (s - s.floor()) / -ds
    } else {
        f32::INFINITY
    }
}

/// Marches the ray voxel-by-voxel (3D DDA) and returns the first cell for
/// which `is_solid` holds, visiting cells in strictly increasing distance
/// order. Gives up once the traveled distance exceeds `max_distance`.
pub fn cast<F>(origin: Vec3, dir: Vec3, max_distance: f32, is_solid: F) -> Option<RayHit>
where
    F: Fn(i32, i32, i32) -> bool,
{
    let mut voxel = IVec3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );
    let step = IVec3::new(
        if dir.x > 0.0 { 1 } else { -1 },
        if dir.y > 0.0 { 1 } else { -1 },
        if dir.z > 0.0 { 1 } else { -1 },
    );
    let mut t_max = Vec3::new(
        int_bound(origin.x, dir.x),
        int_bound(origin.y, dir.y),
        int_bound(origin.z, dir.z),
    );
    let t_delta = Vec3::new(
        if dir.x != 0.0 { step.x as f32 / dir.x } else { f32::INFINITY },
        if dir.y != 0.0 { step.y as f32 / dir.y } else { f32::INFINITY },
        if dir.z != 0.0 { step.z as f32 / dir.z } else { f32::INFINITY },
    );

    let mut normal = IVec3::ZERO;
    let mut dist = 0.0;
    while dist <= max_distance {
        if is_solid(voxel.x, voxel.y, voxel.z) {
            return Some(RayHit { voxel, normal });
        }
        // advance along whichever axis crosses its next boundary first
        if t_max.x < t_max.y {
            if t_max.x < t_max.z {
                voxel.x += step.x;
                dist = t_max.x;
                t_max.x += t_delta.x;
                normal = IVec3::new(-step.x, 0, 0);
            } else {
                voxel.z += step.z;
                dist = t_max.z;
                t_max.z += t_delta.z;
                normal = IVec3::new(0, 0, -step.z);
            }
        } else if t_max.y < t_max.z {
            voxel.y += step.y;
            dist = t_max.y;
            t_max.y += t_delta.y;
            normal = IVec3::new(0, -step.y, 0);
        } else {
            voxel.z += step.z;
            dist = t_max.z;
            t_max.z += t_delta.z;
            normal = IVec3::new(0, 0, -step.z);
        }
    }
    None
}
