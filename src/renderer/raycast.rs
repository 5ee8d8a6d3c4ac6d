//! Ray vs wall-segment intersection.

use crate::world::{Camera, Wall};

/// Rays closer to parallel than this never intersect; keeps near-zero
/// denominators from exploding into bogus far hits.
const EPSILON: f32 = 1e-6;

/// A successful crossing: how far along the ray, and where on the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCross {
    /// Euclidean distance from the ray origin to the intersection.
    pub distance: f32,
    /// Normalized position along the segment: 0 at `p1`, 1 at `p2`.
    /// Drives texture-column selection.
    pub offset: f32,
}

/// Intersect the ray through `ray.pos` at `ray.angle` with the finite
/// segment `wall.p1 – wall.p2`.
///
/// `None` when the two are parallel (or the wall is degenerate), when the
/// hit lies outside the segment, or when it is behind the origin.
pub fn cross_the_wall(ray: &Camera, wall: &Wall) -> Option<RayCross> {
    let dir = ray.forward();
    let edge = wall.p2 - wall.p1;

    let denom = dir.perp_dot(edge);
    if denom.abs() < EPSILON {
        return None;
    }

    let to_wall = wall.p1 - ray.pos;
    let distance = to_wall.perp_dot(edge) / denom;
    let offset = to_wall.perp_dot(dir) / denom;

    if distance <= EPSILON || !(0.0..=1.0).contains(&offset) {
        return None;
    }

    Some(RayCross { distance, offset })
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
