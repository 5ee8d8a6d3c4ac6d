//! Pure 2D geometry utilities shared by the renderer and the simulation.

use glam::Vec2;

/// Rotate `p` around `pivot` by `angle` radians (CCW positive).
#[inline]
pub fn rotate_about(p: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(p - pivot) + pivot
}

/// Translate `p` by `amount` along `heading` (0 = east, CCW positive).
#[inline]
pub fn step_from(p: Vec2, amount: f32, heading: f32) -> Vec2 {
    p + amount * Vec2::from_angle(heading)
}

/// Signed side of the directed line `a → b` that `p` falls on.
///
/// Positive = left of the line, negative = right, zero = on it.
#[inline]
pub fn point_side(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
