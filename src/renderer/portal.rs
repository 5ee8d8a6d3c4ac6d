//! Re-expressing a camera/ray across a portal seam.

use crate::world::helpers::rotate_about;
use crate::world::{Camera, Wall};

use std::f32::consts::PI;

/// Rigid transform that maps the `near` wall onto the `far` wall with the
/// facing flipped (portals look at each other), applied to a camera or ray.
///
/// After the transform the two segments coincide — `near.p1 ↦ far.p2`,
/// `near.p2 ↦ far.p1` — so the view continues seamlessly across the seam,
/// and applying the counterpart portal's transform afterwards restores the
/// original camera.
pub fn through_portal(near: &Wall, far: &Wall, cam: &Camera) -> Camera {
    let rotation = far.angle() - near.angle() + PI;
    let pos = rotate_about(cam.pos, near.center(), rotation) + (far.center() - near.center());
    Camera::new(pos, cam.angle + rotation)
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
