use glam::Vec2;

/// View-point in map space: an origin plus a heading.
///
/// Rays share this shape — a ray is a transient camera whose angle has been
/// biased for one screen column, and portal traversal re-expresses both in
/// the destination sector's frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec2,
    pub angle: f32, // radians (0 = east, counter-clockwise)
}

impl Camera {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self { pos, angle }
    }

    /// Unit vector pointing where the camera looks.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Same origin, different heading.
    #[inline]
    pub fn with_angle(&self, angle: f32) -> Self {
        Self {
            pos: self.pos,
            angle,
        }
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_is_unit_and_tracks_angle() {
        let cam = Camera::new(Vec2::ZERO, FRAC_PI_2);
        assert!((cam.forward().length() - 1.0).abs() < 1e-6);
        assert!((cam.forward() - vec2(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn with_angle_keeps_origin() {
        let cam = Camera::new(vec2(3.0, 4.0), 0.2);
        let ray = cam.with_angle(1.5);
        assert_eq!(ray.pos, cam.pos);
        assert_eq!(ray.angle, 1.5);
    }
}
