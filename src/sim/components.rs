use bitflags::bitflags;
use glam::Vec2;

use crate::world::SectorId;

/// The avatar: position, heading, and the cached id of the sector the
/// position lies in.
///
/// The sector id is a denormalisation — the map is never searched for the
/// containing sector. Movement keeps it consistent: crossing a portal wall
/// is what moves the player from one sector to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub angle: f32,
    pub sector: SectorId,
}

impl Player {
    pub fn new(pos: Vec2, angle: f32, sector: SectorId) -> Self {
        Self { pos, angle, sector }
    }
}

bitflags! {
    /// Per-frame snapshot of the relevant key states, supplied by the host
    /// input loop. `STRAFE` is a modifier: while held, the left/right keys
    /// sidestep instead of turning.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct InputState: u8 {
        const FORWARD  = 0x01;
        const BACKWARD = 0x02;
        const LEFT     = 0x04;
        const RIGHT    = 0x08;
        const STRAFE   = 0x10;
    }
}
