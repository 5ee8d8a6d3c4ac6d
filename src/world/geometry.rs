use glam::Vec2;

use crate::renderer::color::Rgb;
use crate::world::texture::TextureId;

pub type SectorId = u16;
pub type WallId = u16;

/// Things that can be wrong with authored map data.
///
/// All variants indicate corrupt data, caught once by [`Map::validate`]
/// before the map is ever rendered or walked.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("portal on sector {sector} wall {wall} targets missing sector {target}")]
    PortalSectorOutOfRange {
        sector: SectorId,
        wall: WallId,
        target: SectorId,
    },

    #[error("portal on sector {sector} wall {wall} targets missing wall {target}")]
    PortalWallOutOfRange {
        sector: SectorId,
        wall: WallId,
        target: WallId,
    },
}

/// Reference to the matching wall in the adjoining sector.
///
/// Pairing is expected to be bidirectional (the target wall's portal leads
/// back here); an inconsistent pair is an authoring error, not something
/// checked at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portal {
    pub sector: SectorId,
    pub wall: WallId,
}

/// A directed segment bounding a sector.
///
/// `portal == None` means solid: opaque, collidable, texture-rendered.
/// `Some` means an opening into another sector.
#[derive(Clone, Debug)]
pub struct Wall {
    pub p1: Vec2,
    pub p2: Vec2,
    pub color: Rgb,
    pub texture: TextureId,
    pub portal: Option<Portal>,
}

impl Wall {
    pub fn solid(p1: Vec2, p2: Vec2, color: Rgb, texture: TextureId) -> Self {
        Self {
            p1,
            p2,
            color,
            texture,
            portal: None,
        }
    }

    pub fn portal(p1: Vec2, p2: Vec2, color: Rgb, sector: SectorId, wall: WallId) -> Self {
        Self {
            p1,
            p2,
            color,
            texture: crate::world::texture::NO_TEXTURE,
            portal: Some(Portal { sector, wall }),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.p1 + self.p2) * 0.5
    }

    /// Heading of the directed segment `p1 → p2`.
    #[inline]
    pub fn angle(&self) -> f32 {
        (self.p2 - self.p1).to_angle()
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.p1.distance(self.p2)
    }
}

/// A convex area with uniform floor/ceiling height.
///
/// Wall order is the `WallId` address space referenced by portals, so it
/// must stay stable once any portal points at this sector.
#[derive(Clone, Debug)]
pub struct Sector {
    pub height: f32,
    pub walls: Vec<Wall>,
}

/// The single owning container for all sectors (immutable after load).
///
/// Sectors and walls are addressed by plain indices; nothing aliases or
/// duplicates wall data.
#[derive(Clone, Debug, Default)]
pub struct Map {
    pub sectors: Vec<Sector>,
}

impl Map {
    pub fn new(sectors: Vec<Sector>) -> Self {
        Self { sectors }
    }

    #[inline]
    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.get(id as usize)
    }

    /// Resolve a portal reference to the wall it names.
    pub fn portal_wall(&self, portal: Portal) -> Option<&Wall> {
        self.sector(portal.sector)?.walls.get(portal.wall as usize)
    }

    /// Check every portal reference is in range. Corrupt references are a
    /// configuration error; callers should refuse the map outright.
    pub fn validate(&self) -> Result<(), MapError> {
        for (sid, sector) in self.sectors.iter().enumerate() {
            for (wid, wall) in sector.walls.iter().enumerate() {
                let Some(portal) = wall.portal else { continue };
                let target =
                    self.sector(portal.sector)
                        .ok_or(MapError::PortalSectorOutOfRange {
                            sector: sid as SectorId,
                            wall: wid as WallId,
                            target: portal.sector,
                        })?;
                if target.walls.get(portal.wall as usize).is_none() {
                    return Err(MapError::PortalWallOutOfRange {
                        sector: sid as SectorId,
                        wall: wid as WallId,
                        target: portal.wall,
                    });
                }
            }
        }
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
