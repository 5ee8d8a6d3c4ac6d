//! Collision-clipped movement.
//!
//! One primitive, `try_move`, serves walking, backing up and strafing —
//! callers only vary the heading. A move either happens in full or not at
//! all: crossing the line of any solid wall of the current sector rejects
//! it outright (no sliding). Portal walls never block; stepping over one
//! hands the player to the sector behind it.

use smallvec::SmallVec;

use crate::renderer::raycast::cross_the_wall;
use crate::sim::Player;
use crate::world::helpers::{point_side, step_from};
use crate::world::{Camera, Map, SectorId};

/// Advance `player` by `speed` map units along `heading`.
///
/// The angle component is never touched here; turning is separate input
/// handling. Rejection is a normal outcome, not an error.
pub fn try_move(player: &Player, map: &Map, speed: f32, heading: f32) -> Player {
    if speed <= 0.0 {
        return *player;
    }
    let Some(sector) = map.sector(player.sector) else {
        return *player;
    };

    let target = step_from(player.pos, speed, heading);
    let walk = Camera::new(player.pos, heading);

    // portal walls whose segment the step actually crosses; nearest wins
    let mut crossed: SmallVec<[(f32, SectorId); 2]> = SmallVec::new();

    for wall in &sector.walls {
        let before = point_side(player.pos, wall.p1, wall.p2);
        let after = point_side(target, wall.p1, wall.p2);
        if before * after >= 0.0 {
            continue; // stayed on one side (or merely touched the line)
        }

        // the wall's infinite line was crossed; it only matters if the
        // step also passes within the segment's span (a sector edge may be
        // split into several collinear walls, portal and solid alike)
        let Some(cross) = cross_the_wall(&walk, wall) else {
            continue;
        };

        match wall.portal {
            // solid wall crossed: the whole move is off
            None => return *player,
            Some(portal) => crossed.push((cross.distance, portal.sector)),
        }
    }

    crossed.sort_by(|a, b| a.0.total_cmp(&b.0));
    let sector = crossed.first().map_or(player.sector, |&(_, s)| s);

    Player {
        pos: target,
        angle: player.angle,
        sector,
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::demo::{DEMO_MAP, demo_start};
    use crate::world::{Sector, Wall};
    use glam::vec2;

    /// Player at the origin, solid wall at x = 1 spanning y ∈ [-5, 5],
    /// far walls closing the sector well away from the action.
    fn walled_map() -> Map {
        let sector = Sector {
            height: 400.0,
            walls: vec![
                Wall::solid(vec2(1.0, -5.0), vec2(1.0, 5.0), 0xFFFFFF, 0),
                Wall::solid(vec2(1.0, 5.0), vec2(-9.0, 5.0), 0xFFFFFF, 0),
                Wall::solid(vec2(-9.0, 5.0), vec2(-9.0, -5.0), 0xFFFFFF, 0),
                Wall::solid(vec2(-9.0, -5.0), vec2(1.0, -5.0), 0xFFFFFF, 0),
            ],
        };
        Map::new(vec![sector])
    }

    #[test]
    fn move_into_solid_wall_is_rejected() {
        let map = walled_map();
        let player = Player::new(vec2(0.0, 0.0), 0.0, 0);
        let after = try_move(&player, &map, 2.0, 0.0);
        assert_eq!(after, player);
    }

    #[test]
    fn move_short_of_the_wall_is_exact() {
        let map = walled_map();
        let player = Player::new(vec2(0.0, 0.0), 0.0, 0);
        let after = try_move(&player, &map, 0.5, 0.0);
        assert_eq!(after.pos, vec2(0.5, 0.0));
        assert_eq!(after.sector, 0);
        assert_eq!(after.angle, 0.0);
    }

    #[test]
    fn zero_or_negative_speed_is_a_noop() {
        let map = walled_map();
        let player = Player::new(vec2(0.25, 0.25), 1.0, 0);
        assert_eq!(try_move(&player, &map, 0.0, 0.0), player);
        assert_eq!(try_move(&player, &map, -3.0, 0.0), player);
    }

    #[test]
    fn heading_does_not_leak_into_angle() {
        let map = walled_map();
        let player = Player::new(vec2(0.0, 0.0), 0.7, 0);
        // strafe: heading differs from facing
        let after = try_move(&player, &map, 0.5, 0.7 - std::f32::consts::FRAC_PI_2);
        assert_eq!(after.angle, 0.7);
    }

    #[test]
    fn portal_crossing_reassigns_sector() {
        let (_, _, start_sector) = demo_start();
        // just west of the demo map's first portal (x = 512), walking east
        let player = Player::new(vec2(508.0, 256.0), 0.0, start_sector);
        let after = try_move(&player, &DEMO_MAP, 8.0, 0.0);
        assert_eq!(after.sector, 1);
        assert_eq!(after.pos, vec2(516.0, 256.0));
    }

    #[test]
    fn portal_wall_never_blocks() {
        // a step that crosses the portal line but stops on it would still
        // be a side flip; make sure only solid walls reject
        let player = Player::new(vec2(510.0, 256.0), 0.0, 0);
        let after = try_move(&player, &DEMO_MAP, 4.0, 0.0);
        assert_eq!(after.pos, vec2(514.0, 256.0));
        assert_eq!(after.sector, 1);
    }
}
