//! Per-column raycasting renderer.
//!
//! One ray per screen column: find the nearest wall crossing in the current
//! sector, paint ceiling and floor behind it, then either texture-map the
//! wall or re-express the ray through a portal and recurse into the sector
//! behind it — same column, bounded depth.

use crate::renderer::Surface;
use crate::renderer::color::{Rgb, darken, rgb};
use crate::renderer::portal::through_portal;
use crate::renderer::raycast::{RayCross, cross_the_wall};
use crate::world::{Camera, Map, SectorId, TextureBank, TextureError, Wall, WallId};

/// Pinhole focal length: controls the horizontal field of view.
pub const FOCAL_LENGTH: f32 = 0.8;
/// Divides sector heights down to projected wall half-heights.
pub const HEIGHT_RATIO: f32 = 1.3;
/// Crossings farther than this are not rendered; also the guarantee that
/// chains of portals terminate on degenerate maps.
pub const RENDER_DISTANCE: f32 = 4096.0;
/// Hard ceiling on portal recursion, so an A→B→A cycle cannot exhaust the
/// stack even inside the render distance.
pub const MAX_PORTAL_DEPTH: u32 = 32;
/// Map units covered by one horizontal texel step along a wall.
pub const TEXTURE_MAP_SCALE: f32 = 1.0;

pub const CEILING_COLOR: Rgb = rgb(0x00, 0x9A, 0xFF);
pub const FLOOR_COLOR: Rgb = rgb(0x2A, 0x2A, 0x2A);

/// Distance-to-darkening factor applied to wall colors and texels.
const DISTANCE_SHADE: f32 = 6.0;

/// A failure local to one ray/column. Corrupt map references surface here
/// when a ray actually reaches them; the view loop keeps going on the
/// remaining columns.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("render reached missing sector {0}")]
    MissingSector(SectorId),

    #[error("portal target sector {sector} wall {wall} does not exist")]
    BrokenPortal { sector: SectorId, wall: WallId },

    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Projected half-height in pixels of a wall slice.
///
/// `angle_offset` is the ray's deviation from the camera heading; the
/// cosine turns raw Euclidean ray distance into perpendicular lens
/// distance, removing the fisheye bend.
#[inline]
pub fn perspective_height(
    distance: f32,
    angle_offset: f32,
    sector_height: f32,
    half_screen: f32,
) -> f32 {
    let lens = (distance * angle_offset.cos()).max(1e-4);
    (half_screen / lens) * (sector_height / HEIGHT_RATIO)
}

/// Render every column of `surface` from `camera` standing in `sector`.
///
/// Failures are column-scoped: every column is attempted and the first
/// error (if any) is reported after the frame.
pub fn render_view(
    map: &Map,
    bank: &TextureBank,
    camera: &Camera,
    sector: SectorId,
    surface: &mut impl Surface,
) -> Result<(), RenderError> {
    let width = surface.width();
    let mut first_err = None;

    for col in 0..width {
        let bias = col as f32 / width as f32 - 0.5;
        let ray = camera.with_angle(bias.atan2(FOCAL_LENGTH) + camera.angle);
        if let Err(e) = render_column(map, bank, sector, &ray, camera, col as i32, 1, surface, 0) {
            first_err.get_or_insert(e);
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Render the span `x .. x + width` of the screen for one ray.
#[allow(clippy::too_many_arguments)]
pub fn render_column(
    map: &Map,
    bank: &TextureBank,
    sector_id: SectorId,
    ray: &Camera,
    camera: &Camera,
    x: i32,
    width: i32,
    surface: &mut impl Surface,
    depth: u32,
) -> Result<(), RenderError> {
    if depth >= MAX_PORTAL_DEPTH {
        return Ok(());
    }

    let sector = map
        .sector(sector_id)
        .ok_or(RenderError::MissingSector(sector_id))?;

    // nearest valid crossing in this sector; exact ties are measure-zero,
    // first-found wins
    let mut nearest: Option<(&Wall, RayCross)> = None;
    for wall in &sector.walls {
        if let Some(cross) = cross_the_wall(ray, wall) {
            if cross.distance > RENDER_DISTANCE {
                continue;
            }
            if nearest.as_ref().is_none_or(|(_, n)| cross.distance < n.distance) {
                nearest = Some((wall, cross));
            }
        }
    }

    let screen_h = surface.height() as i32;
    let half = screen_h / 2;
    surface.fill_rect(x, 0, width, half, CEILING_COLOR);
    surface.fill_rect(x, half, width, screen_h - half, FLOOR_COLOR);

    let Some((wall, cross)) = nearest else {
        // open to the void: only ceiling and floor for this column
        return Ok(());
    };

    let half_px = perspective_height(
        cross.distance,
        camera.angle - ray.angle,
        sector.height,
        half as f32,
    );
    let shade = cross.distance.sqrt() * DISTANCE_SHADE;

    if let Some(portal) = wall.portal {
        let behind = map
            .sector(portal.sector)
            .ok_or(RenderError::BrokenPortal {
                sector: portal.sector,
                wall: portal.wall,
            })?;
        let far = behind
            .walls
            .get(portal.wall as usize)
            .ok_or(RenderError::BrokenPortal {
                sector: portal.sector,
                wall: portal.wall,
            })?;

        let moved_ray = through_portal(wall, far, ray);
        let moved_cam = through_portal(wall, far, camera);
        render_column(
            map,
            bank,
            portal.sector,
            &moved_ray,
            &moved_cam,
            x,
            width,
            surface,
            depth + 1,
        )?;

        // the step where the far sector is lower shows this wall's color
        // above and below the opening
        if behind.height < sector.height {
            let step_px = perspective_height(
                cross.distance,
                camera.angle - ray.angle,
                behind.height,
                half as f32,
            );
            let color = darken(wall.color, shade);
            let outer = half_px.round() as i32;
            let inner = step_px.round() as i32;
            surface.fill_rect(x, half - outer, width, outer - inner, color);
            surface.fill_rect(x, half + inner, width, outer - inner, color);
        }
    } else {
        let tex = bank.texture(wall.texture)?;
        let u = (wall.length() * TEXTURE_MAP_SCALE * cross.offset) % tex.w as f32;
        let top = half - half_px.round() as i32;
        surface.blit_column(tex, u as usize, x, top, (half_px * 2.0).round() as i32, shade);
    }

    Ok(())
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Portal, Sector, Wall};
    use glam::{Vec2, vec2};

    /// Surface double that records primitives instead of rasterising.
    struct Recording {
        w: usize,
        h: usize,
        fills: Vec<(i32, i32, i32, i32, Rgb)>,
        blits: Vec<(usize, i32, i32, i32)>, // src_col, dst_x, top, height
    }

    impl Recording {
        fn new(w: usize, h: usize) -> Self {
            Self {
                w,
                h,
                fills: Vec::new(),
                blits: Vec::new(),
            }
        }
    }

    impl Surface for Recording {
        fn width(&self) -> usize {
            self.w
        }
        fn height(&self) -> usize {
            self.h
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
            self.fills.push((x, y, w, h, color));
        }
        fn blit_column(
            &mut self,
            _tex: &crate::world::Texture,
            src_col: usize,
            dst_x: i32,
            top: i32,
            height: i32,
            _shade: f32,
        ) {
            self.blits.push((src_col, dst_x, top, height));
        }
    }

    fn square_sector(side: f32, height: f32) -> Sector {
        let c = [
            vec2(0.0, 0.0),
            vec2(side, 0.0),
            vec2(side, side),
            vec2(0.0, side),
        ];
        Sector {
            height,
            walls: (0..4)
                .map(|i| Wall::solid(c[i], c[(i + 1) % 4], 0xAA5533, 0))
                .collect(),
        }
    }

    #[test]
    fn perspective_height_is_inverse_in_distance() {
        let mut prev = f32::INFINITY;
        for d in [50.0, 100.0, 200.0, 400.0, 800.0] {
            let h = perspective_height(d, 0.0, 400.0, 150.0);
            assert!(h < prev);
            prev = h;
        }
        let near = perspective_height(100.0, 0.0, 400.0, 150.0);
        let far = perspective_height(200.0, 0.0, 400.0, 150.0);
        assert!((near / far - 2.0).abs() < 1e-4);
    }

    #[test]
    fn lens_correction_uses_cosine_of_angle_offset() {
        let straight = perspective_height(100.0, 0.0, 400.0, 150.0);
        let skewed = perspective_height(100.0, 0.5, 400.0, 150.0);
        assert!((skewed * 0.5_f32.cos() - straight).abs() < 1e-3);
    }

    #[test]
    fn column_paints_ceiling_floor_then_wall() {
        let map = Map::new(vec![square_sector(512.0, 400.0)]);
        let bank = TextureBank::default_with_checker();
        let cam = Camera::new(vec2(256.0, 256.0), 0.0);
        let mut out = Recording::new(300, 300);

        render_column(&map, &bank, 0, &cam, &cam, 7, 1, &mut out, 0).unwrap();

        assert_eq!(out.fills[0], (7, 0, 1, 150, CEILING_COLOR));
        assert_eq!(out.fills[1], (7, 150, 1, 150, FLOOR_COLOR));
        assert_eq!(out.blits.len(), 1);
        let (_, dst_x, top, height) = out.blits[0];
        assert_eq!(dst_x, 7);
        // wall slice is centered on the horizon
        assert_eq!(top + height / 2, 150);
    }

    #[test]
    fn wall_height_halves_when_distance_doubles() {
        let map = Map::new(vec![square_sector(512.0, 400.0)]);
        let bank = TextureBank::default_with_checker();
        let mut heights = Vec::new();
        for x in [412.0, 312.0] {
            // 100 then 200 map units from the east wall, head-on
            let cam = Camera::new(vec2(x, 256.0), 0.0);
            let mut out = Recording::new(100, 400);
            render_column(&map, &bank, 0, &cam, &cam, 0, 1, &mut out, 0).unwrap();
            heights.push(out.blits[0].3 as f32);
        }
        assert!((heights[0] / heights[1] - 2.0).abs() < 0.05);
    }

    #[test]
    fn portal_recursion_terminates_on_a_cycle() {
        // pathological: every wall of each square is a portal into the
        // other square, so rays bounce between the two sectors forever
        let mut a = square_sector(64.0, 400.0);
        let mut b = square_sector(64.0, 400.0);
        for (i, w) in a.walls.iter_mut().enumerate() {
            w.portal = Some(Portal {
                sector: 1,
                wall: i as u16,
            });
        }
        for (i, w) in b.walls.iter_mut().enumerate() {
            w.portal = Some(Portal {
                sector: 0,
                wall: i as u16,
            });
        }
        let map = Map::new(vec![a, b]);
        let bank = TextureBank::default_with_checker();
        let cam = Camera::new(vec2(32.0, 32.0), 0.3);
        let mut out = Recording::new(10, 10);
        render_column(&map, &bank, 0, &cam, &cam, 0, 1, &mut out, 0).unwrap();
    }

    #[test]
    fn lower_far_sector_paints_step_strips() {
        // east wall of sector 0 opens into a lower sector 1
        let mut near = square_sector(512.0, 400.0);
        near.walls[1] = Wall::portal(vec2(512.0, 0.0), vec2(512.0, 512.0), 0xAA5533, 1, 3);
        let far = Sector {
            height: 200.0,
            walls: vec![
                Wall::solid(vec2(512.0, 0.0), vec2(1024.0, 0.0), 0x3355AA, 0),
                Wall::solid(vec2(1024.0, 0.0), vec2(1024.0, 512.0), 0x3355AA, 0),
                Wall::solid(vec2(1024.0, 512.0), vec2(512.0, 512.0), 0x3355AA, 0),
                Wall::portal(vec2(512.0, 512.0), vec2(512.0, 0.0), 0x3355AA, 0, 1),
            ],
        };
        let map = Map::new(vec![near, far]);
        map.validate().unwrap();
        let bank = TextureBank::default_with_checker();
        let cam = Camera::new(vec2(256.0, 256.0), 0.0);
        let mut out = Recording::new(300, 300);

        render_column(&map, &bank, 0, &cam, &cam, 0, 1, &mut out, 0).unwrap();

        // ceiling+floor at both depths, then the two strips
        assert_eq!(out.fills.len(), 6);
        let (_, y0, _, h0, c0) = out.fills[4];
        let (_, y1, _, h1, c1) = out.fills[5];
        assert_eq!(c0, c1);
        assert_ne!(c0, CEILING_COLOR);
        assert_ne!(c0, FLOOR_COLOR);
        assert_eq!(h0, h1);
        assert!(h0 > 0);
        // upper strip sits above the horizon, lower strip below
        assert!(y0 < 150 && y1 >= 150);
    }

    #[test]
    fn broken_portal_is_column_scoped() {
        // central notch of the east wall portals into a sector that does
        // not exist; the rest of the wall is solid
        let mut sector = square_sector(512.0, 400.0);
        sector.walls[1] = Wall::solid(vec2(512.0, 0.0), vec2(512.0, 192.0), 0xAA5533, 0);
        sector.walls.push(Wall::portal(
            vec2(512.0, 192.0),
            vec2(512.0, 320.0),
            0xAA5533,
            9,
            0,
        ));
        sector
            .walls
            .push(Wall::solid(vec2(512.0, 320.0), vec2(512.0, 512.0), 0xAA5533, 0));
        let map = Map::new(vec![sector]);
        let bank = TextureBank::default_with_checker();
        let cam = Camera::new(vec2(256.0, 256.0), 0.0);
        let mut out = Recording::new(80, 60);

        let err = render_view(&map, &bank, &cam, 0, &mut out).unwrap_err();
        assert!(matches!(err, RenderError::BrokenPortal { sector: 9, .. }));
        // every column still painted its ceiling/floor pair, and the
        // columns that hit solid wall still produced their blits
        assert_eq!(out.fills.len(), 2 * 80);
        assert!(!out.blits.is_empty());
    }

    #[test]
    fn missing_start_sector_is_an_error() {
        let map = Map::new(vec![]);
        let bank = TextureBank::default_with_checker();
        let cam = Camera::new(Vec2::ZERO, 0.0);
        let mut out = Recording::new(4, 4);
        assert_eq!(
            render_column(&map, &bank, 3, &cam, &cam, 0, 1, &mut out, 0),
            Err(RenderError::MissingSector(3))
        );
    }
}
