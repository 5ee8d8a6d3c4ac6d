//! Built-in demo map: three sectors of differing heights joined by
//! bidirectional portals, plus the texture bank its walls reference.

use glam::{Vec2, vec2};
use once_cell::sync::Lazy;

use crate::renderer::color::rgb;
use crate::world::geometry::{Map, Sector, SectorId, Wall};
use crate::world::texture::{Texture, TextureBank, TextureId};

/// Ids handed out by [`demo_bank`], in insertion order after the fallback.
pub const BRICK_TEX: TextureId = 1;
pub const PANEL_TEX: TextureId = 2;

/// Where the player spawns: position, heading, containing sector.
pub fn demo_start() -> (Vec2, f32, SectorId) {
    (vec2(256.0, 256.0), 0.0, 0)
}

pub fn demo_bank() -> TextureBank {
    let mut bank = TextureBank::default_with_checker();
    bank.insert("BRICK", Texture::brick(rgb(0x9C, 0x4A, 0x3C), rgb(0x40, 0x30, 0x2C)))
        .expect("fresh bank");
    bank.insert("PANEL", Texture::panel(rgb(0x6A, 0x6F, 0x78)))
        .expect("fresh bank");
    bank
}

/// Three rooms west-to-east; the middle corridor is the lowest, so both of
/// its portals show step strips from the taller neighbours.
pub static DEMO_MAP: Lazy<Map> = Lazy::new(|| {
    let red = rgb(0x9C, 0x4A, 0x3C);
    let grey = rgb(0x6A, 0x6F, 0x78);

    // sector 0: square room, height 400
    let room_west = Sector {
        height: 400.0,
        walls: vec![
            Wall::solid(vec2(0.0, 0.0), vec2(512.0, 0.0), red, BRICK_TEX),
            Wall::solid(vec2(512.0, 0.0), vec2(512.0, 192.0), red, BRICK_TEX),
            Wall::portal(vec2(512.0, 192.0), vec2(512.0, 320.0), red, 1, 0),
            Wall::solid(vec2(512.0, 320.0), vec2(512.0, 512.0), red, BRICK_TEX),
            Wall::solid(vec2(512.0, 512.0), vec2(0.0, 512.0), red, BRICK_TEX),
            Wall::solid(vec2(0.0, 512.0), vec2(0.0, 0.0), red, BRICK_TEX),
        ],
    };

    // sector 1: connecting corridor, height 280
    let corridor = Sector {
        height: 280.0,
        walls: vec![
            Wall::portal(vec2(512.0, 320.0), vec2(512.0, 192.0), grey, 0, 2),
            Wall::solid(vec2(512.0, 192.0), vec2(768.0, 192.0), grey, PANEL_TEX),
            Wall::portal(vec2(768.0, 192.0), vec2(768.0, 320.0), grey, 2, 0),
            Wall::solid(vec2(768.0, 320.0), vec2(512.0, 320.0), grey, PANEL_TEX),
        ],
    };

    // sector 2: east hall, height 360
    let hall_east = Sector {
        height: 360.0,
        walls: vec![
            Wall::portal(vec2(768.0, 320.0), vec2(768.0, 192.0), grey, 1, 2),
            Wall::solid(vec2(768.0, 192.0), vec2(768.0, 64.0), grey, PANEL_TEX),
            Wall::solid(vec2(768.0, 64.0), vec2(1152.0, 64.0), red, BRICK_TEX),
            Wall::solid(vec2(1152.0, 64.0), vec2(1152.0, 448.0), grey, PANEL_TEX),
            Wall::solid(vec2(1152.0, 448.0), vec2(768.0, 448.0), red, BRICK_TEX),
            Wall::solid(vec2(768.0, 448.0), vec2(768.0, 320.0), grey, PANEL_TEX),
        ],
    };

    let map = Map::new(vec![room_west, corridor, hall_east]);
    map.validate().expect("demo map portals are in range");
    map
});

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
