//! Top-down 2D map viewer.
//!
//! Debug aid for map authoring: draws every wall of the demo map to scale
//! (portals in blue), with the player as a cross plus a facing tick.
//! Movement runs through the same simulation as the first-person viewer.

use minifb::{Key, Window, WindowOptions};

use portalcast::sim::{FrameClock, InputState, Player, advance};
use portalcast::world::demo::{DEMO_MAP, demo_start};

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;

const SOLID_COLOR: u32 = 0x00_FFFFFF;
const PORTAL_COLOR: u32 = 0x00_4FA8FF;
const PLAYER_COLOR: u32 = 0x00_FFD24F;

fn main() -> anyhow::Result<()> {
    let map = &*DEMO_MAP;
    let (pos, angle, sector) = demo_start();
    let mut player = Player::new(pos, angle, sector);

    // ─────────── map-space → screen-space transform ────────────
    let points = map
        .sectors
        .iter()
        .flat_map(|s| s.walls.iter().flat_map(|w| [w.p1, w.p2]));
    let (min, max) = points.fold(
        (glam::Vec2::MAX, glam::Vec2::MIN),
        |(lo, hi), p| (lo.min(p), hi.max(p)),
    );

    let span = max - min;
    let scale = (WIDTH as f32 / span.x).min(HEIGHT as f32 / span.y) * 0.9; // 10 % margin
    let offset_x = (WIDTH as f32 - span.x * scale) / 2.0;
    let offset_y = (HEIGHT as f32 - span.y * scale) / 2.0;

    let to_screen = move |p: glam::Vec2| -> (i32, i32) {
        let sx = ((p.x - min.x) * scale + offset_x) as i32;
        let sy = HEIGHT as i32 - ((p.y - min.y) * scale + offset_y) as i32; // invert Y so north is up
        (sx, sy)
    };

    let mut buffer = vec![0u32; WIDTH * HEIGHT];
    let mut window = Window::new("portalcast map", WIDTH, HEIGHT, WindowOptions::default())?;
    window.set_target_fps(60);

    let mut clock = FrameClock::new();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mut keys = InputState::empty();
        if window.is_key_down(Key::Up) || window.is_key_down(Key::W) {
            keys |= InputState::FORWARD;
        }
        if window.is_key_down(Key::Down) || window.is_key_down(Key::S) {
            keys |= InputState::BACKWARD;
        }
        if window.is_key_down(Key::Left) || window.is_key_down(Key::A) {
            keys |= InputState::LEFT;
        }
        if window.is_key_down(Key::Right) || window.is_key_down(Key::D) {
            keys |= InputState::RIGHT;
        }
        if window.is_key_down(Key::LeftAlt) || window.is_key_down(Key::RightAlt) {
            keys |= InputState::STRAFE;
        }

        player = advance(player, map, keys, clock.tick());

        // ─────────── rasterise walls + player ────────────
        buffer.fill(0);
        for sector in &map.sectors {
            for wall in &sector.walls {
                let (x0, y0) = to_screen(wall.p1);
                let (x1, y1) = to_screen(wall.p2);
                let color = if wall.portal.is_some() {
                    PORTAL_COLOR
                } else {
                    SOLID_COLOR
                };
                draw_line(&mut buffer, WIDTH, HEIGHT, x0, y0, x1, y1, color);
            }
        }

        let (px, py) = to_screen(player.pos);
        draw_line(&mut buffer, WIDTH, HEIGHT, px - 4, py, px + 4, py, PLAYER_COLOR);
        draw_line(&mut buffer, WIDTH, HEIGHT, px, py - 4, px, py + 4, PLAYER_COLOR);
        let tip = to_screen(player.pos + 24.0 * glam::Vec2::from_angle(player.angle));
        draw_line(&mut buffer, WIDTH, HEIGHT, px, py, tip.0, tip.1, PLAYER_COLOR);

        window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}

/// Integer Bresenham line-drawing algorithm.
fn draw_line(
    buf: &mut [u32],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: u32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}
