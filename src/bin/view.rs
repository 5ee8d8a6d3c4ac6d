//! First-person viewer for the built-in demo map.
//!
//! ```bash
//! cargo run --release -- --width 960 --height 600
//! ```
//!
//! Arrows / WASD move, plain ←/→ turn, Alt + ←/→ strafes, Esc quits.

use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use portalcast::renderer::column::render_view;
use portalcast::renderer::software::Framebuffer;
use portalcast::sim::{FrameClock, InputState, Player, advance};
use portalcast::world::Camera;
use portalcast::world::demo::{DEMO_MAP, demo_bank, demo_start};

#[derive(Parser, Debug)]
#[command(about = "portal-sector raycaster, software rendered")]
struct Args {
    /// Horizontal resolution in pixels
    #[arg(long, default_value_t = 960)]
    width: usize,

    /// Vertical resolution in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let map = &*DEMO_MAP;
    map.validate()?;
    let bank = demo_bank();

    let (pos, angle, sector) = demo_start();
    let mut player = Player::new(pos, angle, sector);

    let mut fb = Framebuffer::default();
    let mut win = Window::new(
        "portalcast",
        args.width,
        args.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(60);

    println!(
        "demo map: {} sectors, spawn in sector {}",
        map.sectors.len(),
        sector
    );

    let mut clock = FrameClock::new();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start

        /* --------------- one key snapshot per frame ---------------------- */
        let mut keys = InputState::empty();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            keys |= InputState::FORWARD;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            keys |= InputState::BACKWARD;
        }
        if win.is_key_down(Key::Left) {
            keys |= InputState::LEFT;
        }
        if win.is_key_down(Key::Right) {
            keys |= InputState::RIGHT;
        }
        /* Alt + ←/→ = strafe; A/D always strafe */
        if win.is_key_down(Key::LeftAlt) || win.is_key_down(Key::RightAlt) {
            keys |= InputState::STRAFE;
        }
        if win.is_key_down(Key::A) {
            keys |= InputState::STRAFE | InputState::LEFT;
        }
        if win.is_key_down(Key::D) {
            keys |= InputState::STRAFE | InputState::RIGHT;
        }

        player = advance(player, map, keys, clock.tick());
        let camera = Camera::new(player.pos, player.angle);

        /* draw */
        fb.begin_frame(args.width, args.height);
        if let Err(e) = render_view(map, &bank, &camera, player.sector, &mut fb) {
            eprintln!("render: {e}");
        }
        fb.end_frame(|px, w, h| {
            // ─────────── accumulate & report every ~3 s ────────────────────
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(px, w, h)
        })?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let fps = 1000.0 / avg_ms;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, fps);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
