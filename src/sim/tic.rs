//! Per-frame state reduction: previous player + key snapshot + elapsed
//! time → next player. Pure apart from [`FrameClock`], which owns the
//! wall-clock reads for the binaries.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Instant;

use crate::sim::movement::try_move;
use crate::sim::{InputState, Player};
use crate::world::Map;

pub const MOVE_SPEED: f32 = 160.0; // map-units / second
pub const TURN_RATE: f32 = PI; // rad / second (180°/s)

/// Fold one frame of input into the player state.
///
/// A zero or negative elapsed time yields the state unchanged — the frame
/// driver promises monotonic time, but a stalled clock must not move or
/// turn the player.
pub fn advance(player: Player, map: &Map, keys: InputState, dt_ms: f32) -> Player {
    if dt_ms <= 0.0 {
        return player;
    }
    let dt = dt_ms / 1000.0;
    let walk = MOVE_SPEED * dt;
    let turn = TURN_RATE * dt;

    let mut p = player;

    if keys.contains(InputState::FORWARD) {
        p = try_move(&p, map, walk, p.angle);
    }
    if keys.contains(InputState::BACKWARD) {
        p = try_move(&p, map, walk, p.angle - PI);
    }

    if keys.contains(InputState::STRAFE) {
        if keys.contains(InputState::LEFT) {
            p = try_move(&p, map, walk, p.angle + FRAC_PI_2);
        }
        if keys.contains(InputState::RIGHT) {
            p = try_move(&p, map, walk, p.angle - FRAC_PI_2);
        }
    } else {
        if keys.contains(InputState::LEFT) {
            p.angle = (p.angle + turn).rem_euclid(TAU);
        }
        if keys.contains(InputState::RIGHT) {
            p.angle = (p.angle - turn).rem_euclid(TAU);
        }
    }

    p
}

/// Wall-clock source for the frame loop; elapsed time is clamped to be
/// non-negative so `advance` never sees a backwards step.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Milliseconds since the previous call (or construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32() * 1000.0;
        self.last = now;
        dt.max(0.0)
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
