//! Fire control system: player auto-fire on a stage-dependent cadence.

use glam::Vec2;

use skyfire_core::constants::*;
use skyfire_core::entities::PlayerBullet;

use crate::guidance;
use crate::session::Session;

/// Auto-fire interval for a power stage.
pub fn fire_interval_ms(power_stage: u8) -> f64 {
    let divisor = match power_stage {
        0 => 1.0,
        1..=3 => 2.0,
        4 => 3.0,
        5 => 4.0,
        _ => 5.0,
    };
    BASE_FIRE_INTERVAL_MS / divisor
}

/// Bullets produced by one shot at `power_stage`, spawned at `muzzle`.
pub fn fire_pattern(power_stage: u8, muzzle: Vec2) -> Vec<PlayerBullet> {
    let forward = Vec2::new(PLAYER_BULLET_SPEED, 0.0);
    let bullet = |dy: f32, vel: Vec2| PlayerBullet {
        pos: muzzle + Vec2::new(0.0, dy),
        vel,
        special: false,
    };

    match power_stage {
        0 | 1 => vec![bullet(0.0, forward)],
        2 | 3 => vec![
            bullet(-TWIN_SHOT_OFFSET, forward),
            bullet(TWIN_SHOT_OFFSET, forward),
        ],
        _ => vec![
            bullet(0.0, forward),
            bullet(-SPREAD_SHOT_OFFSET, forward),
            bullet(SPREAD_SHOT_OFFSET, forward),
            bullet(0.0, guidance::diagonal(PLAYER_BULLET_SPEED, false)),
            bullet(0.0, guidance::diagonal(PLAYER_BULLET_SPEED, true)),
        ],
    }
}

/// Fire the player's guns if the interval has elapsed.
///
/// The first frame of a session only arms the timer.
pub fn run(session: &mut Session, now_ms: f64) {
    let Some(last_shot) = session.last_shot_ms else {
        session.last_shot_ms = Some(now_ms);
        return;
    };

    let stage = session.player.power_stage;
    if now_ms - last_shot > fire_interval_ms(stage) {
        let volley = fire_pattern(stage, session.player.muzzle());
        session.player.bullets.extend(volley);
        session.last_shot_ms = Some(now_ms);
    }
}
