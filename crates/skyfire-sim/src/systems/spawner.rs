//! Spawn system: rate-limited creation of enemies and pickups.
//!
//! Every category has its own last-spawn timestamp in [`SpawnTimers`]; a
//! category fires when `now - last > interval` holds strictly.

use rand_chacha::ChaCha8Rng;

use skyfire_core::constants::*;
use skyfire_core::enums::PickupKind;
use skyfire_core::events::GameEvent;

use crate::session::Session;
use crate::world_setup;

/// Asteroid cadence for a power stage.
pub fn asteroid_interval_ms(power_stage: u8) -> f64 {
    (ASTEROID_SPAWN_BASE_MS - f64::from(power_stage) * ASTEROID_SPAWN_STEP_MS)
        .max(ASTEROID_SPAWN_FLOOR_MS)
}

/// Enemy ship cadence for a power stage.
pub fn ship_interval_ms(power_stage: u8) -> f64 {
    (SHIP_SPAWN_BASE_MS - f64::from(power_stage) * SHIP_SPAWN_STEP_MS).max(SHIP_SPAWN_FLOOR_MS)
}

/// Strict rate limiter check.
pub fn due(now_ms: f64, last_ms: f64, interval_ms: f64) -> bool {
    now_ms - last_ms > interval_ms
}

/// Run every spawn category once for the current frame.
pub fn run(session: &mut Session, rng: &mut ChaCha8Rng, now_ms: f64) {
    let stage = session.player.power_stage;

    if stage <= POWER_STAGE_REFUND_THRESHOLD
        && fire(&mut session.timers.power_up, now_ms, POWER_UP_SPAWN_INTERVAL_MS)
    {
        world_setup::spawn_pickup(session, rng, PickupKind::PowerUp, now_ms);
    }

    if fire(&mut session.timers.special, now_ms, SPECIAL_SPAWN_INTERVAL_MS) {
        world_setup::spawn_pickup(session, rng, PickupKind::Special, now_ms);
    }

    if session.lives < session.max_lives
        && fire(&mut session.timers.health_refill, now_ms, HEALTH_REFILL_SPAWN_INTERVAL_MS)
    {
        world_setup::spawn_pickup(session, rng, PickupKind::HealthRefill, now_ms);
    }

    if fire(&mut session.timers.asteroid, now_ms, asteroid_interval_ms(stage)) {
        world_setup::spawn_asteroid(session, rng);
    }

    if fire(&mut session.timers.ship, now_ms, ship_interval_ms(stage)) {
        world_setup::spawn_enemy_ship(session, rng);
    }

    if session.score >= BOSS_SCORE_THRESHOLD
        && !session.boss_alive()
        && fire(&mut session.timers.boss, now_ms, BOSS_SPAWN_INTERVAL_MS)
    {
        world_setup::spawn_boss_ship(session);
        session.events.push(GameEvent::BossSpawned);
    }
}

/// Check one timer and stamp it with `now_ms` when it fires.
fn fire(last: &mut f64, now_ms: f64, interval_ms: f64) -> bool {
    if due(now_ms, *last, interval_ms) {
        *last = now_ms;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asteroid_interval_floor() {
        assert_eq!(asteroid_interval_ms(0), 1000.0);
        assert_eq!(asteroid_interval_ms(4), 600.0);
        assert_eq!(asteroid_interval_ms(6), 400.0);
        assert_eq!(asteroid_interval_ms(10), 300.0);
    }

    #[test]
    fn test_ship_interval_floor() {
        assert_eq!(ship_interval_ms(0), 5000.0);
        assert_eq!(ship_interval_ms(4), 3000.0);
        assert_eq!(ship_interval_ms(6), 2000.0);
    }

    #[test]
    fn test_due_is_strict() {
        assert!(!due(1000.0, 0.0, 1000.0));
        assert!(due(1000.1, 0.0, 1000.0));
    }
}
