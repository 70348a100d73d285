//! Player state machine: lives, power stage, special charges and the
//! Playing / Paused / GameOver transitions.
//!
//! Every mutation clamps at the site; nothing here can fail.

use glam::Vec2;

use skyfire_core::constants::*;
use skyfire_core::entities::SpecialRing;
use skyfire_core::enums::{EnemyKind, GamePhase, KillSource, PickupKind};
use skyfire_core::events::GameEvent;

use crate::session::Session;
use crate::world_setup;

/// Move the ship to follow the pointer.
///
/// The ship's left edge tracks the pointer x, clamped so the ship stays left
/// of 90% of the canvas; its vertical middle tracks the pointer y.
pub fn follow_pointer(session: &mut Session, x: f32, y: f32) {
    let player = &mut session.player;
    let max_x = PLAYER_MAX_X_FRACTION * session.viewport.width - player.size.x;
    player.pos = Vec2::new(x.min(max_x), y - player.size.y / 2.0);
}

/// Flip between Playing and Paused. Ignored once the session is over.
pub fn toggle_pause(session: &mut Session) {
    session.phase = match session.phase {
        GamePhase::Playing => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Playing,
        GamePhase::GameOver => return,
    };
    tracing::debug!(phase = ?session.phase, "pause toggled");
}

/// Spend one special charge to cast a ring from the ship's center.
/// Returns whether a ring was cast.
pub fn fire_special(session: &mut Session) -> bool {
    if !session.is_playing() || session.player.special_count == 0 {
        return false;
    }
    session.player.special_count -= 1;
    let origin = session.player.center();
    session.rings.push(SpecialRing::new(origin));
    session.events.push(GameEvent::SpecialFired {
        origin,
        remaining: session.player.special_count,
    });
    true
}

/// Lose one life.
///
/// Above the refund threshold the power stage drops by two and the lost
/// stages are ejected as power-up pickups at the ship's position. Reaching
/// zero lives ends the session.
pub fn process_life_loss(session: &mut Session, now_ms: f64) {
    session.lives = session.lives.saturating_sub(1);

    let stage = session.player.power_stage;
    if stage > POWER_STAGE_REFUND_THRESHOLD {
        let lost = POWER_STAGE_LIFE_PENALTY.min(stage);
        session.player.power_stage = stage - lost;
        let drop_at = session.player.pos;
        for _ in 0..lost {
            world_setup::place_pickup(session, PickupKind::PowerUp, drop_at, now_ms);
        }
    }

    session.events.push(GameEvent::LifeLost {
        lives: session.lives,
        power_stage: session.player.power_stage,
    });
    tracing::debug!(
        lives = session.lives,
        power_stage = session.player.power_stage,
        "life lost"
    );

    if session.lives == 0 {
        end_session(session);
    }
}

/// Enter GameOver. Idempotent.
pub fn end_session(session: &mut Session) {
    if session.phase == GamePhase::GameOver {
        return;
    }
    session.phase = GamePhase::GameOver;
    session.events.push(GameEvent::GameOver {
        final_score: session.score,
    });
    tracing::info!(score = session.score, "game over");
}

/// Award the kill score for `kind`.
pub fn award_kill(session: &mut Session, kind: EnemyKind, source: KillSource) {
    let points = kind.score();
    session.score = session.score.saturating_add(points);
    session.events.push(GameEvent::EnemyDestroyed {
        kind,
        source,
        points,
    });
    session.events.push(GameEvent::ScoreChanged {
        score: session.score,
    });
}

/// Apply a pickup's effect, each capped at its maximum.
pub fn collect_pickup(session: &mut Session, kind: PickupKind) {
    match kind {
        PickupKind::PowerUp => {
            session.player.power_stage = (session.player.power_stage + 1).min(POWER_STAGE_MAX);
        }
        PickupKind::Special => {
            session.player.special_count = (session.player.special_count + 1).min(SPECIAL_MAX);
        }
        PickupKind::HealthRefill => {
            session.lives = (session.lives + 1).min(session.max_lives);
        }
    }
    session.events.push(GameEvent::PickupCollected { kind });
}
