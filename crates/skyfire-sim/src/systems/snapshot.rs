//! Snapshot system: reads the session and builds a complete FrameSnapshot.
//!
//! This system is read-only and never modifies the session.

use skyfire_core::entities::EnemyBody;
use skyfire_core::enums::GamePhase;
use skyfire_core::events::GameEvent;
use skyfire_core::render::UiSink;
use skyfire_core::state::*;
use skyfire_core::types::SimTime;

use crate::session::Session;

/// Build a FrameSnapshot from the current session state.
pub fn build_snapshot(session: &Session, time: &SimTime, events: Vec<GameEvent>) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase: session.phase,
        viewport: session.viewport,
        hud: build_hud(session),
        player_pos: session.player.pos,
        counts: build_counts(session),
        events,
    }
}

pub fn build_hud(session: &Session) -> HudView {
    HudView {
        score: session.score,
        lives: session.lives,
        power_stage: session.player.power_stage,
        special_count: session.player.special_count,
        game_over: (session.phase == GamePhase::GameOver).then_some(session.score),
    }
}

fn build_counts(session: &Session) -> EntityCounts {
    let mut counts = EntityCounts {
        player_bullets: session.player.bullets.len() as u32,
        enemy_bullets: session.enemy_bullets.len() as u32,
        pickups: session.pickups.len() as u32,
        rings: session.rings.len() as u32,
        ..EntityCounts::default()
    };
    for enemy in &session.enemies {
        match &enemy.body {
            EnemyBody::Asteroid(_) => counts.asteroids += 1,
            EnemyBody::Ship(ship) if ship.boss => counts.bosses += 1,
            EnemyBody::Ship(_) => counts.ships += 1,
        }
    }
    counts
}

/// Push the HUD to the UI sink: scoreboard, hearts, both bars and the
/// game-over banner.
pub fn publish_hud(hud: &HudView, ui: &mut dyn UiSink) {
    ui.update_score(hud.score);
    ui.update_lives(hud.hearts());
    ui.update_power_bar(&hud.power_segments());
    ui.update_special_bar(&hud.special_segments());
    match hud.game_over {
        Some(final_score) => ui.show_game_over(final_score),
        None => ui.hide_game_over(),
    }
}
