//! Collision system: resolves every contact for the frame.
//!
//! Passes run in a fixed order:
//! 1. player bullets vs enemies
//! 2. enemy bullets vs player
//! 3. enemies vs player
//! 4. pickups vs player
//! 5. special rings vs enemies
//!
//! Boxes use strict AABB overlap; rings test the enemy center against their
//! radial band. Lists are walked in reverse index order so removal is safe.
//! Resolution stops as soon as the session ends.

use rand_chacha::ChaCha8Rng;

use skyfire_core::constants::RING_DAMAGE;
use skyfire_core::entities::EnemyBody;
use skyfire_core::enums::{EnemyKind, KillSource};
use skyfire_core::events::GameEvent;

use crate::session::Session;
use crate::systems::player;
use crate::world_setup;

/// Run all collision passes for one frame.
pub fn run(session: &mut Session, rng: &mut ChaCha8Rng, now_ms: f64) {
    bullets_vs_enemies(session, rng);
    if !session.is_playing() {
        return;
    }
    enemy_bullets_vs_player(session, now_ms);
    if !session.is_playing() {
        return;
    }
    enemies_vs_player(session, now_ms);
    if !session.is_playing() {
        return;
    }
    pickups_vs_player(session, now_ms);
    rings_vs_enemies(session);
}

/// Each bullet hits at most one enemy and is consumed by it.
fn bullets_vs_enemies(session: &mut Session, rng: &mut ChaCha8Rng) {
    for b in (0..session.player.bullets.len()).rev() {
        let bullet = session.player.bullets[b];
        let bounds = bullet.bounds();
        let Some(e) = session
            .enemies
            .iter()
            .rposition(|enemy| bounds.overlaps(&enemy.bounds()))
        else {
            continue;
        };
        session.player.bullets.remove(b);

        // Larger asteroids shatter on any hit regardless of HP.
        if let EnemyBody::Asteroid(asteroid) = &session.enemies[e].body {
            if let Some(smaller) = asteroid.class.smaller() {
                let class = asteroid.class;
                let motion = asteroid.motion;
                let origin = session.enemies[e].pos;
                session.enemies.remove(e);
                player::award_kill(session, EnemyKind::Asteroid(class), KillSource::Bullet);
                let pieces = world_setup::spawn_fragments(session, rng, origin, &motion, smaller);
                session
                    .events
                    .push(GameEvent::AsteroidShattered { class, pieces });
                continue;
            }
        }

        let enemy = &mut session.enemies[e];
        enemy.hp -= bullet.damage();
        if enemy.hp <= 0 {
            let kind = enemy.kind();
            session.enemies.remove(e);
            player::award_kill(session, kind, KillSource::Bullet);
        }
    }
}

fn enemy_bullets_vs_player(session: &mut Session, now_ms: f64) {
    let player_bounds = session.player.bounds();
    for i in (0..session.enemy_bullets.len()).rev() {
        if !session.enemy_bullets[i].bounds().overlaps(&player_bounds) {
            continue;
        }
        session.enemy_bullets.remove(i);
        player::process_life_loss(session, now_ms);
        if !session.is_playing() {
            return;
        }
    }
}

/// Ships end the session on contact; asteroids cost a life.
fn enemies_vs_player(session: &mut Session, now_ms: f64) {
    let player_bounds = session.player.bounds();
    for i in (0..session.enemies.len()).rev() {
        if !session.enemies[i].bounds().overlaps(&player_bounds) {
            continue;
        }
        let enemy = session.enemies.remove(i);
        if enemy.is_ship() {
            player::end_session(session);
        } else {
            player::process_life_loss(session, now_ms);
        }
        if !session.is_playing() {
            return;
        }
    }
}

/// Pickups cannot be collected during the frame they appeared.
fn pickups_vs_player(session: &mut Session, now_ms: f64) {
    let player_bounds = session.player.bounds();
    for i in (0..session.pickups.len()).rev() {
        let pickup = session.pickups[i];
        if now_ms <= pickup.spawned_ms || !pickup.bounds().overlaps(&player_bounds) {
            continue;
        }
        session.pickups.remove(i);
        player::collect_pickup(session, pickup.kind);
    }
}

/// A ring damages each enemy at most once.
fn rings_vs_enemies(session: &mut Session) {
    let mut kills: Vec<EnemyKind> = Vec::new();

    for ring in &mut session.rings {
        for e in (0..session.enemies.len()).rev() {
            let enemy = &mut session.enemies[e];
            if ring.hit.contains(&enemy.id) || !ring.band_contains(enemy.center()) {
                continue;
            }
            ring.hit.insert(enemy.id);
            enemy.hp -= RING_DAMAGE;
            if enemy.hp <= 0 {
                kills.push(enemy.kind());
                session.enemies.remove(e);
            }
        }
    }

    for kind in kills {
        player::award_kill(session, kind, KillSource::Ring);
    }
}
