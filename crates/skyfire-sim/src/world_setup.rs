//! Entity spawn factories.
//!
//! Creates asteroids, ships, bosses, pickups, fragment cascades and the
//! background starfield with randomized attributes. Rate limiting lives in
//! the spawner system; these functions spawn unconditionally.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfire_core::constants::*;
use skyfire_core::entities::*;
use skyfire_core::enums::{AsteroidClass, PickupKind};
use skyfire_core::types::Viewport;

use crate::session::Session;

/// Pending cascade step: pieces of `class` to produce around `origin`.
#[derive(Debug, Clone, Copy)]
struct FragmentSeed {
    origin: Vec2,
    parent_speed: f32,
    parent_dy: f32,
    class: AsteroidClass,
}

/// Spawn an asteroid of random class at the right edge.
pub fn spawn_asteroid(session: &mut Session, rng: &mut ChaCha8Rng) -> EntityId {
    let class = AsteroidClass::ALL[rng.gen_range(0..AsteroidClass::ALL.len())];
    let size = class.size();
    let speed = rng.gen_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED) as f32;

    let motion = if rng.gen_bool(ASTEROID_DIAGONAL_CHANCE) {
        AsteroidMotion::Diagonal {
            speed,
            dy: speed * random_sign(rng),
        }
    } else {
        AsteroidMotion::Linear { speed }
    };

    let pos = Vec2::new(
        session.viewport.width,
        random_y(rng, session.viewport.height, size),
    );
    push_asteroid(session, rng, class, pos, motion)
}

/// Spawn a regular enemy ship at the right edge.
pub fn spawn_enemy_ship(session: &mut Session, rng: &mut ChaCha8Rng) -> EntityId {
    let pos = Vec2::new(
        session.viewport.width,
        random_y(rng, session.viewport.height, SHIP_HEIGHT),
    );
    let direction = random_sign(rng);
    let id = session.next_enemy_id();
    session.enemies.push(Enemy {
        id,
        pos,
        size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
        hp: SHIP_HP,
        body: EnemyBody::Ship(Ship {
            boss: false,
            speed: SHIP_SPEED,
            direction,
            fire_interval_ms: SHIP_FIRE_INTERVAL_MS,
            last_fire_ms: 0.0,
        }),
    });
    id
}

/// Spawn the boss at the right edge, vertically centred.
pub fn spawn_boss_ship(session: &mut Session) -> EntityId {
    let pos = Vec2::new(
        session.viewport.width,
        session.viewport.height / 2.0 - BOSS_SIZE / 2.0,
    );
    let id = session.next_enemy_id();
    session.enemies.push(Enemy {
        id,
        pos,
        size: Vec2::splat(BOSS_SIZE),
        hp: BOSS_HP,
        body: EnemyBody::Ship(Ship {
            boss: true,
            speed: BOSS_SPEED,
            direction: 1.0,
            fire_interval_ms: BOSS_FIRE_INTERVAL_MS,
            last_fire_ms: 0.0,
        }),
    });
    tracing::debug!(id = id.0, score = session.score, "boss spawned");
    id
}

/// Spawn a pickup of `kind` at the right edge.
pub fn spawn_pickup(session: &mut Session, rng: &mut ChaCha8Rng, kind: PickupKind, now_ms: f64) {
    let pos = Vec2::new(
        session.viewport.width,
        random_y(rng, session.viewport.height, PICKUP_SIZE),
    );
    place_pickup(session, kind, pos, now_ms);
}

/// Drop a pickup of `kind` at an exact position.
pub fn place_pickup(session: &mut Session, kind: PickupKind, pos: Vec2, now_ms: f64) {
    session.pickups.push(Pickup {
        kind,
        pos,
        size: PICKUP_SIZE,
        speed: PICKUP_SPEED,
        spawned_ms: now_ms,
    });
}

/// Shatter an asteroid into fragments of `class`, cascading down to class 1.
///
/// Works through an explicit queue: every piece becomes a live enemy, and
/// pieces above class 1 also queue their own fragments one class down.
/// Returns the number of pieces spawned.
pub fn spawn_fragments(
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    origin: Vec2,
    parent_motion: &AsteroidMotion,
    class: AsteroidClass,
) -> u32 {
    let mut queue = VecDeque::from([FragmentSeed {
        origin,
        parent_speed: parent_motion.horizontal_speed(),
        parent_dy: parent_motion.vertical_velocity(),
        class,
    }]);
    let mut pieces = 0;

    while let Some(seed) = queue.pop_front() {
        for (slot, offset) in seed.class.fragment_offsets().iter().enumerate() {
            let vel = Vec2::new(
                -(seed.parent_speed + FRAGMENT_EXTRA_SPEED),
                seed.parent_dy + FRAGMENT_JITTER[slot % FRAGMENT_JITTER.len()],
            );
            let pos = Vec2::new(seed.origin.x, seed.origin.y + offset);

            push_asteroid(
                session,
                rng,
                seed.class,
                pos,
                AsteroidMotion::Fragment { vel },
            );
            pieces += 1;

            if let Some(next) = seed.class.smaller() {
                queue.push_back(FragmentSeed {
                    origin: pos,
                    parent_speed: vel.x.abs(),
                    parent_dy: vel.y,
                    class: next,
                });
            }
        }
    }

    pieces
}

/// Scatter `count` background stars over the viewport.
pub fn starfield(rng: &mut ChaCha8Rng, viewport: &Viewport, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            radius: rng.gen_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS),
        })
        .collect()
}

fn push_asteroid(
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    class: AsteroidClass,
    pos: Vec2,
    motion: AsteroidMotion,
) -> EntityId {
    let rotation = rng.gen_range(0.0..TAU);
    let spin = rng.gen_range(ASTEROID_MIN_SPIN..ASTEROID_MAX_SPIN) * random_sign(rng);
    let id = session.next_enemy_id();
    session.enemies.push(Enemy {
        id,
        pos,
        size: Vec2::splat(class.size()),
        hp: class.hp(),
        body: EnemyBody::Asteroid(Asteroid {
            class,
            rotation,
            spin,
            motion,
        }),
    });
    id
}

/// Uniform top edge so that an entity of `size` fits vertically.
fn random_y(rng: &mut ChaCha8Rng, height: f32, size: f32) -> f32 {
    rng.gen::<f32>() * (height - size).max(0.0)
}

fn random_sign(rng: &mut ChaCha8Rng) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
