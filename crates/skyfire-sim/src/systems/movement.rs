//! Per-frame kinematics.
//!
//! Advances bullets, pickups and rings, moves and spins enemies, and lets
//! ships fire when their interval has elapsed. Positions step by one frame's
//! worth of velocity; there is no `dt` scaling.

use glam::Vec2;

use skyfire_core::constants::*;
use skyfire_core::entities::*;
use skyfire_core::types::Viewport;

use crate::guidance;
use crate::session::Session;

/// Advance every live entity by one frame.
pub fn run(session: &mut Session, now_ms: f64) {
    for bullet in &mut session.player.bullets {
        bullet.pos += bullet.vel;
    }
    for bullet in &mut session.enemy_bullets {
        bullet.pos += bullet.vel;
    }
    for pickup in &mut session.pickups {
        pickup.pos.x -= pickup.speed;
    }
    for ring in &mut session.rings {
        ring.radius += ring.speed;
    }

    let viewport = session.viewport;
    let target = session.player.center();
    for enemy in &mut session.enemies {
        match &mut enemy.body {
            EnemyBody::Asteroid(asteroid) => {
                move_asteroid(&mut enemy.pos, enemy.size, asteroid, &viewport);
            }
            EnemyBody::Ship(ship) => {
                move_ship(&mut enemy.pos, enemy.size, ship, &viewport);
                if now_ms - ship.last_fire_ms > ship.fire_interval_ms {
                    ship.last_fire_ms = now_ms;
                    let muzzle = enemy.pos + enemy.size / 2.0;
                    fire(&mut session.enemy_bullets, ship.boss, muzzle, target);
                }
            }
        }
    }
}

fn move_asteroid(pos: &mut Vec2, size: Vec2, asteroid: &mut Asteroid, viewport: &Viewport) {
    match &mut asteroid.motion {
        AsteroidMotion::Linear { speed } => pos.x -= *speed,
        AsteroidMotion::Diagonal { speed, dy } => {
            pos.x -= *speed;
            pos.y += *dy;
            if pos.y < 0.0 || pos.y + size.y > viewport.height {
                *dy = -*dy;
            }
        }
        AsteroidMotion::Fragment { vel } => *pos += *vel,
    }
    asteroid.rotation += asteroid.spin;
}

fn move_ship(pos: &mut Vec2, size: Vec2, ship: &mut Ship, viewport: &Viewport) {
    // The boss stops short of the right edge and holds there.
    if !ship.boss || pos.x > viewport.width - size.x - BOSS_STANDOFF {
        pos.x -= ship.speed;
    }
    pos.y += ship.direction * ship.speed;
    if pos.y <= 0.0 || pos.y + size.y >= viewport.height {
        ship.direction = -ship.direction;
    }
}

fn fire(bullets: &mut Vec<EnemyBullet>, boss: bool, muzzle: Vec2, target: Vec2) {
    if boss {
        bullets.extend(
            guidance::radial_volley(BOSS_VOLLEY_COUNT, BOSS_BULLET_SPEED)
                .map(|vel| EnemyBullet { pos: muzzle, vel }),
        );
    } else {
        bullets.push(EnemyBullet {
            pos: muzzle,
            vel: guidance::aim(muzzle, target, SHIP_BULLET_SPEED),
        });
    }
}

/// Sprite rotation for a regular ship: its heading `atan2(dir * speed, -speed)`.
pub fn ship_heading(ship: &Ship) -> f32 {
    guidance::heading(Vec2::new(-ship.speed, ship.direction * ship.speed))
}
