//! Entity data for the session: plain structs and sum types.
//!
//! Behavior lives in the simulation systems; the methods here only derive
//! geometry and scoring facts from the stored fields.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AsteroidClass, EnemyKind, PickupKind};
use crate::types::Rect;

/// Session-unique enemy handle. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// The player's ship. Created once and reset in place on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    /// Fire pattern selector, 0..=6.
    pub power_stage: u8,
    /// Banked special-ring charges, 0..=3.
    pub special_count: u8,
    pub bullets: Vec<PlayerBullet>,
}

/// A bullet fired by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Special bullets deal double damage.
    pub special: bool,
}

/// A hostile entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    /// Top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub body: EnemyBody,
}

/// Variant-specific enemy state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnemyBody {
    Asteroid(Asteroid),
    Ship(Ship),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub class: AsteroidClass,
    /// Current rotation (radians).
    pub rotation: f32,
    /// Rotation added each frame (radians).
    pub spin: f32,
    pub motion: AsteroidMotion,
}

/// How an asteroid travels across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AsteroidMotion {
    /// Straight leftward.
    Linear { speed: f32 },
    /// Leftward while bouncing between the top and bottom edges.
    Diagonal { speed: f32, dy: f32 },
    /// Free flight along an explicit velocity, inherited from a shattered parent.
    Fragment { vel: Vec2 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub boss: bool,
    pub speed: f32,
    /// Vertical heading, -1.0 (up) or +1.0 (down).
    pub direction: f32,
    pub fire_interval_ms: f64,
    pub last_fire_ms: f64,
}

/// A bullet fired by an enemy ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A collectible drifting leftward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Top-left corner.
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Sim time it appeared; not collectible during that frame.
    pub spawned_ms: f64,
}

/// Expanding ring cast by the special weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialRing {
    pub origin: Vec2,
    pub radius: f32,
    pub thickness: f32,
    pub speed: f32,
    /// Enemies already damaged by this ring.
    pub hit: HashSet<EntityId>,
}

/// Background star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Muzzle point: right edge, vertical middle.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x, self.pos.y + self.size.y / 2.0)
    }
}

impl PlayerBullet {
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            PLAYER_BULLET_WIDTH,
            PLAYER_BULLET_HEIGHT,
        )
    }

    pub fn damage(&self) -> i32 {
        if self.special {
            SPECIAL_BULLET_DAMAGE
        } else {
            BULLET_DAMAGE
        }
    }
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn kind(&self) -> EnemyKind {
        match &self.body {
            EnemyBody::Asteroid(asteroid) => EnemyKind::Asteroid(asteroid.class),
            EnemyBody::Ship(ship) if ship.boss => EnemyKind::Boss,
            EnemyBody::Ship(_) => EnemyKind::Ship,
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(&self.body, EnemyBody::Ship(ship) if ship.boss)
    }

    pub fn is_ship(&self) -> bool {
        matches!(self.body, EnemyBody::Ship(_))
    }
}

impl AsteroidMotion {
    /// Leftward speed handed down to fragments.
    pub fn horizontal_speed(&self) -> f32 {
        match *self {
            Self::Linear { speed } | Self::Diagonal { speed, .. } => speed,
            Self::Fragment { vel } => vel.x.abs(),
        }
    }

    /// Vertical velocity handed down to fragments.
    pub fn vertical_velocity(&self) -> f32 {
        match *self {
            Self::Linear { .. } => 0.0,
            Self::Diagonal { dy, .. } => dy,
            Self::Fragment { vel } => vel.y,
        }
    }
}

impl EnemyBullet {
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            ENEMY_BULLET_WIDTH,
            ENEMY_BULLET_HEIGHT,
        )
    }
}

impl Pickup {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

impl SpecialRing {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
            thickness: RING_THICKNESS,
            speed: RING_EXPANSION_SPEED,
            hit: HashSet::new(),
        }
    }

    /// Whether `point` lies inside the ring's damage band.
    pub fn band_contains(&self, point: Vec2) -> bool {
        let distance = point.distance(self.origin);
        distance >= self.radius - self.thickness && distance <= self.radius + self.thickness
    }
}
