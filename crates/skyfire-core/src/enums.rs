//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{ASTEROID_HP_DIVISOR, ASTEROID_SIZES};

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing every frame.
    #[default]
    Playing,
    /// Frozen; only the background is repainted.
    Paused,
    /// Terminal until an explicit restart.
    GameOver,
}

/// Asteroid size class. The class index doubles as the kill score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsteroidClass {
    Small,
    Medium,
    Large,
}

/// Enemy category used for scoring and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Asteroid(AsteroidClass),
    Ship,
    Boss,
}

/// Collectible pickup kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Raises the power stage by one (capped).
    PowerUp,
    /// Banks one special-ring charge (capped).
    Special,
    /// Restores one life (capped).
    HealthRefill,
}

/// What destroyed an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillSource {
    Bullet,
    Ring,
}

/// Logical image names. The host maps these to real image resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetId {
    AsteroidSmall,
    AsteroidMedium,
    AsteroidLarge,
    EnemyShip,
    Boss,
    PowerUp,
    SpecialItem,
    HealthRefill,
    PlayerShip,
}

impl AsteroidClass {
    pub const ALL: [AsteroidClass; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Class index in 1..=3.
    pub fn index(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Small),
            2 => Some(Self::Medium),
            3 => Some(Self::Large),
            _ => None,
        }
    }

    /// Side length in pixels.
    pub fn size(self) -> f32 {
        ASTEROID_SIZES[usize::from(self.index() - 1)]
    }

    /// Starting hit points, `ceil(size / 20)`.
    pub fn hp(self) -> i32 {
        (self.size() / ASTEROID_HP_DIVISOR).ceil() as i32
    }

    /// Next class down, `None` for the smallest class. A bullet shatters
    /// any class that has one.
    pub fn smaller(self) -> Option<Self> {
        Self::from_index(self.index() - 1)
    }

    /// Vertical fragment offsets when pieces of this class are produced.
    pub fn fragment_offsets(self) -> &'static [f32] {
        match self {
            Self::Medium => &[-10.0, 0.0, 10.0],
            Self::Small | Self::Large => &[-10.0, 10.0],
        }
    }

    pub fn asset(self) -> AssetId {
        match self {
            Self::Small => AssetId::AsteroidSmall,
            Self::Medium => AssetId::AsteroidMedium,
            Self::Large => AssetId::AsteroidLarge,
        }
    }
}

impl EnemyKind {
    /// Points awarded for destroying this enemy.
    pub fn score(self) -> u32 {
        match self {
            Self::Asteroid(class) => u32::from(class.index()),
            Self::Ship => crate::constants::SHIP_KILL_SCORE,
            Self::Boss => crate::constants::BOSS_KILL_SCORE,
        }
    }
}

impl PickupKind {
    pub fn asset(self) -> AssetId {
        match self {
            Self::PowerUp => AssetId::PowerUp,
            Self::Special => AssetId::SpecialItem,
            Self::HealthRefill => AssetId::HealthRefill,
        }
    }
}

impl AssetId {
    /// Stable asset name for host-side lookup.
    pub fn name(self) -> &'static str {
        match self {
            Self::AsteroidSmall => "asteroid_small",
            Self::AsteroidMedium => "asteroid_medium",
            Self::AsteroidLarge => "asteroid_large",
            Self::EnemyShip => "enemy_ship",
            Self::Boss => "boss",
            Self::PowerUp => "powerup",
            Self::SpecialItem => "special",
            Self::HealthRefill => "health_refill",
            Self::PlayerShip => "ship",
        }
    }
}
