//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Score changed; the scoreboard needs a refresh.
    ScoreChanged { score: u32 },
    /// An enemy was destroyed and points were awarded.
    EnemyDestroyed {
        kind: EnemyKind,
        source: KillSource,
        points: u32,
    },
    /// An asteroid shattered; `pieces` counts every fragment of the cascade.
    AsteroidShattered { class: AsteroidClass, pieces: u32 },
    /// The player lost a life.
    LifeLost { lives: u32, power_stage: u8 },
    /// The player picked something up.
    PickupCollected { kind: PickupKind },
    /// A boss entered the field.
    BossSpawned,
    /// A special ring was cast from `origin`.
    SpecialFired { origin: Vec2, remaining: u8 },
    /// The session ended.
    GameOver { final_score: u32 },
}
