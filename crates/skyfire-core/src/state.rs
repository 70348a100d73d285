//! Frame snapshot: the visible state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_LIVES, POWER_STAGE_MAX, SPECIAL_MAX};
use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{SimTime, Viewport};

/// Complete session state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub hud: HudView,
    /// Player top-left corner.
    pub player_pos: Vec2,
    pub counts: EntityCounts,
    pub events: Vec<GameEvent>,
}

/// Values shown by the UI sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    pub power_stage: u8,
    pub special_count: u8,
    /// Final score once the session is over.
    pub game_over: Option<u32>,
}

/// Live entity totals, mostly for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub asteroids: u32,
    pub ships: u32,
    pub bosses: u32,
    pub player_bullets: u32,
    pub enemy_bullets: u32,
    pub pickups: u32,
    pub rings: u32,
}

impl HudView {
    /// Hearts to draw; never more than the life cap.
    pub fn hearts(&self) -> u32 {
        self.lives.min(MAX_LIVES)
    }

    /// Power bar, one filled segment per stage.
    pub fn power_segments(&self) -> [bool; POWER_STAGE_MAX as usize] {
        std::array::from_fn(|i| i < usize::from(self.power_stage))
    }

    /// Special bar, one filled segment per banked charge.
    pub fn special_segments(&self) -> [bool; SPECIAL_MAX as usize] {
        std::array::from_fn(|i| i < usize::from(self.special_count))
    }
}

impl EntityCounts {
    pub fn enemies(&self) -> u32 {
        self.asteroids + self.ships + self.bosses
    }
}
