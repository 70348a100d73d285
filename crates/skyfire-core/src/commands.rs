//! Player commands sent from the input source to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pointer moved to canvas coordinates `(x, y)`. The ship follows it.
    PointerMoved { x: f32, y: f32 },
    /// Spend one special charge to cast an expanding ring.
    FireSpecial,
    /// Flip between playing and paused.
    TogglePause,
    /// Reinitialise the whole session and resume play.
    Restart,
    /// The host resized the drawing surface.
    ResizeViewport { width: f32, height: f32 },
}
