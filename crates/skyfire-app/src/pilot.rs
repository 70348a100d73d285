//! Scripted input source standing in for mouse and keyboard.

use skyfire_core::commands::PlayerCommand;
use skyfire_core::enums::GamePhase;
use skyfire_core::state::FrameSnapshot;

/// Supplies player commands for the next tick, given the last snapshot.
pub trait InputSource {
    fn poll(&mut self, snapshot: &FrameSnapshot) -> Vec<PlayerCommand>;
}

/// Weaves the ship up and down the left side of the canvas.
///
/// Casts a ring whenever a boss is on the field or the screen gets crowded,
/// and restarts after a game over while it has restarts left.
#[derive(Debug, Clone)]
pub struct Pilot {
    restarts_left: u32,
    crowd_threshold: u32,
}

impl Pilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
            crowd_threshold: 8,
        }
    }

    /// Pointer position for a tick: a slow Lissajous sweep.
    fn pointer(snapshot: &FrameSnapshot) -> (f32, f32) {
        let t = snapshot.time.tick as f32;
        let half_height = snapshot.viewport.height / 2.0;
        let x = 120.0 + 60.0 * (t * 0.013).sin();
        let y = half_height + (half_height - 40.0).max(0.0) * (t * 0.021).sin();
        (x, y)
    }
}

impl InputSource for Pilot {
    fn poll(&mut self, snapshot: &FrameSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::GameOver if self.restarts_left > 0 => {
                self.restarts_left -= 1;
                vec![PlayerCommand::Restart]
            }
            GamePhase::Playing => {
                let (x, y) = Self::pointer(snapshot);
                let mut commands = vec![PlayerCommand::PointerMoved { x, y }];
                let threatened = snapshot.counts.bosses > 0
                    || snapshot.counts.enemies() >= self.crowd_threshold;
                if threatened && snapshot.hud.special_count > 0 {
                    commands.push(PlayerCommand::FireSpecial);
                }
                commands
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use skyfire_core::state::{EntityCounts, HudView};

    use super::*;

    #[test]
    fn test_pilot_restarts_limited_times() {
        let mut pilot = Pilot::new(1);
        let over = FrameSnapshot {
            phase: GamePhase::GameOver,
            ..Default::default()
        };
        assert_eq!(pilot.poll(&over), vec![PlayerCommand::Restart]);
        assert!(pilot.poll(&over).is_empty());
    }

    #[test]
    fn test_pilot_fires_special_at_boss() {
        let mut pilot = Pilot::new(0);
        let snapshot = FrameSnapshot {
            hud: HudView {
                special_count: 1,
                ..Default::default()
            },
            counts: EntityCounts {
                bosses: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let commands = pilot.poll(&snapshot);
        assert!(matches!(commands[0], PlayerCommand::PointerMoved { .. }));
        assert_eq!(commands[1], PlayerCommand::FireSpecial);
    }

    #[test]
    fn test_pilot_stays_on_canvas() {
        let mut pilot = Pilot::new(0);
        for tick in 0..2000 {
            let mut snapshot = FrameSnapshot::default();
            snapshot.time.tick = tick;
            let commands = pilot.poll(&snapshot);
            let PlayerCommand::PointerMoved { x, y } = commands[0] else {
                panic!("pointer command expected");
            };
            assert!(x >= 0.0 && x <= snapshot.viewport.width);
            assert!(y >= 0.0 && y <= snapshot.viewport.height);
        }
    }
}
