//! Application state shared between the host thread and the game loop thread.

use std::io::BufRead;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};

use skyfire_core::commands::PlayerCommand;
use skyfire_core::state::FrameSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the loop thread after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// Host-side handle on a running game loop.
///
/// - `command_tx` is `None` before the loop is started.
/// - `latest_snapshot` is shared with the loop thread for polling.
#[derive(Default)]
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: SharedSnapshot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the sender of a freshly spawned loop.
    pub fn attach(&self, tx: mpsc::Sender<GameLoopCommand>) -> Result<()> {
        let mut lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command sender lock poisoned: {e}"))?;
        if lock.is_some() {
            return Err(anyhow!("game loop already running"));
        }
        *lock = Some(tx);
        Ok(())
    }

    /// Forward a player command to the loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<()> {
        self.send(GameLoopCommand::Player(command))
    }

    /// Ask the loop to stop and forget its sender.
    pub fn shutdown(&self) -> Result<()> {
        let result = self.send(GameLoopCommand::Shutdown);
        if let Ok(mut lock) = self.command_tx.lock() {
            *lock = None;
        }
        result
    }

    /// Forward JSON-encoded player commands, one per line, until the input
    /// ends or the loop stops listening. Returns how many were delivered.
    ///
    /// Blank lines are skipped and malformed ones are logged and dropped.
    pub fn forward_commands(&self, input: impl BufRead) -> Result<usize> {
        let mut delivered = 0;
        for line in input.lines() {
            let line = line.context("reading command input")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let command: PlayerCommand = match serde_json::from_str(line) {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!(error = %e, line, "skipping malformed command");
                    continue;
                }
            };
            if let Err(e) = self.send_command(command) {
                tracing::info!(error = %e, "game loop stopped listening");
                return Ok(delivered);
            }
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<FrameSnapshot>> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|e| anyhow!("snapshot lock poisoned: {e}"))?;
        Ok(lock.clone())
    }

    fn send(&self, command: GameLoopCommand) -> Result<()> {
        let lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command sender lock poisoned: {e}"))?;
        match lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => Err(anyhow!("game loop not started")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.snapshot().unwrap().is_none());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(state.send_command(PlayerCommand::TogglePause).is_err());
    }

    #[test]
    fn test_attach_forwards_commands() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach(tx.clone()).unwrap();
        assert!(state.attach(tx).is_err(), "Only one loop may be attached");

        state.send_command(PlayerCommand::FireSpecial).unwrap();
        state.shutdown().unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            GameLoopCommand::Player(PlayerCommand::FireSpecial)
        );
        assert_eq!(rx.try_recv().unwrap(), GameLoopCommand::Shutdown);
        assert!(state.send_command(PlayerCommand::Restart).is_err());
    }

    #[test]
    fn test_forward_commands_from_json_lines() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach(tx).unwrap();

        let input = "{\"type\":\"TogglePause\"}\n\nnot json\n{\"type\":\"PointerMoved\",\"x\":10.0,\"y\":20.0}\n";
        let delivered = state.forward_commands(input.as_bytes()).unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(
            rx.try_recv().unwrap(),
            GameLoopCommand::Player(PlayerCommand::TogglePause)
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            GameLoopCommand::Player(PlayerCommand::PointerMoved { x: 10.0, y: 20.0 })
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_forward_commands_stops_when_loop_gone() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach(tx).unwrap();
        drop(rx);

        let input = "{\"type\":\"FireSpecial\"}\n{\"type\":\"Restart\"}\n";
        assert_eq!(state.forward_commands(input.as_bytes()).unwrap(), 0);
    }
}
