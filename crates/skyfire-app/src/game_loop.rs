//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel and from an optional in-thread input
//! source. Each tick is rendered into a `RenderSink`, the HUD is pushed to a
//! `UiSink`, and the snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyfire_core::commands::PlayerCommand;
use skyfire_core::config::GameConfig;
use skyfire_core::constants::TICK_RATE;
use skyfire_core::enums::GamePhase;
use skyfire_core::state::FrameSnapshot;
use skyfire_sim::SimulationEngine;

use crate::pilot::InputSource;
use crate::sinks::{CountingRenderSink, LogUiSink};
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop is paced and when it stops.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many ticks.
    pub max_frames: u64,
    /// Sleep between ticks to hold the nominal rate; otherwise run flat out.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_frames: u64::from(TICK_RATE) * 60,
            realtime: false,
        }
    }
}

/// What the loop did before it stopped.
#[derive(Debug, Clone, Default)]
pub struct LoopSummary {
    pub frames: u64,
    pub games_finished: u32,
    pub best_score: u32,
    pub peak_draw_calls: u32,
    pub last_snapshot: Option<FrameSnapshot>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the loop summary.
pub fn spawn_game_loop(
    config: GameConfig,
    options: LoopOptions,
    input: Option<Box<dyn InputSource + Send>>,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyfire-game-loop".into())
        .spawn(move || run_game_loop(config, options, input, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// Outcome of draining the command channel.
enum Drain {
    Continue,
    Shutdown,
}

/// The game loop. Runs until Shutdown, the frame budget is spent, or the
/// session is over with no way left to restart it.
pub fn run_game_loop(
    config: GameConfig,
    options: LoopOptions,
    mut input: Option<Box<dyn InputSource + Send>>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> LoopSummary {
    let mut engine = SimulationEngine::new(config);
    let mut render_sink = CountingRenderSink::new();
    let mut ui_sink = LogUiSink::new();
    let mut summary = LoopSummary::default();
    let mut detached = false;
    let mut last_phase = GamePhase::Playing;
    let mut next_tick_time = Instant::now();

    while summary.frames < options.max_frames {
        // 1. Drain pending commands without blocking
        if !detached {
            match drain_commands(&cmd_rx, &mut engine, &mut detached) {
                Drain::Continue => {}
                Drain::Shutdown => break,
            }
        }

        // 2. Scripted input sees the previous frame
        let restart_pending = match (&mut input, &summary.last_snapshot) {
            (Some(source), Some(snapshot)) => {
                let commands = source.poll(snapshot);
                let restart = commands
                    .iter()
                    .any(|c| *c == PlayerCommand::Restart);
                engine.queue_commands(commands);
                restart
            }
            _ => false,
        };

        // 3. A finished session waits for a restart from outside
        if engine.phase() == GamePhase::GameOver
            && !restart_pending
            && (detached || !wait_for_restart(&cmd_rx, &mut engine))
        {
            break;
        }

        // 4. Advance one tick, draw it and refresh the HUD
        let snapshot = engine.tick();
        engine.render(&mut render_sink);
        render_sink.finish_frame();
        engine.publish_hud(&mut ui_sink);

        if snapshot.phase == GamePhase::GameOver && last_phase != GamePhase::GameOver {
            summary.games_finished += 1;
        }
        last_phase = snapshot.phase;
        summary.best_score = summary.best_score.max(snapshot.hud.score);
        summary.frames += 1;

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        summary.last_snapshot = Some(snapshot);

        // 6. Sleep until the next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    summary.peak_draw_calls = render_sink.peak().total();
    tracing::info!(
        frames = summary.frames,
        games = summary.games_finished,
        best_score = summary.best_score,
        "game loop stopped"
    );
    summary
}

fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
    detached: &mut bool,
) -> Drain {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return Drain::Shutdown,
            Err(mpsc::TryRecvError::Empty) => return Drain::Continue,
            Err(mpsc::TryRecvError::Disconnected) => {
                // No host left to send commands; keep running on scripted input.
                *detached = true;
                return Drain::Continue;
            }
        }
    }
}

/// Block until a Restart arrives. Other player commands are queued.
/// Returns `false` on Shutdown or disconnect.
fn wait_for_restart(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
) -> bool {
    tracing::info!("waiting for restart");
    while let Ok(command) = cmd_rx.recv() {
        match command {
            GameLoopCommand::Player(cmd) => {
                let restart = cmd == PlayerCommand::Restart;
                engine.queue_command(cmd);
                if restart {
                    return true;
                }
            }
            GameLoopCommand::Shutdown => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::pilot::Pilot;

    fn options(max_frames: u64) -> LoopOptions {
        LoopOptions {
            max_frames,
            realtime: false,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::TogglePause))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::FireSpecial))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::TogglePause)
        );
        assert_eq!(commands[2], GameLoopCommand::Shutdown);
    }

    #[test]
    fn test_loop_runs_frame_budget_detached() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, rx) = mpsc::channel();
        drop(tx);

        let summary = run_game_loop(
            GameConfig::default(),
            options(120),
            Some(Box::new(Pilot::new(0))),
            rx,
            &shared,
        );

        assert!(summary.frames <= 120);
        assert!(summary.peak_draw_calls > 0);
        let latest = shared.lock().unwrap().clone().unwrap();
        assert_eq!(latest.time.tick, summary.frames);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let summary = run_game_loop(GameConfig::default(), options(1000), None, rx, &shared);
        assert_eq!(summary.frames, 0);
        assert!(shared.lock().unwrap().is_none());
    }

    #[test]
    fn test_pause_via_channel_holds_time() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Player(PlayerCommand::TogglePause))
            .unwrap();

        let summary = run_game_loop(GameConfig::default(), options(30), None, rx, &shared);
        let last = summary.last_snapshot.unwrap();
        assert_eq!(summary.frames, 30);
        assert_eq!(last.phase, GamePhase::Paused);
        assert_eq!(last.time.tick, 0);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
