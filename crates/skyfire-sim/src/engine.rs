//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the session, processes player commands, runs all
//! systems, and produces `FrameSnapshot`s. Completely headless (no window or
//! canvas dependency), enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyfire_core::commands::PlayerCommand;
use skyfire_core::config::GameConfig;
use skyfire_core::entities::Star;
use skyfire_core::enums::GamePhase;
use skyfire_core::render::{RenderSink, UiSink};
use skyfire_core::state::FrameSnapshot;
use skyfire_core::types::{SimTime, Viewport};

use crate::session::Session;
use crate::systems;
use crate::systems::player;
use crate::world_setup;

/// The simulation engine. Owns the session and all sim state.
pub struct SimulationEngine {
    session: Session,
    time: SimTime,
    rng: ChaCha8Rng,
    stars: Vec<Star>,
    star_count: usize,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// The config is expected to be validated already; the session starts in
    /// `Playing`.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let session = Session::new(&config);
        let stars = world_setup::starfield(&mut rng, &session.viewport, config.star_count);
        tracing::info!(
            seed = config.seed,
            width = session.viewport.width,
            height = session.viewport.height,
            "simulation created"
        );
        Self {
            session,
            time: SimTime::default(),
            rng,
            stars,
            star_count: config.star_count,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Commands are always processed; the systems only run while `Playing`.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.session.is_playing() {
            self.time.advance();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.session.events);
        systems::snapshot::build_snapshot(&self.session, &self.time, events)
    }

    /// Issue the draw calls for the current state.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        systems::render::run(&self.session, &self.stars, sink);
    }

    /// Push the current HUD values to a UI sink.
    pub fn publish_hud(&self, ui: &mut dyn UiSink) {
        systems::snapshot::publish_hud(&systems::snapshot::build_hud(&self.session), ui);
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Background stars, regenerated on resize.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Mutable session access for staging test scenarios.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Mutable clock access for staging test scenarios.
    #[cfg(test)]
    pub fn time_mut(&mut self) -> &mut SimTime {
        &mut self.time
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PointerMoved { x, y } => {
                player::follow_pointer(&mut self.session, x, y);
            }
            PlayerCommand::FireSpecial => {
                player::fire_special(&mut self.session);
            }
            PlayerCommand::TogglePause => {
                player::toggle_pause(&mut self.session);
            }
            PlayerCommand::Restart => {
                self.session.reset();
                self.time = SimTime::default();
                tracing::info!("session restarted");
            }
            PlayerCommand::ResizeViewport { width, height } => {
                if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
                    tracing::warn!(width, height, "ignoring invalid viewport size");
                    return;
                }
                self.session.viewport = Viewport::new(width, height);
                self.stars =
                    world_setup::starfield(&mut self.rng, &self.session.viewport, self.star_count);
                tracing::debug!(width, height, "viewport resized");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.elapsed_ms;
        // 1. Spawning
        systems::spawner::run(&mut self.session, &mut self.rng, now_ms);
        // 2. Player auto-fire
        systems::fire_control::run(&mut self.session, now_ms);
        // 3. Movement and enemy fire
        systems::movement::run(&mut self.session, now_ms);
        // 4. Collisions, scoring, life loss
        systems::collision::run(&mut self.session, &mut self.rng, now_ms);
        // 5. Cleanup (off-screen, expired rings)
        systems::cleanup::run(&mut self.session);
    }
}
