//! Simulation engine for SKYFIRE.
//!
//! Owns the session state, runs systems at a fixed tick rate,
//! and produces FrameSnapshots for the host.

pub mod engine;
pub mod guidance;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use session::Session;
pub use skyfire_core as core;
