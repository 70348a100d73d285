//! SKYFIRE headless host.
//!
//! Wires the simulation to a fixed-rate loop thread, a scripted input
//! source, and logging render/UI sinks.

pub mod game_loop;
pub mod pilot;
pub mod sinks;
pub mod state;

pub use skyfire_core as core;
