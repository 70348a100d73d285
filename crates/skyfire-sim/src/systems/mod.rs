//! Systems that operate on the session each tick.
//!
//! Systems are plain functions that take `&mut Session` (or `&Session` for
//! read-only passes). They own no state; everything lives in the session.

pub mod cleanup;
pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod player;
pub mod render;
pub mod snapshot;
pub mod spawner;
