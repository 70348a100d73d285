//! Core types and definitions for the SKYFIRE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, commands, HUD snapshots, events, sink traits, configuration
//! and constants. It has no dependency on any runtime or rendering backend.

pub mod commands;
pub mod config;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod error;
pub mod events;
pub mod render;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
