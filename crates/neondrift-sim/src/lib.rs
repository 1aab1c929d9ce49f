//! Simulation engine for the NEONDRIFT runner.
//!
//! Owns the hecs world, the craft locomotion systems, and the track
//! streamer. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod streamer;
pub mod systems;
pub mod world_setup;
