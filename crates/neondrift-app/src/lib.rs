//! NEONDRIFT headless runner.
//!
//! This crate wires the simulation crates into a fixed-rate game loop thread
//! and exposes it behind a small CLI binary.

pub mod game_loop;
pub mod state;

pub use neondrift_core as core;
