//! Player commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session lifecycle ---
    /// Begin a run from the menu or after a game over.
    StartRun,
    /// Tear down the current run and begin a fresh one.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,

    // --- Input ---
    /// Set the steering deflection. Clamped to [-1, 1] and latched until
    /// the next SetSteering.
    SetSteering { value: f64 },

    // --- Simulation control ---
    /// Set loop time scale (1.0 = normal). Affects cadence only, never dt.
    SetTimeScale { scale: f64 },
}
