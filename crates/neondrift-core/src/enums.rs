//! Shared enumerations.

use serde::{Deserialize, Serialize};

/// Session phase. Locomotion and streaming only advance while `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first run is started.
    #[default]
    Menu,
    /// Simulation advancing.
    Active,
    /// Externally paused; craft state frozen.
    Paused,
    /// Run ended (obstacle hit or craft fell).
    GameOver,
}

impl GamePhase {
    /// The session-halt signal: true when the craft must not advance.
    pub fn is_halted(&self) -> bool {
        !matches!(self, GamePhase::Active)
    }
}

/// Collision/raycast category. The ground probe and bounce logic only react
/// to `Ground`; props use trigger overlap instead of contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactCategory {
    Ground,
    Prop,
}

/// Kind of prop scattered on a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    /// Ends the run on contact.
    Obstacle,
    /// Collectible worth `value` points to whoever keeps score.
    Gem,
}
