//! State shared between the main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use neondrift_core::commands::PlayerCommand;
use neondrift_core::state::RunSnapshot;

/// Commands sent from the main thread to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop thread after each tick and
/// polled synchronously by the main thread.
pub type SharedSnapshot = Arc<Mutex<Option<RunSnapshot>>>;
