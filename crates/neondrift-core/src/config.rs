//! Runtime tuning config.
//!
//! Every locomotion and streaming tunable, overridable from a JSON file.
//! Defaults come from [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tuning parameters for one simulation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimTuning {
    // Planar movement
    pub forward_speed: f64,
    pub strafe_speed: f64,

    // Hovering
    pub hover_height: f64,
    pub hover_force: f64,
    pub hover_damping: f64,
    pub fall_multiplier: f64,

    // Fast fall
    pub fast_fall_force: f64,
    pub max_fall_speed: f64,

    // Banking
    pub max_bank_angle: f64,
    pub bank_smoothing: f64,

    // Ground detection
    pub ground_check_distance: f64,

    // Bouncing
    pub bounce_velocity: f64,
    pub min_bounce_velocity: f64,
    pub bounce_cooldown_secs: f64,

    // Track streaming
    pub max_active_segments: usize,
    pub segment_spacing: f64,
    pub delete_margin: f64,
    pub initial_segments: usize,

    // World
    pub gravity_y: f64,
    pub kill_plane_y: f64,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            forward_speed: FORWARD_SPEED,
            strafe_speed: STRAFE_SPEED,
            hover_height: HOVER_HEIGHT,
            hover_force: HOVER_FORCE,
            hover_damping: HOVER_DAMPING,
            fall_multiplier: FALL_MULTIPLIER,
            fast_fall_force: FAST_FALL_FORCE,
            max_fall_speed: MAX_FALL_SPEED,
            max_bank_angle: MAX_BANK_ANGLE,
            bank_smoothing: BANK_SMOOTHING,
            ground_check_distance: GROUND_CHECK_DISTANCE,
            bounce_velocity: BOUNCE_VELOCITY,
            min_bounce_velocity: MIN_BOUNCE_VELOCITY,
            bounce_cooldown_secs: BOUNCE_COOLDOWN_SECS,
            max_active_segments: MAX_ACTIVE_SEGMENTS,
            segment_spacing: SEGMENT_SPACING,
            delete_margin: DELETE_MARGIN,
            initial_segments: INITIAL_SEGMENTS,
            gravity_y: GRAVITY_Y,
            kill_plane_y: KILL_PLANE_Y,
        }
    }
}

/// Errors from loading a tuning file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SimTuning {
    /// Load tuning from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
