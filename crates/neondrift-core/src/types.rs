//! Fundamental geometric and simulation types.
//!
//! Coordinate frame: x = lateral (right positive), y = up, z = forward
//! along the track axis. The craft's forward progress is its z coordinate.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// World position in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Linear velocity in m/s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Orientation as Euler angles in radians. Yaw and pitch belong to the
/// physics integrator; roll is owned by the banking logic and layered on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Forward coordinate along the track axis.
    pub fn track_coord(&self) -> f64 {
        self.0.z
    }

    /// Height above a horizontal surface at `surface_y`.
    pub fn height_above(&self, surface_y: f64) -> f64 {
        self.0.y - surface_y
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }

    /// Vertical component (m/s, positive up).
    pub fn vertical(&self) -> f64 {
        self.0.y
    }
}

impl Orientation {
    /// Rotation quaternion, yaw applied first, roll last.
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
