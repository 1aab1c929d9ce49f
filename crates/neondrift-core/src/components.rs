//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::PropKind;

/// Marks the single player-controlled craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Craft;

/// Marks an entity as one streamed track segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment;

/// Rigid-body state consumed by the integrator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigidBody {
    /// Mass in kg.
    pub mass: f64,
    /// Force accumulator, cleared by the integrator each step.
    pub force: DVec3,
    /// Pitch and yaw frozen; only banking rotates the craft.
    pub freeze_pitch_yaw: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            mass: crate::constants::CRAFT_MASS,
            force: DVec3::ZERO,
            freeze_pitch_yaw: true,
        }
    }
}

/// Axis-aligned collider half extents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColliderExtents {
    pub half: DVec3,
}

/// Local offset from the craft origin to the ground-probe ray origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProbeAnchor {
    pub offset: DVec3,
}

/// Per-step hover/bounce state of the craft.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HoverState {
    /// True when the ground probe hit within range this step.
    pub grounded: bool,
    /// Measured distance to ground on a probe hit.
    pub ground_distance: Option<f64>,
    /// Current smoothed bank angle (radians).
    pub bank_angle: f64,
    /// Hover suppression window after a bounce.
    pub bounce_cooldown: bool,
    /// Time accumulated inside the cooldown window (seconds).
    pub cooldown_elapsed: f64,
}

/// Identity and streaming state of a segment.
///
/// `origin_z` is the spawn-time coordinate of the near edge; the far end is
/// `origin_z + length`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentInfo {
    /// Unique id assigned by the streamer at spawn.
    pub id: u32,
    pub origin_z: f64,
    pub length: f64,
    pub half_width: f64,
    /// Index into the template catalog this segment was built from.
    pub template: usize,
    /// One-shot guard: set the first time the spawn-next trigger fires.
    pub successor_requested: bool,
}

/// A pickup or obstacle sitting on a segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prop {
    pub kind: PropKind,
    /// Score value for gems; unused for obstacles.
    pub value: u32,
    /// Trigger radius (m).
    pub radius: f64,
    /// One-shot trigger guard.
    pub triggered: bool,
    /// Id of the owning segment. Props never outlive their segment.
    pub segment_id: u32,
}
