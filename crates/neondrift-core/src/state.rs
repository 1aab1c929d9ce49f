//! Run state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, PropKind};
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete simulation state handed to observers after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub craft: CraftView,
    pub segments: Vec<SegmentView>,
    pub props: Vec<PropView>,
    /// Events raised during this tick, in order.
    pub events: Vec<SimEvent>,
    /// Live segment count after housekeeping.
    pub active_segments: usize,
}

/// Craft pose and telemetry, consumed by camera-follow and debug overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftView {
    pub position: Position,
    pub velocity: Velocity,
    /// Current bank (roll) angle in radians.
    pub bank_angle: f64,
    pub grounded: bool,
    /// Vertical velocity component (m/s, positive up).
    pub vertical_speed: f64,
    /// Probe distance to ground on a hit.
    pub ground_distance: Option<f64>,
    /// True while hover is suppressed after a bounce.
    pub bounce_cooldown: bool,
}

/// One live segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentView {
    pub id: u32,
    pub origin_z: f64,
    pub length: f64,
    pub template: usize,
    pub successor_requested: bool,
}

/// One live prop, for off-track trigger visuals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropView {
    pub kind: PropKind,
    pub position: Position,
    pub triggered: bool,
}
