//! Events emitted by the simulation for external consumers
//! (audio, score, camera shake, UI). The core only emits; it never
//! waits on a consumer.

use serde::{Deserialize, Serialize};

/// Discrete events raised during a tick, delivered with that tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new segment was instantiated.
    SegmentSpawned { id: u32, origin_z: f64, template: usize },
    /// A segment retired itself after the craft passed it.
    SegmentRetired { id: u32, origin_z: f64 },
    /// Qualifying ground impact converted into a bounce.
    CraftBounced { impact_speed: f64 },
    /// The craft hit an obstacle; the run is over.
    ObstacleHit,
    /// The craft collected a gem.
    GemCollected { value: u32 },
    /// The craft fell below the kill plane; the run is over.
    CraftFell,
}
