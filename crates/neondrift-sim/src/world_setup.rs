//! Craft setup — explicit fallible initialization.
//!
//! A missing body, collider, or probe anchor is a recoverable setup defect:
//! a safe default is substituted and the substitution is reported, never
//! interleaved with the simulation loop.

use glam::DVec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use neondrift_core::components::{ColliderExtents, Craft, HoverState, ProbeAnchor, RigidBody};
use neondrift_core::constants::{CRAFT_HALF_EXTENTS, CRAFT_MASS, HOVER_HEIGHT, PROBE_ANCHOR_DROP};
use neondrift_core::types::{Orientation, Position, Velocity};

/// What the caller supplies to build a craft. Everything optional is
/// defaulted and the substitution reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftSpec {
    /// Spawn position; defaults to hover height over the track start.
    pub position: Option<Position>,
    pub mass: Option<f64>,
    pub collider_half_extents: Option<[f64; 3]>,
    /// Ground-probe ray origin, relative to the craft origin. Falls back to
    /// a point just below the origin.
    pub probe_anchor: Option<[f64; 3]>,
}

/// Which defaults were substituted during setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupReport {
    pub default_position: bool,
    pub default_body: bool,
    pub default_collider: bool,
    pub default_probe_anchor: bool,
}

impl SetupReport {
    /// Names of every substituted default, for a one-line session-start log.
    pub fn substitutions(&self) -> Vec<&'static str> {
        let mut subs = Vec::new();
        if self.default_position {
            subs.push("position");
        }
        if self.default_body {
            subs.push("body");
        }
        if self.default_collider {
            subs.push("collider");
        }
        if self.default_probe_anchor {
            subs.push("probe-anchor");
        }
        subs
    }

    pub fn is_clean(&self) -> bool {
        self.substitutions().is_empty()
    }
}

/// Spawn the craft, substituting defaults for anything the spec omits.
/// Runs once before the simulation loop starts.
pub fn spawn_craft(world: &mut World, spec: &CraftSpec) -> (Entity, SetupReport) {
    let mut report = SetupReport::default();

    let position = spec.position.unwrap_or_else(|| {
        report.default_position = true;
        Position::new(0.0, HOVER_HEIGHT, 0.0)
    });

    let mass = spec.mass.unwrap_or_else(|| {
        report.default_body = true;
        CRAFT_MASS
    });

    let half = spec.collider_half_extents.unwrap_or_else(|| {
        report.default_collider = true;
        CRAFT_HALF_EXTENTS
    });

    let anchor = spec.probe_anchor.unwrap_or_else(|| {
        report.default_probe_anchor = true;
        [0.0, -PROBE_ANCHOR_DROP, 0.0]
    });

    let entity = world.spawn((
        Craft,
        position,
        Velocity::default(),
        Orientation::default(),
        RigidBody {
            mass,
            force: DVec3::ZERO,
            freeze_pitch_yaw: true,
        },
        ColliderExtents {
            half: DVec3::from_array(half),
        },
        ProbeAnchor {
            offset: DVec3::from_array(anchor),
        },
        HoverState::default(),
    ));

    (entity, report)
}
