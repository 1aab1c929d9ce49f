//! Contact detection and resolution between the craft and surface strips.

use glam::DVec3;

use neondrift_core::components::ColliderExtents;
use neondrift_core::enums::ContactCategory;
use neondrift_core::types::{Position, Velocity};

use crate::raycast::SurfaceStrip;

/// A discrete collision record, one per contacting surface per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub category: ContactCategory,
    pub normal: DVec3,
    /// Vertical velocity at the moment of impact, before resolution.
    pub impact_velocity_y: f64,
}

/// Penetration deeper than this is tunneling, not a contact; the body has
/// already fallen past the surface and is left alone.
const MAX_PENETRATION: f64 = 5.0;

/// Detect and resolve the craft's penetration of surface strips.
///
/// Resolution is inelastic: the body is pushed back to the surface and its
/// downward velocity zeroed. The event carries the pre-resolution velocity
/// so the bounce reaction can decide whether the impact qualifies.
pub fn resolve_surface_contacts(
    pos: &mut Position,
    vel: &mut Velocity,
    extents: &ColliderExtents,
    strips: &[SurfaceStrip],
    events: &mut Vec<ContactEvent>,
) {
    let bottom = pos.0.y - extents.half.y;

    // Deepest covering strip wins; one contact event per step.
    let mut best: Option<&SurfaceStrip> = None;
    for strip in strips {
        if !strip.covers(pos.0.x, pos.0.z) {
            continue;
        }
        let penetration = strip.top_y - bottom;
        if penetration <= 0.0 || penetration > MAX_PENETRATION || vel.0.y > 0.0 {
            continue;
        }
        if best.map_or(true, |b| strip.top_y > b.top_y) {
            best = Some(strip);
        }
    }

    if let Some(strip) = best {
        events.push(ContactEvent {
            category: strip.category,
            normal: DVec3::Y,
            impact_velocity_y: vel.0.y,
        });
        pos.0.y = strip.top_y + extents.half.y;
        vel.0.y = 0.0;
    }
}
