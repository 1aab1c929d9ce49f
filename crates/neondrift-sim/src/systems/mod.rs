//! Simulation systems, run in fixed order each tick by the engine.

pub mod bounce;
pub mod cleanup;
pub mod kinematics;
pub mod locomotion;
pub mod props;
pub mod snapshot;
pub mod streaming;

use hecs::World;
use neondrift_core::components::SegmentInfo;
use neondrift_physics::SurfaceStrip;

/// Collect the walkable surface strips of every live segment, consumed by
/// the ground probe and the contact resolver this tick.
pub fn collect_surface_strips(world: &World) -> Vec<SurfaceStrip> {
    world
        .query::<&SegmentInfo>()
        .iter()
        .map(|(_, info)| SurfaceStrip::from_segment(info))
        .collect()
}
