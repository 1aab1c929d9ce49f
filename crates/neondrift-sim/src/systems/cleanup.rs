//! End-of-tick housekeeping: the kill plane and orphaned props.

use hecs::Entity;

use neondrift_core::components::{Craft, Prop, SegmentInfo};
use neondrift_core::config::SimTuning;
use neondrift_core::events::SimEvent;
use neondrift_core::types::Position;

/// Emits `CraftFell` once the craft drops below the kill plane.
pub fn run(world: &mut hecs::World, tuning: &SimTuning, events: &mut Vec<SimEvent>) {
    for (_entity, (_craft, pos)) in world.query_mut::<(&Craft, &Position)>() {
        if pos.0.y < tuning.kill_plane_y {
            events.push(SimEvent::CraftFell);
        }
    }
}

/// Despawn props whose owning segment is gone. Normally segments take their
/// props with them; this tolerates any that slipped through.
pub fn sweep_orphan_props(world: &mut hecs::World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let live: Vec<u32> = world
        .query_mut::<&SegmentInfo>()
        .into_iter()
        .map(|(_, info)| info.id)
        .collect();

    for (entity, prop) in world.query_mut::<&Prop>() {
        if !live.contains(&prop.segment_id) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
