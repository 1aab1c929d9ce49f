//! Snapshot assembly — the complete visible state for observers each tick.

use hecs::World;

use neondrift_core::components::{Craft, HoverState, Prop, SegmentInfo};
use neondrift_core::enums::GamePhase;
use neondrift_core::events::SimEvent;
use neondrift_core::state::{CraftView, PropView, RunSnapshot, SegmentView};
use neondrift_core::types::{Position, SimTime, Velocity};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
) -> RunSnapshot {
    let mut craft = CraftView::default();
    for (_entity, (_marker, pos, vel, hover)) in world
        .query::<(&Craft, &Position, &Velocity, &HoverState)>()
        .iter()
    {
        craft = CraftView {
            position: *pos,
            velocity: *vel,
            bank_angle: hover.bank_angle,
            grounded: hover.grounded,
            vertical_speed: vel.vertical(),
            ground_distance: hover.ground_distance,
            bounce_cooldown: hover.bounce_cooldown,
        };
    }

    let mut segments: Vec<SegmentView> = world
        .query::<&SegmentInfo>()
        .iter()
        .map(|(_, info)| SegmentView {
            id: info.id,
            origin_z: info.origin_z,
            length: info.length,
            template: info.template,
            successor_requested: info.successor_requested,
        })
        .collect();
    segments.sort_by(|a, b| a.id.cmp(&b.id));

    let mut props: Vec<PropView> = world
        .query::<(&Prop, &Position)>()
        .iter()
        .map(|(_, (prop, pos))| PropView {
            kind: prop.kind,
            position: *pos,
            triggered: prop.triggered,
        })
        .collect();
    props.sort_by(|a, b| {
        a.position
            .track_coord()
            .partial_cmp(&b.position.track_coord())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let active_segments = segments.len();

    RunSnapshot {
        time: *time,
        phase,
        craft,
        segments,
        props,
        events,
        active_segments,
    }
}
