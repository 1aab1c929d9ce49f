//! Segment self-management: evaluate every live segment's triggers against
//! the craft's forward coordinate and act on the directives through the
//! streamer in the same tick, so the capacity invariant is enforced
//! immediately, never eventually.

use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use neondrift_core::components::{Craft, SegmentInfo};
use neondrift_core::config::SimTuning;
use neondrift_core::events::SimEvent;
use neondrift_core::types::Position;
use neondrift_track::triggers::{self, SegmentContext, SegmentDirective};

use crate::streamer::TrackStreamer;

pub fn run(
    world: &mut hecs::World,
    streamer: &mut TrackStreamer,
    rng: &mut ChaCha8Rng,
    tuning: &SimTuning,
    events: &mut Vec<SimEvent>,
) {
    let craft_z = match world
        .query_mut::<(&Craft, &Position)>()
        .into_iter()
        .next()
    {
        Some((_, (_, pos))) => pos.track_coord(),
        None => return,
    };

    // Collect directives first; acting on them mutates the world.
    let mut directives: Vec<(Entity, SegmentDirective)> = Vec::new();
    for (entity, info) in world.query_mut::<&SegmentInfo>() {
        let directive = triggers::evaluate(&SegmentContext {
            origin_z: info.origin_z,
            length: info.length,
            spacing: tuning.segment_spacing,
            delete_margin: tuning.delete_margin,
            craft_z,
            successor_requested: info.successor_requested,
        });
        if directive != SegmentDirective::default() {
            directives.push((entity, directive));
        }
    }

    for (entity, directive) in directives {
        if let Some(origin_z) = directive.request_successor_at {
            // Latch the one-shot flag before the spawn attempt: a refusal at
            // capacity is a final no, not a retry.
            if let Ok(mut info) = world.get::<&mut SegmentInfo>(entity) {
                info.successor_requested = true;
            }
            streamer.spawn_next(world, rng, origin_z, events);
        }
        if directive.retire {
            streamer.retire(world, entity, events);
        }
    }
}
