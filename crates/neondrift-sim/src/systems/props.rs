//! Prop trigger overlap: gems and obstacles reacting to the craft.
//!
//! One-shot per prop. Collected gems are despawned; a hit obstacle stays
//! (its visual teardown is an external concern) but never fires again.

use hecs::Entity;

use neondrift_core::components::{ColliderExtents, Craft, Prop};
use neondrift_core::enums::PropKind;
use neondrift_core::events::SimEvent;
use neondrift_core::types::Position;

pub fn run(world: &mut hecs::World, events: &mut Vec<SimEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let craft = world
        .query_mut::<(&Craft, &Position, &ColliderExtents)>()
        .into_iter()
        .map(|(_, (_, pos, extents))| (*pos, *extents))
        .next();
    let Some((craft_pos, extents)) = craft else {
        return;
    };

    for (entity, (prop, pos)) in world.query_mut::<(&mut Prop, &Position)>() {
        if prop.triggered {
            continue;
        }
        let delta = (craft_pos.0 - pos.0).abs();
        let reach = extents.half + glam::DVec3::splat(prop.radius);
        if delta.x > reach.x || delta.y > reach.y || delta.z > reach.z {
            continue;
        }

        prop.triggered = true;
        match prop.kind {
            PropKind::Gem => {
                events.push(SimEvent::GemCollected { value: prop.value });
                despawn_buffer.push(entity);
            }
            PropKind::Obstacle => {
                events.push(SimEvent::ObstacleHit);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
