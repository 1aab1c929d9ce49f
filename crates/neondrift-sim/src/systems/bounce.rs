//! Collision-driven bounce reaction.
//!
//! Edge-triggered per collision event: a ground contact with enough
//! downward speed becomes an upward impulse and re-arms the hover
//! suppression cooldown. Anything else leaves the velocity alone.

use neondrift_core::components::{Craft, HoverState};
use neondrift_core::config::SimTuning;
use neondrift_core::enums::ContactCategory;
use neondrift_core::events::SimEvent;
use neondrift_core::types::Velocity;
use neondrift_physics::ContactEvent;

pub fn run(
    world: &mut hecs::World,
    tuning: &SimTuning,
    contacts: &[ContactEvent],
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (_craft, vel, hover)) in
        world.query_mut::<(&Craft, &mut Velocity, &mut HoverState)>()
    {
        for contact in contacts {
            if contact.category != ContactCategory::Ground {
                continue;
            }
            if contact.impact_velocity_y < -tuning.min_bounce_velocity {
                vel.0.y = tuning.bounce_velocity;
                // Each qualifying impact independently resets the window.
                hover.bounce_cooldown = true;
                hover.cooldown_elapsed = 0.0;
                events.push(SimEvent::CraftBounced {
                    impact_speed: -contact.impact_velocity_y,
                });
            }
        }
    }
}
