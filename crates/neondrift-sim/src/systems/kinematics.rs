//! Integration step: apply accumulated forces, advance the craft, resolve
//! surface contacts. Returns the step's discrete collision events for the
//! bounce reaction.

use neondrift_core::components::{ColliderExtents, Craft, RigidBody};
use neondrift_core::config::SimTuning;
use neondrift_core::constants::DT;
use neondrift_core::types::{Position, Velocity};
use neondrift_physics::{integrate, resolve_surface_contacts, ContactEvent, SurfaceStrip};

pub fn run(world: &mut hecs::World, tuning: &SimTuning, strips: &[SurfaceStrip]) -> Vec<ContactEvent> {
    let mut events = Vec::new();
    for (_entity, (_craft, pos, vel, body, extents)) in world.query_mut::<(
        &Craft,
        &mut Position,
        &mut Velocity,
        &mut RigidBody,
        &ColliderExtents,
    )>() {
        integrate(pos, vel, body, tuning.gravity_y, tuning.max_fall_speed, DT);
        resolve_surface_contacts(pos, vel, extents, strips, &mut events);
    }
    events
}
