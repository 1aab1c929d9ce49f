//! Semi-implicit Euler integration for the craft body.

use glam::DVec3;

use neondrift_core::components::RigidBody;
use neondrift_core::types::{Position, Velocity};

/// Advance one body by `dt`: gravity plus accumulated forces update the
/// velocity, the fall-speed cap is enforced, then the position advances.
/// Clears the force accumulator.
///
/// The cap runs here, after every vertical force for the step has landed,
/// so no combination of hover, fast fall, and amplified gravity can push
/// the craft past it.
pub fn integrate(
    pos: &mut Position,
    vel: &mut Velocity,
    body: &mut RigidBody,
    gravity_y: f64,
    max_fall_speed: f64,
    dt: f64,
) {
    let accel = DVec3::new(0.0, gravity_y, 0.0) + body.force / body.mass;
    body.force = DVec3::ZERO;

    vel.0 += accel * dt;
    if vel.0.y < -max_fall_speed {
        vel.0.y = -max_fall_speed;
    }

    pos.0 += vel.0 * dt;
}
