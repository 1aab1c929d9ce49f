//! Craft locomotion — hover, planar movement, banking, fall handling.
//!
//! Evaluated once per simulation step in a fixed sub-step order: ground
//! probe, planar movement, hovering, fast fall, banking, cooldown timer.
//! Forces land in the body's accumulator; the kinematics system integrates
//! them afterwards. The engine gates this system on the session-halt signal.

use neondrift_core::components::{Craft, HoverState, ProbeAnchor, RigidBody};
use neondrift_core::config::SimTuning;
use neondrift_core::constants::DT;
use neondrift_core::enums::ContactCategory;
use neondrift_core::types::{Orientation, Position, Velocity};
use neondrift_physics::{raycast_down, SurfaceStrip};

pub fn run(world: &mut hecs::World, tuning: &SimTuning, strips: &[SurfaceStrip], steering: f64) {
    for (_entity, (_craft, pos, vel, body, hover, orientation, anchor)) in world.query_mut::<(
        &Craft,
        &Position,
        &mut Velocity,
        &mut RigidBody,
        &mut HoverState,
        &mut Orientation,
        &ProbeAnchor,
    )>() {
        // 1. Ground probe.
        let origin = pos.0 + anchor.offset;
        let hit = raycast_down(
            origin,
            tuning.ground_check_distance,
            ContactCategory::Ground,
            strips,
        );
        hover.grounded = hit.is_some();
        hover.ground_distance = hit.map(|h| h.distance);

        // 2. Planar movement. Vertical velocity belongs to hover/gravity/
        //    bounce and stays untouched here.
        vel.0.x = steering * tuning.strafe_speed;
        vel.0.z = tuning.forward_speed;

        // 3. Hovering. Fully skipped while the bounce cooldown is active so
        //    the spring cannot fight the bounce impulse.
        if !hover.bounce_cooldown {
            match hover.ground_distance {
                // Spring-damper only near the target height; a craft falling
                // from a high bounce is left to gravity.
                Some(distance) if distance <= tuning.hover_height * 2.0 => {
                    let error = tuning.hover_height - distance;
                    let force = error * tuning.hover_force - vel.0.y * tuning.hover_damping;
                    body.force.y += force;
                }
                Some(_) => {}
                // No ground in range: amplified gravity so the craft cannot
                // float indefinitely over a gap.
                None => {
                    body.force.y += tuning.gravity_y * tuning.fall_multiplier * body.mass;
                }
            }
        }

        // 4. Fast fall while airborne and descending. The fall-speed cap is
        //    enforced by the integrator after all vertical forces.
        if vel.0.y < 0.0 && !hover.grounded {
            body.force.y -= tuning.fast_fall_force;
        }

        // 5. Banking: exponentially smoothed roll toward the steering
        //    target, layered over whatever yaw/pitch physics produced.
        let target = -steering * tuning.max_bank_angle;
        let blend = (DT * tuning.bank_smoothing).clamp(0.0, 1.0);
        hover.bank_angle += (target - hover.bank_angle) * blend;
        hover.bank_angle = hover
            .bank_angle
            .clamp(-tuning.max_bank_angle, tuning.max_bank_angle);
        orientation.roll = hover.bank_angle;

        // 6. Bounce cooldown timer.
        if hover.bounce_cooldown {
            hover.cooldown_elapsed += DT;
            if hover.cooldown_elapsed >= tuning.bounce_cooldown_secs {
                hover.bounce_cooldown = false;
                hover.cooldown_elapsed = 0.0;
            }
        }
    }
}
