#[cfg(test)]
mod tests {
    use glam::DVec3;

    use neondrift_core::components::{ColliderExtents, RigidBody, SegmentInfo};
    use neondrift_core::constants::{DT, GRAVITY_Y, MAX_FALL_SPEED};
    use neondrift_core::enums::ContactCategory;
    use neondrift_core::types::{Position, Velocity};

    use crate::body::integrate;
    use crate::contact::resolve_surface_contacts;
    use crate::raycast::{raycast_down, SurfaceStrip};

    fn strip(min_z: f64, max_z: f64) -> SurfaceStrip {
        SurfaceStrip {
            category: ContactCategory::Ground,
            center_x: 0.0,
            half_width: 10.0,
            min_z,
            max_z,
            top_y: 0.0,
        }
    }

    // ---- Raycast ----

    #[test]
    fn test_raycast_hits_within_range() {
        let strips = [strip(0.0, 100.0)];
        let hit = raycast_down(
            DVec3::new(0.0, 3.0, 50.0),
            10.0,
            ContactCategory::Ground,
            &strips,
        )
        .unwrap();
        assert_eq!(hit.distance, 3.0);
        assert_eq!(hit.normal, DVec3::Y);
    }

    #[test]
    fn test_raycast_misses_beyond_range() {
        let strips = [strip(0.0, 100.0)];
        let hit = raycast_down(
            DVec3::new(0.0, 30.0, 50.0),
            10.0,
            ContactCategory::Ground,
            &strips,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_raycast_misses_over_gap() {
        let strips = [strip(0.0, 100.0), strip(110.0, 210.0)];
        let hit = raycast_down(
            DVec3::new(0.0, 3.0, 105.0),
            10.0,
            ContactCategory::Ground,
            &strips,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_raycast_misses_off_edge_laterally() {
        let strips = [strip(0.0, 100.0)];
        let hit = raycast_down(
            DVec3::new(15.0, 3.0, 50.0),
            10.0,
            ContactCategory::Ground,
            &strips,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_strip_from_segment() {
        let info = SegmentInfo {
            id: 7,
            origin_z: 110.0,
            length: 120.0,
            half_width: 10.0,
            template: 1,
            successor_requested: false,
        };
        let s = SurfaceStrip::from_segment(&info);
        assert_eq!(s.min_z, 110.0);
        assert_eq!(s.max_z, 230.0);
        assert!(s.covers(0.0, 200.0));
        assert!(!s.covers(0.0, 231.0));
    }

    // ---- Integration ----

    #[test]
    fn test_gravity_only_free_fall() {
        let mut pos = Position::new(0.0, 10.0, 0.0);
        let mut vel = Velocity::default();
        let mut body = RigidBody::default();
        integrate(&mut pos, &mut vel, &mut body, GRAVITY_Y, MAX_FALL_SPEED, DT);
        assert!((vel.0.y - GRAVITY_Y * DT).abs() < 1e-9);
        assert!(pos.0.y < 10.0);
    }

    #[test]
    fn test_force_accumulator_cleared() {
        let mut pos = Position::default();
        let mut vel = Velocity::default();
        let mut body = RigidBody {
            force: DVec3::new(0.0, 100.0, 0.0),
            ..RigidBody::default()
        };
        integrate(&mut pos, &mut vel, &mut body, GRAVITY_Y, MAX_FALL_SPEED, DT);
        assert_eq!(body.force, DVec3::ZERO);
        assert!(vel.0.y > 0.0);
    }

    #[test]
    fn test_fall_speed_cap() {
        let mut pos = Position::new(0.0, 1000.0, 0.0);
        let mut vel = Velocity::default();
        let mut body = RigidBody::default();
        // Heavy sustained downward force; velocity must never pass the cap.
        for _ in 0..600 {
            body.force.y = -500.0;
            integrate(&mut pos, &mut vel, &mut body, GRAVITY_Y, MAX_FALL_SPEED, DT);
            assert!(vel.0.y >= -MAX_FALL_SPEED - 1e-9);
        }
        assert!((vel.0.y - -MAX_FALL_SPEED).abs() < 1e-9);
    }

    // ---- Contacts ----

    #[test]
    fn test_contact_resolves_penetration() {
        let strips = [strip(0.0, 100.0)];
        let mut pos = Position::new(0.0, 0.2, 50.0);
        let mut vel = Velocity::new(0.0, -12.0, 250.0);
        let extents = ColliderExtents {
            half: DVec3::new(1.0, 0.5, 2.0),
        };
        let mut events = Vec::new();
        resolve_surface_contacts(&mut pos, &mut vel, &extents, &strips, &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, ContactCategory::Ground);
        assert_eq!(events[0].impact_velocity_y, -12.0);
        // Pushed back to the surface, downward motion stopped.
        assert!((pos.0.y - 0.5).abs() < 1e-9);
        assert_eq!(vel.0.y, 0.0);
    }

    #[test]
    fn test_no_contact_when_above_surface() {
        let strips = [strip(0.0, 100.0)];
        let mut pos = Position::new(0.0, 2.0, 50.0);
        let mut vel = Velocity::new(0.0, -1.0, 250.0);
        let extents = ColliderExtents {
            half: DVec3::new(1.0, 0.5, 2.0),
        };
        let mut events = Vec::new();
        resolve_surface_contacts(&mut pos, &mut vel, &extents, &strips, &mut events);
        assert!(events.is_empty());
        assert_eq!(vel.0.y, -1.0);
    }

    #[test]
    fn test_no_contact_while_ascending() {
        let strips = [strip(0.0, 100.0)];
        let mut pos = Position::new(0.0, 0.2, 50.0);
        let mut vel = Velocity::new(0.0, 5.0, 250.0);
        let extents = ColliderExtents {
            half: DVec3::new(1.0, 0.5, 2.0),
        };
        let mut events = Vec::new();
        resolve_surface_contacts(&mut pos, &mut vel, &extents, &strips, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_deep_tunneling_ignored() {
        let strips = [strip(0.0, 100.0)];
        let mut pos = Position::new(0.0, -20.0, 50.0);
        let mut vel = Velocity::new(0.0, -30.0, 250.0);
        let extents = ColliderExtents {
            half: DVec3::new(1.0, 0.5, 2.0),
        };
        let mut events = Vec::new();
        resolve_surface_contacts(&mut pos, &mut vel, &extents, &strips, &mut events);
        assert!(events.is_empty());
        assert_eq!(pos.0.y, -20.0);
    }
}
