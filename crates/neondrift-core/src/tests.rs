#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::SimTuning;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::RunSnapshot;
    use crate::types::{Orientation, Position, SimTime, Velocity};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_halt_signal() {
        assert!(GamePhase::Menu.is_halted());
        assert!(GamePhase::Paused.is_halted());
        assert!(GamePhase::GameOver.is_halted());
        assert!(!GamePhase::Active.is_halted());
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::SetSteering { value: -0.5 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetSteering\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::SetSteering { value } if value == -0.5));
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            SimEvent::SegmentSpawned {
                id: 3,
                origin_z: 110.0,
                template: 1,
            },
            SimEvent::SegmentRetired { id: 1, origin_z: 0.0 },
            SimEvent::CraftBounced { impact_speed: 12.0 },
            SimEvent::ObstacleHit,
            SimEvent::GemCollected { value: 10 },
            SimEvent::CraftFell,
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_helpers() {
        let p = Position::new(1.0, 5.0, 42.0);
        assert_eq!(p.track_coord(), 42.0);
        assert_eq!(p.height_above(2.0), 3.0);
    }

    #[test]
    fn test_velocity_helpers() {
        let v = Velocity::new(3.0, -4.0, 0.0);
        assert!((v.speed() - 5.0).abs() < 1e-9);
        assert_eq!(v.vertical(), -4.0);
    }

    #[test]
    fn test_orientation_roll_only_quat() {
        let o = Orientation {
            yaw: 0.0,
            pitch: 0.0,
            roll: MAX_BANK_ANGLE,
        };
        let q = o.to_quat();
        // Rolling about z leaves the forward axis untouched.
        let fwd = q * glam::DVec3::Z;
        assert!((fwd - glam::DVec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_tuning_defaults_match_constants() {
        let t = SimTuning::default();
        assert_eq!(t.forward_speed, FORWARD_SPEED);
        assert_eq!(t.max_active_segments, MAX_ACTIVE_SEGMENTS);
        assert_eq!(t.bounce_cooldown_secs, BOUNCE_COOLDOWN_SECS);
    }

    #[test]
    fn test_tuning_partial_parse() {
        let t: SimTuning = serde_json::from_str(r#"{"forward_speed": 300.0}"#).unwrap();
        assert_eq!(t.forward_speed, 300.0);
        assert_eq!(t.strafe_speed, STRAFE_SPEED);
    }

    #[test]
    fn test_snapshot_default_serde() {
        let snap = RunSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: RunSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
        assert_eq!(back.active_segments, 0);
    }
}
