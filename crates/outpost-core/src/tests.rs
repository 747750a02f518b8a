#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::CommandError;
    use crate::events::SimEvent;
    use crate::presets::{tower_preset, ENEMY_PRESETS, TOWER_PRESETS};
    use crate::state::GameStateSnapshot;
    use crate::types::{Bounds, Position, SimTime, Velocity};

    #[test]
    fn test_upgrade_track_serde() {
        for v in UpgradeTrack::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: UpgradeTrack = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SelectTowerPreset { index: 2 },
            PlayerCommand::PlaceTower { x: 400.0, y: 300.0 },
            PlayerCommand::PurchaseUpgrade {
                track: UpgradeTrack::AttackSpeed,
            },
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_player_command_tag_format() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"PurchaseUpgrade","track":"Range"}"#).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::PurchaseUpgrade {
                track: UpgradeTrack::Range
            }
        ));
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::WaveStarted { wave: 2 },
            SimEvent::EnemyKilled {
                position: Position::new(10.0, 20.0),
                reward: KILL_REWARD,
            },
            SimEvent::TowerDestroyed {
                position: Position::new(400.0, 300.0),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_direction_to_is_unit_length() {
        let a = Position::new(100.0, 100.0);
        let b = Position::new(130.0, 140.0);
        let dir = a.direction_to(&b).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_self_is_none() {
        let a = Position::new(5.0, 5.0);
        assert!(a.direction_to(&a).is_none());
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::new(0.0, 0.0, 800.0, 600.0);
        assert!(Position::new(0.0, 0.0).is_within(&bounds));
        assert!(Position::new(800.0, 600.0).is_within(&bounds));
        assert!(!Position::new(-0.1, 10.0).is_within(&bounds));
        assert!(!Position::new(10.0, 600.5).is_within(&bounds));
        assert_eq!(bounds.center(), Position::new(400.0, 300.0));
    }

    #[test]
    fn test_velocity_along() {
        let v = Velocity::along(glam::DVec2::new(0.0, -1.0), PROJECTILE_SPEED);
        assert!((v.speed() - PROJECTILE_SPEED).abs() < 1e-10);
        assert!(v.0.y < 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(DT);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_enemy_scaling_wave_zero_is_identity() {
        for preset in ENEMY_PRESETS {
            assert_eq!(preset.scaled(0), preset);
        }
    }

    #[test]
    fn test_enemy_scaling_truncates() {
        // 150 * 1.05 = 157.5 -> 157; 30 * 1.05 = 31.5 -> 31
        let scaled = ENEMY_PRESETS[1].scaled(1);
        assert_eq!(scaled.health, 157);
        assert_eq!(scaled.damage, 31);
        assert!((scaled.speed - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_enemy_scaling_is_exact_in_later_waves() {
        // 100 * 1.15 and 200 * 1.15 land exactly on integers
        assert_eq!(ENEMY_PRESETS[0].scaled(3).health, 115);
        assert_eq!(ENEMY_PRESETS[3].scaled(3).health, 230);
        assert_eq!(ENEMY_PRESETS[3].scaled(3).damage, 46);
        assert_eq!(ENEMY_PRESETS[0].scaled(9).health, 145);
        assert!((ENEMY_PRESETS[2].scaled(3).speed - 40.25).abs() < 1e-9);
    }

    #[test]
    fn test_tower_preset_lookup() {
        assert_eq!(tower_preset(0).map(|p| p.cost), Some(20));
        assert_eq!(tower_preset(2), Some(&TOWER_PRESETS[2]));
        assert!(tower_preset(3).is_none());
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::InsufficientExperience { have: 10, need: 20 };
        assert_eq!(err.to_string(), "insufficient experience: have 10, need 20");
        let err = CommandError::PlacementTooClose {
            distance: 11.18,
            min: MIN_TOWER_SPACING,
        };
        assert!(err.to_string().contains("11.2 < 50"));
    }
}
