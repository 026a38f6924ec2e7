#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::catalog::CreepType;
    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, Rules};
    use crate::enums::{CreepBehavior, HeroKind};
    use crate::events::SimEvent;
    use crate::state::WorldSnapshot;
    use crate::types::{ObstacleId, PlayerId, SimTime, Vector2};

    const EPS: f64 = 1e-9;

    // ---- Vector2 ----

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -2.0);
        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(a - b, Vector2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
        assert_eq!(-a, Vector2::new(-3.0, -4.0));
        assert!((a.length() - 5.0).abs() < EPS);
        assert!((a.distance_to(Vector2::ZERO) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_resized_to() {
        let v = Vector2::new(3.0, 4.0).resized_to(10.0);
        assert!((v.x - 6.0).abs() < EPS);
        assert!((v.y - 8.0).abs() < EPS);
        // Zero vector has no direction and stays put.
        assert_eq!(Vector2::ZERO.resized_to(10.0), Vector2::ZERO);
    }

    #[test]
    fn test_towards_steps_by_max_step() {
        let start = Vector2::new(0.0, 0.0);
        let target = Vector2::new(100.0, 0.0);
        let next = start.towards(target, 30.0);
        assert!((next.x - 30.0).abs() < EPS);
        assert!(next.y.abs() < EPS);
    }

    #[test]
    fn test_towards_never_overshoots() {
        let start = Vector2::new(0.0, 0.0);
        let target = Vector2::new(10.0, 10.0);
        assert_eq!(start.towards(target, 500.0), target);
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector2::new(1.5, -2.5);
        let d: glam::DVec2 = v.into();
        assert_eq!(Vector2::from(d), v);
    }

    #[test]
    fn test_random_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Vector2::random(&mut rng, 1920.0, 1000.0);
            assert!((0.0..1920.0).contains(&p.x));
            assert!((0.0..1000.0).contains(&p.y));
        }
    }

    // ---- Players / time ----

    #[test]
    fn test_enemy_is_symmetric() {
        for id in PlayerId::ALL {
            assert_ne!(id, id.enemy());
            assert_eq!(id, id.enemy().enemy());
        }
        assert_eq!(PlayerId::Red.index(), 0);
        assert_eq!(PlayerId::Blue.index(), 1);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance();
        t.advance();
        assert_eq!(t.tick, 2);
    }

    // ---- Catalog ----

    #[test]
    fn test_catalog_behaviors() {
        assert_eq!(CreepType::Melee.behavior(), CreepBehavior::KingChasing);
        assert_eq!(CreepType::Giant.behavior(), CreepBehavior::TowerBusting);
    }

    #[test]
    fn test_catalog_stats_are_sane() {
        for creep_type in CreepType::ALL {
            let stats = creep_type.stats();
            assert!(stats.speed > 0.0, "{creep_type} must move");
            assert!(stats.radius > 0.0);
            assert!(stats.max_health > 0);
            assert!(stats.build_time > 0, "{creep_type} needs a build time");
            assert!(stats.count > 0);
        }
        assert!(CreepType::Giant.stats().max_health > CreepType::Melee.stats().max_health);
    }

    // ---- Rules ----

    #[test]
    fn test_default_rules_are_valid() {
        Rules::default().validate().unwrap();
    }

    #[test]
    fn test_rules_partial_json_keeps_defaults() {
        let rules = Rules::from_json(r#"{ "tower_melt_rate": 5, "obstacle_count": 4 }"#).unwrap();
        assert_eq!(rules.tower_melt_rate, 5);
        assert_eq!(rules.obstacle_count, 4);
        assert_eq!(rules.giant_bust_rate, Rules::default().giant_bust_rate);
    }

    #[test]
    fn test_rules_rejects_bad_json() {
        let err = Rules::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rules_rejects_inverted_range() {
        let err = Rules::from_json(r#"{ "obstacle_radius": [90, 60] }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "obstacle_radius"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_rules_rejects_zero_drop_distance() {
        let err = Rules::from_json(r#"{ "tower_creep_damage_drop_distance": 0.0 }"#).unwrap_err();
        assert!(err.to_string().contains("tower_creep_damage_drop_distance"));
    }

    // ---- Wire types ----

    /// Commands are a tagged union so the host can send them as JSON.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::BuildMine {
                player: PlayerId::Red,
                obstacle: ObstacleId(3),
            },
            PlayerCommand::BuildTower {
                player: PlayerId::Blue,
                obstacle: ObstacleId(0),
                health: 400,
            },
            PlayerCommand::BuildBarracks {
                player: PlayerId::Red,
                obstacle: ObstacleId(1),
                creep_type: CreepType::Giant,
            },
            PlayerCommand::MoveHero {
                player: PlayerId::Blue,
                hero: HeroKind::Queen,
                location: Vector2::new(10.0, 20.0),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }

        let json = serde_json::to_string(&commands[0]).unwrap();
        assert!(json.contains(r#""type":"BuildMine""#), "got {json}");
    }

    #[test]
    fn test_command_player() {
        let cmd = PlayerCommand::StartTraining {
            player: PlayerId::Blue,
            obstacle: ObstacleId(2),
        };
        assert_eq!(cmd.player(), PlayerId::Blue);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = WorldSnapshot {
            events: vec![SimEvent::CreepKilled {
                owner: PlayerId::Red,
                location: Vector2::new(1.0, 2.0),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("CreepKilled"));
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snap.events);
    }
}
