#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::entities::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::state::{FrameSnapshot, HudView};
    use crate::types::{Rect, SimTime, Viewport};

    // ---- Serde ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Playing, GamePhase::Paused, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// PlayerCommand is an internally tagged union; the tag must survive.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PointerMoved { x: 120.0, y: 40.5 },
            PlayerCommand::FireSpecial,
            PlayerCommand::TogglePause,
            PlayerCommand::Restart,
            PlayerCommand::ResizeViewport {
                width: 800.0,
                height: 600.0,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }

        let json = serde_json::to_string(&PlayerCommand::FireSpecial).unwrap();
        assert!(json.contains("\"type\":\"FireSpecial\""), "got {json}");
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ScoreChanged { score: 12 },
            GameEvent::EnemyDestroyed {
                kind: EnemyKind::Asteroid(AsteroidClass::Large),
                source: KillSource::Ring,
                points: 3,
            },
            GameEvent::LifeLost {
                lives: 2,
                power_stage: 2,
            },
            GameEvent::SpecialFired {
                origin: Vec2::new(75.0, 300.0),
                remaining: 1,
            },
            GameEvent::GameOver { final_score: 99 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(-5.0, 2.0, 6.0, 1.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_viewport_contains_edges() {
        let viewport = Viewport::new(100.0, 50.0);
        assert!(viewport.contains(Vec2::new(0.0, 0.0)));
        assert!(viewport.contains(Vec2::new(100.0, 50.0)));
        assert!(!viewport.contains(Vec2::new(100.5, 10.0)));
        assert!(!viewport.contains(Vec2::new(10.0, -0.1)));
        assert_eq!(viewport.max_dimension(), 100.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!(
            (time.elapsed_ms - 1000.0).abs() < 1e-6,
            "60 ticks should equal 1000 ms, got {}",
            time.elapsed_ms
        );
    }

    // ---- Asteroid classes ----

    #[test]
    fn test_asteroid_class_table() {
        assert_eq!(AsteroidClass::Small.size(), 20.0);
        assert_eq!(AsteroidClass::Medium.size(), 35.0);
        assert_eq!(AsteroidClass::Large.size(), 50.0);

        // HP = ceil(size / 20)
        assert_eq!(AsteroidClass::Small.hp(), 1);
        assert_eq!(AsteroidClass::Medium.hp(), 2);
        assert_eq!(AsteroidClass::Large.hp(), 3);

        assert_eq!(AsteroidClass::Large.smaller(), Some(AsteroidClass::Medium));
        assert_eq!(AsteroidClass::Small.smaller(), None);
        assert_eq!(AsteroidClass::Medium.smaller(), Some(AsteroidClass::Small));
    }

    #[test]
    fn test_fragment_offsets_per_class() {
        assert_eq!(AsteroidClass::Small.fragment_offsets().len(), 2);
        assert_eq!(AsteroidClass::Medium.fragment_offsets().len(), 3);
        assert_eq!(AsteroidClass::Large.fragment_offsets().len(), 2);
    }

    #[test]
    fn test_kill_scores() {
        assert_eq!(EnemyKind::Boss.score(), 50);
        assert_eq!(EnemyKind::Ship.score(), 5);
        for class in AsteroidClass::ALL {
            assert_eq!(
                EnemyKind::Asteroid(class).score(),
                u32::from(class.index())
            );
        }
    }

    // ---- Entities ----

    #[test]
    fn test_enemy_kind_dispatch() {
        let ship = Enemy {
            id: EntityId(1),
            pos: Vec2::ZERO,
            size: Vec2::new(200.0, 200.0),
            hp: 50,
            body: EnemyBody::Ship(Ship {
                boss: true,
                speed: 2.0,
                direction: 1.0,
                fire_interval_ms: 2000.0,
                last_fire_ms: 0.0,
            }),
        };
        assert_eq!(ship.kind(), EnemyKind::Boss);
        assert!(ship.is_boss());
        assert!(ship.is_ship());
        assert_eq!(ship.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_special_bullet_damage() {
        let mut bullet = PlayerBullet {
            pos: Vec2::ZERO,
            vel: Vec2::new(10.0, 0.0),
            special: false,
        };
        assert_eq!(bullet.damage(), 1);
        bullet.special = true;
        assert_eq!(bullet.damage(), 2);
    }

    #[test]
    fn test_ring_band() {
        let mut ring = SpecialRing::new(Vec2::ZERO);
        ring.radius = 50.0;
        assert!(ring.band_contains(Vec2::new(40.0, 0.0)));
        assert!(ring.band_contains(Vec2::new(0.0, 60.0)));
        assert!(!ring.band_contains(Vec2::new(39.0, 0.0)));
        assert!(!ring.band_contains(Vec2::new(61.0, 0.0)));
    }

    #[test]
    fn test_motion_inheritance() {
        let diagonal = AsteroidMotion::Diagonal {
            speed: 4.0,
            dy: -4.0,
        };
        assert_eq!(diagonal.horizontal_speed(), 4.0);
        assert_eq!(diagonal.vertical_velocity(), -4.0);

        let fragment = AsteroidMotion::Fragment {
            vel: Vec2::new(-6.0, 2.0),
        };
        assert_eq!(fragment.horizontal_speed(), 6.0);
        assert_eq!(fragment.vertical_velocity(), 2.0);
    }

    // ---- HUD ----

    #[test]
    fn test_hud_segments() {
        let hud = HudView {
            score: 10,
            lives: 7,
            power_stage: 4,
            special_count: 1,
            game_over: None,
        };
        assert_eq!(hud.hearts(), 5, "hearts are capped at the life cap");
        assert_eq!(hud.power_segments(), [true, true, true, true, false, false]);
        assert_eq!(hud.special_segments(), [true, false, false]);
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.max_lives, 5);
    }

    #[test]
    fn test_config_partial_override() {
        let config = GameConfig::from_toml_str("seed = 7\ncanvas_width = 1920.0\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.canvas_width, 1920.0);
        assert_eq!(config.canvas_height, 720.0);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = GameConfig::from_toml_str("canvas_height = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "canvas_height",
                ..
            }
        ));

        let err = GameConfig::from_toml_str("starting_lives = 6").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "starting_lives",
                ..
            }
        ));

        let err = GameConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
