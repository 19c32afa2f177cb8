#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::components::*;
    use crate::config::{EngineConfig, SpanF32};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{Sound, SoundRequest};
    use crate::state::{FrameSnapshot, NodeView};
    use crate::types::{invlerp, lerp, range, FrameInfo, Transform};

    #[test]
    fn test_entity_kind_serde() {
        let variants = vec![
            EntityKind::Ship,
            EntityKind::Meteor,
            EntityKind::Bullet,
            EntityKind::Scrap,
            EntityKind::Star,
            EntityKind::ReactorTrail,
            EntityKind::Plane,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_collidable_and_restart_sets() {
        assert!(EntityKind::Ship.is_collidable());
        assert!(EntityKind::Meteor.is_collidable());
        assert!(EntityKind::Bullet.is_collidable());
        assert!(!EntityKind::Scrap.is_collidable());
        assert!(!EntityKind::Star.is_collidable());

        assert!(EntityKind::ReactorTrail.cleared_on_restart());
        assert!(!EntityKind::Star.cleared_on_restart());
        assert!(!EntityKind::Scrap.cleared_on_restart());
        assert!(!EntityKind::Plane.cleared_on_restart());
    }

    #[test]
    fn test_command_tagged_json() {
        let cmd = PlayerCommand::Press {
            control: Control::Mouse(MouseButton::Left),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Press\""), "got {json}");

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"FocusChanged","active":false}"#).unwrap();
        assert!(matches!(parsed, PlayerCommand::FocusChanged { active: false }));

        let parsed: PlayerCommand = serde_json::from_str(r#"{"type":"Restart"}"#).unwrap();
        assert!(matches!(parsed, PlayerCommand::Restart));
    }

    #[test]
    fn test_sound_request_json() {
        let json = serde_json::to_string(&SoundRequest::play_delayed(Sound::GameOver, 600)).unwrap();
        assert!(json.contains("\"type\":\"Play\""));
        assert!(json.contains("\"delay_ms\":600"));
        let back: SoundRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SoundRequest::play_delayed(Sound::GameOver, 600));
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(KeyCode::from_code(37), Some(KeyCode::Left));
        assert_eq!(KeyCode::from_code(40), Some(KeyCode::Down));
        assert_eq!(KeyCode::from_code(1000), None);
        assert_eq!(MouseButton::from_code(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_code(3), None);
    }

    #[test]
    fn test_frame_speed() {
        let nominal = FrameInfo::from_delta(SIXTY_FPS_MS, 0.0);
        assert!((nominal.speed - 1.0).abs() < 1e-9);

        let slow = FrameInfo::from_delta(SIXTY_FPS_MS * 2.0, 0.0);
        assert!((slow.speed - 2.0).abs() < 1e-9);
        assert!(slow.speed_deviation().abs() >= SPEED_SPIKE_THRESHOLD);

        let zero = FrameInfo::from_delta(0.0, 0.0);
        assert!((zero.speed - 1.0).abs() < 1e-9);
        assert_eq!(zero.delta, 0.0);
    }

    #[test]
    fn test_scalar_helpers() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(invlerp(0.0, 10.0, 20.0), 1.0);
        assert_eq!(invlerp(0.0, 10.0, -5.0), 0.0);
        assert_eq!(range(-1.0, 1.0, STAR_MIN_SCALE, STAR_MAX_SCALE, -1.0), STAR_MIN_SCALE);
        assert_eq!(range(-1.0, 1.0, STAR_MIN_SCALE, STAR_MAX_SCALE, 1.0), STAR_MAX_SCALE);
    }

    #[test]
    fn test_transform_orientation_identity() {
        let transform = Transform::at(Vec3::new(1.0, 2.0, 3.0)).with_uniform_scale(SHIP_SCALE);
        assert_eq!(transform.scale, Vec3::splat(SHIP_SCALE));
        assert!(transform.orientation().angle_between(glam::Quat::IDENTITY) < 1e-6);
    }

    #[test]
    fn test_bounds_rules() {
        let edge = PLANE_HALF;
        assert!(Bounds::Cube.contains(Vec3::ZERO));
        assert!(!Bounds::Cube.contains(Vec3::new(edge, 0.0, 0.0)));
        assert!(!Bounds::Cube.contains(Vec3::new(0.0, 0.0, -edge)));

        // Far ahead of the camera is fine for the field rule.
        assert!(Bounds::Field.contains(Vec3::new(0.0, 0.0, -edge * 1.5)));
        assert!(!Bounds::Field.contains(Vec3::new(0.0, 0.0, BEHIND_CAMERA_Z)));
        assert!(!Bounds::Field.contains(Vec3::new(0.0, -edge, 0.0)));
    }

    #[test]
    fn test_lifecycle_kill_once() {
        let mut lifecycle = Lifecycle::default();
        assert!(lifecycle.kill());
        assert!(!lifecycle.kill());
        assert!(!lifecycle.alive);
    }

    #[test]
    fn test_glow_state_machine() {
        let mut health = Health::full(3);
        let mut glow = Glow::expired(1000.0, true);
        assert_eq!(glow_state(&health, &glow), GlowState::Normal);
        assert!(!glow.shields_damage());

        glow.cooldown.trigger();
        assert_eq!(glow_state(&health, &glow), GlowState::Glowing);
        assert!(glow.shields_damage());
        assert!((glow.intensity() - 1.0).abs() < 1e-6);

        glow.cooldown.tick(1000.0);
        assert_eq!(glow_state(&health, &glow), GlowState::Normal);
        assert_eq!(glow.intensity(), 0.0);

        health.life = 0;
        assert_eq!(glow_state(&health, &glow), GlowState::Dead);
    }

    #[test]
    fn test_non_invincible_glow_never_shields() {
        let mut glow = Glow::expired(200.0, false);
        glow.cooldown.trigger();
        assert!(glow.is_glowing());
        assert!(!glow.shields_damage());
    }

    #[test]
    fn test_lifetime_scale() {
        let mut lifetime = Lifetime::frames(SCRAP_LIFE, SCRAP_MAX_SCALE);
        assert_eq!(lifetime.scale(), SCRAP_MAX_SCALE);
        lifetime.remaining = 0;
        assert_eq!(lifetime.scale(), 0.0);
        assert_eq!(Lifetime::frames(0, 1.0).scale(), 0.0);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.fire_cooldown_ms, 100.0);
        assert_eq!(config.reactor_cooldown_ms, 80.0);
    }

    #[test]
    fn test_config_partial_override() {
        let config = EngineConfig::from_json(r#"{"seed": 7, "meteor_size": {"min": 30, "max": 40}}"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.meteor_size, SpanF32::new(30.0, 40.0));
        assert_eq!(config.ship_glow_ms, 1000.0);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = EngineConfig::from_json(r#"{"fire_cooldown_ms": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration { field: "fire_cooldown_ms", .. }));

        let err = EngineConfig::from_json(r#"{"meteor_speed": {"min": 5, "max": 1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { field: "meteor_speed", .. }));

        let err = EngineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_cooldown_config_is_valid() {
        let config = EngineConfig {
            fire_cooldown_ms: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_snapshot_count_of() {
        let node = |kind| NodeView {
            id: 0,
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            glow: 0.0,
            opacity: 1.0,
        };
        let snapshot = FrameSnapshot {
            nodes: vec![node(EntityKind::Meteor), node(EntityKind::Meteor), node(EntityKind::Star)],
            ..Default::default()
        };
        assert_eq!(snapshot.count_of(EntityKind::Meteor), 2);
        assert_eq!(snapshot.count_of(EntityKind::Bullet), 0);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.count_of(EntityKind::Star), 1);
    }
}
