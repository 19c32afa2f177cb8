use starforce_sim::core::commands::PlayerCommand;
use starforce_sim::core::config::EngineConfig;
use starforce_sim::core::constants::SIXTY_FPS_MS;
use starforce_sim::core::enums::*;
use starforce_sim::assets::AssetRegistry;
use starforce_sim::core::events::{EngineEvent, Sound, SoundRequest};
use starforce_sim::{Engine, EngineError};

use glam::Vec3;

fn engine_from_json(json: &str) -> Engine {
    let config = EngineConfig::from_json(json).expect("valid config");
    Engine::new(config, AssetRegistry::with_defaults()).expect("engine")
}

fn begin_session(engine: &mut Engine, spawn_z: f32) {
    engine.queue_commands([
        PlayerCommand::StartGame,
        PlayerCommand::SetSpawnArea {
            left: Some(Vec3::new(-1500.0, 0.0, spawn_z)),
            right: Some(Vec3::new(1500.0, 0.0, spawn_z)),
        },
        PlayerCommand::PointerMoved {
            target: Some(Vec3::new(0.0, 0.0, -200.0)),
            on_screen: true,
        },
        PlayerCommand::Press {
            control: Control::Mouse(MouseButton::Left),
        },
    ]);
}

#[test]
fn test_autofire_session() {
    let mut engine = engine_from_json(r#"{"seed": 99, "meteor_spawn_ms": 150}"#);
    begin_session(&mut engine, -9000.0);

    let mut lasers = 0;
    let mut saw_meteor = false;
    let mut saw_bullet = false;
    for _ in 0..600 {
        let snapshot = engine.frame(SIXTY_FPS_MS).unwrap();
        assert_eq!(snapshot.state, EngineState::Running);
        assert!(snapshot.has_game_started);
        serde_json::to_string(&snapshot).expect("snapshot serializes");

        lasers += snapshot
            .sounds
            .iter()
            .filter(|sound| **sound == SoundRequest::play(Sound::Laser))
            .count();
        saw_meteor |= snapshot.count_of(EntityKind::Meteor) > 0;
        saw_bullet |= snapshot.count_of(EntityKind::Bullet) > 0;

        for node in &snapshot.nodes {
            assert!(node.position.is_finite(), "{:?} escaped to {}", node.kind, node.position);
        }
    }

    assert!(saw_meteor, "Meteor waves should run");
    assert!(saw_bullet);
    // 10 s of held fire, one volley per 6 or 7 frames.
    assert!((80..=110).contains(&lasers), "got {lasers} volleys");
    assert_eq!(engine.frame_count(), 600);
}

#[test]
fn test_pointer_excursion_pauses_and_resumes_once() {
    let mut engine = engine_from_json("{}");
    begin_session(&mut engine, -9000.0);
    for _ in 0..10 {
        engine.frame(SIXTY_FPS_MS).unwrap();
    }
    assert!(engine.drain_events().is_empty());

    engine.queue_command(PlayerCommand::PointerMoved {
        target: None,
        on_screen: false,
    });
    for _ in 0..10 {
        let snapshot = engine.frame(SIXTY_FPS_MS).unwrap();
        assert_eq!(snapshot.state, EngineState::PausedForFocusLoss);
    }
    let frozen = engine.frame_count();

    engine.queue_command(PlayerCommand::PointerMoved {
        target: Some(Vec3::ZERO),
        on_screen: true,
    });
    engine.frame(SIXTY_FPS_MS).unwrap();

    assert_eq!(
        engine.drain_events(),
        vec![EngineEvent::Pause, EngineEvent::Resume]
    );
    assert_eq!(engine.frame_count(), frozen + 1);
}

#[test]
fn test_death_and_restart() {
    let mut engine = engine_from_json(r#"{"meteor_spawn_ms": 100, "initial_stars": 0}"#);
    // Meteors appear right on top of the parked ship.
    engine.queue_commands([
        PlayerCommand::StartGame,
        PlayerCommand::SetSpawnArea {
            left: Some(Vec3::ZERO),
            right: Some(Vec3::ZERO),
        },
    ]);

    let mut died = false;
    for _ in 0..60 {
        let snapshot = engine.frame(SIXTY_FPS_MS).unwrap();
        if snapshot.events.contains(&EngineEvent::Death) {
            assert!(!snapshot.ship.alive);
            assert!(snapshot
                .sounds
                .contains(&SoundRequest::play_delayed(Sound::GameOver, 600)));
            died = true;
            break;
        }
    }
    assert!(died, "Ship should die to a meteor spawned on top of it");
    assert_eq!(engine.drain_events(), vec![EngineEvent::Death]);

    let frozen_score = engine.frame(SIXTY_FPS_MS).unwrap().score.survival_secs;
    let later_score = engine.frame(SIXTY_FPS_MS).unwrap().score.survival_secs;
    assert_eq!(frozen_score, later_score, "Survival time freezes at death");

    engine.queue_command(PlayerCommand::Restart);
    let snapshot = engine.frame(SIXTY_FPS_MS).unwrap();
    assert!(snapshot.ship.alive);
    assert_eq!(snapshot.ship.life, snapshot.ship.max_life);
    assert_eq!(snapshot.count_of(EntityKind::Ship), 1);
    assert_eq!(snapshot.count_of(EntityKind::Bullet), 0);
}

#[test]
fn test_teardown_is_final() {
    let mut engine = engine_from_json("{}");
    begin_session(&mut engine, -9000.0);
    for _ in 0..30 {
        engine.frame(SIXTY_FPS_MS).unwrap();
    }

    engine.destroy();
    assert_eq!(engine.state(), EngineState::Destroyed);
    assert!(matches!(
        engine.frame(SIXTY_FPS_MS),
        Err(EngineError::Destroyed)
    ));
    assert_eq!(engine.world().len(), 0);
}

#[test]
fn test_bad_config_file_is_reported() {
    let err = EngineConfig::from_json(r#"{"meteor_size": {"min": 60, "max": 20}}"#).unwrap_err();
    assert!(err.to_string().contains("meteor_size"));
}
