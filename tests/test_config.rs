use plane_shooter::config::*;
use plane_shooter::error::ConfigError;

#[test]
fn default_config_is_valid() {
    let cfg = GameConfig::default().validate().unwrap();
    assert_eq!(cfg.motion, MotionMode::PerFrame);
    assert_eq!(cfg.player_spawn(), (215.0, 560.0));
}

#[test]
fn zero_surface_is_rejected() {
    let cfg = GameConfig { surface_width: 0.0, ..GameConfig::default() };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonPositive { what: "surface width", value: 0.0 })
    );
}

#[test]
fn nan_is_rejected() {
    let cfg = GameConfig { fire_interval_ms: f64::NAN, ..GameConfig::default() };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive { what: "fire interval", .. })
    ));
}

#[test]
fn enemy_wider_than_surface_is_rejected() {
    let cfg = GameConfig { surface_width: 35.0, player_width: 30.0, ..GameConfig::default() };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::DoesNotFit { what: "enemy", axis: "width", .. })
    ));
}

#[test]
fn empty_speed_range_is_rejected() {
    let cfg = GameConfig { enemy_min_speed: 5.0, enemy_max_speed: 5.0, ..GameConfig::default() };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::EmptySpeedRange { min: 5.0, max: 5.0 })
    );
}

#[test]
fn floor_above_initial_interval_is_rejected() {
    let cfg = GameConfig { spawn_interval_floor_ms: 2000.0, ..GameConfig::default() };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::SpawnFloorAboveInitial { .. })
    ));
}

#[test]
fn zero_lives_is_rejected() {
    let cfg = GameConfig { starting_life: 0, ..GameConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::NoStartingLife));
}

#[test]
fn error_messages_name_the_field() {
    let err = GameConfig { bullet_speed: -1.0, ..GameConfig::default() }
        .validate()
        .unwrap_err();
    assert_eq!(err.to_string(), "bullet speed must be positive, got -1");
}

#[test]
fn motion_scale_per_mode() {
    let per_frame = GameConfig::default();
    assert_eq!(per_frame.motion_scale(33.0), 1.0);

    let scaled = GameConfig { motion: MotionMode::TimeScaled, ..GameConfig::default() };
    assert!((scaled.motion_scale(REFERENCE_FRAME_MS) - 1.0).abs() < 1e-12);
    assert!((scaled.motion_scale(REFERENCE_FRAME_MS / 2.0) - 0.5).abs() < 1e-12);
    assert_eq!(scaled.motion_scale(-5.0), 0.0);
}
