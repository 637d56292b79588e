//! Tests for core types, configuration parsing, and event serialization.

use glam::Vec3;

use crate::config::{ArenaConfig, ConfigError, Viewport};
use crate::events::FxEvent;
use crate::types::{horizontal_dist_sq, yaw_forward, yaw_toward, SimTime};

// ---- Time ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(1.0 / 60.0);
    }
    assert_eq!(time.frame, 60);
    assert!(
        (time.elapsed_secs - 1.0).abs() < 1e-5,
        "60 frames at 1/60s should be ~1.0s, got {}",
        time.elapsed_secs
    );
}

// ---- Math helpers ----

#[test]
fn test_horizontal_distance_ignores_height() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(3.0, 100.0, 4.0);
    assert!((horizontal_dist_sq(a, b) - 25.0).abs() < 1e-6);
}

#[test]
fn test_yaw_roundtrip() {
    // Facing from origin toward a point recovers the same horizontal direction.
    let from = Vec3::new(1.0, 0.0, 2.0);
    let to = Vec3::new(4.0, 5.0, -2.0);
    let yaw = yaw_toward(from, to);
    let forward = yaw_forward(yaw);

    let dx = to.x - from.x;
    let dz = to.z - from.z;
    let len = (dx * dx + dz * dz).sqrt();
    assert!((forward.x - dx / len).abs() < 1e-5);
    assert!((forward.y - dz / len).abs() < 1e-5);
}

#[test]
fn test_yaw_zero_faces_positive_z() {
    let forward = yaw_forward(0.0);
    assert!(forward.x.abs() < 1e-6);
    assert!((forward.y - 1.0).abs() < 1e-6);
}

// ---- Configuration ----

#[test]
fn test_config_parses_templates() {
    let json = r#"{
        "enemy_templates": [
            { "name": "dragon", "size": [2.0, 3.5, 4.0], "min_y": -0.25 },
            { "name": "ship", "size": [5.0, 2.5, 5.0], "min_y": 0.0 }
        ],
        "viewport": { "width": 1920.0, "height": 1080.0 }
    }"#;

    let config = ArenaConfig::from_json(json).unwrap();
    assert_eq!(config.enemy_templates.len(), 2);
    assert_eq!(config.enemy_templates[0].name, "dragon");
    assert!((config.viewport.aspect() - 16.0 / 9.0).abs() < 1e-4);
    assert!(!config.viewport.is_narrow());
}

#[test]
fn test_config_defaults_when_fields_missing() {
    let config = ArenaConfig::from_json("{}").unwrap();
    assert!(config.enemy_templates.is_empty());
    assert_eq!(config.viewport, Viewport::default());
}

#[test]
fn test_config_rejects_degenerate_template() {
    let json = r#"{
        "enemy_templates": [
            { "name": "flat", "size": [1.0, 0.0, 1.0], "min_y": 0.0 }
        ]
    }"#;

    match ArenaConfig::from_json(json) {
        Err(ConfigError::BadTemplate(name)) => assert_eq!(name, "flat"),
        other => panic!("Expected BadTemplate error, got {other:?}"),
    }
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(matches!(
        ArenaConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_narrow_viewport_heuristic() {
    let narrow = Viewport {
        width: 800.0,
        height: 600.0,
    };
    assert!(narrow.is_narrow());
    assert!(!Viewport::default().is_narrow());
}

// ---- Events ----

#[test]
fn test_events_serialize_tagged() {
    let event = FxEvent::DamageNumber {
        position: Vec3::new(1.0, 2.0, 3.0),
        amount: 50,
        is_crit: true,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(
        json.contains(r#""type":"DamageNumber""#),
        "Events should carry a type tag for the frontend: {json}"
    );

    let back: FxEvent = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        back,
        FxEvent::DamageNumber {
            amount: 50,
            is_crit: true,
            ..
        }
    ));
}
