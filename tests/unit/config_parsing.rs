//! Unit tests for configuration parsing.

use pedestal_pointing::config::{PedestalConfig, TurnCounterBounds};
use pedestal_pointing::error::{ConfigError, Error};
use pedestal_pointing::{parse_config, Degrees, Microsteps};

use crate::common::CONFIG;

/// Test parsing the minimal configuration fills in every default.
#[test]
fn test_minimal_config_defaults() {
    let config = parse_config(CONFIG).expect("Failed to parse TOML");

    assert_eq!(config.encoder_max, 4096);
    assert_eq!(config.bus.clock_hz, 500_000);
    assert_eq!(config.warmup.reads, 10);
    assert_eq!(config.warmup.interval_ms, 50);
    assert_eq!(config.drain.elevation, Degrees(60.0));
    assert_eq!(config.drain.hold_ms, 3000);
    assert!(!config.azimuth.invert_direction);
    assert!(config.elevation.invert_direction);
    assert!(config.azimuth.turn_counter.is_none());
    assert_eq!(config.azimuth.drive.step_period_us, 1000);
}

/// Test parsing a configuration with every optional table present.
#[test]
fn test_full_config() {
    let toml_str = r#"
encoder_max = 16384

[bus]
clock_hz = 1000000

[warmup]
reads = 4
interval_ms = 20

[azimuth]
north_encoder_value = 1200
max_rotation_deg = 720.0
invert_direction = true

[azimuth.drive]
steps_per_revolution = 400
microsteps = 8
gear_reduction = 5.5
step_period_us = 250

[azimuth.turn_counter]
min = -8192
max = 8191

[elevation]
zenith_encoder_value = 4000
zenith_safety_margin_deg = 2.5
invert_direction = false

[elevation.drive]
steps_per_revolution = 200
microsteps = 32

[drain]
elevation_deg = 45.0
hold_ms = 5000
"#;

    let config: PedestalConfig = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.bus.clock_hz, 1_000_000);
    assert_eq!(config.warmup.reads, 4);
    assert_eq!(config.azimuth.north_encoder_value, 1200);
    assert_eq!(config.azimuth.max_rotation, Degrees(720.0));
    assert!(config.azimuth.invert_direction);
    assert_eq!(config.azimuth.drive.microsteps, Microsteps::EIGHTH);
    assert_eq!(config.azimuth.drive.gear_reduction, 5.5);
    assert_eq!(config.azimuth.drive.step_period_us, 250);
    assert_eq!(
        config.azimuth.turn_counter,
        Some(TurnCounterBounds {
            min: -8192,
            max: 8191
        })
    );
    assert!(!config.elevation.invert_direction);
    assert_eq!(config.elevation.drive.gear_reduction, 1.0);
    assert_eq!(config.drain.elevation, Degrees(45.0));
    assert_eq!(config.drain.hold_ms, 5000);

    // 16384 counts, zenith at 4000: horizon is a quarter turn below
    assert_eq!(config.horizon_encoder_value(), 16384 - 96);
    assert_eq!(config.elevation_limits().max, Degrees(87.5));
}

/// Test that a microstep value that is not a power of two is rejected.
#[test]
fn test_invalid_microsteps_rejected() {
    let toml_str = CONFIG.replacen("microsteps = 16", "microsteps = 12", 1);

    let result = parse_config(&toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that a missing required field is a parse error.
#[test]
fn test_missing_north_reference() {
    let toml_str = CONFIG.replacen("north_encoder_value = 0\n", "", 1);

    let result = parse_config(&toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}
