//! Unit tests for configuration validation.

use pedestal_pointing::config::{validate_config, TurnCounterBounds};
use pedestal_pointing::error::{ConfigError, Error};
use pedestal_pointing::{parse_config, Degrees};

use crate::common::{config, CONFIG};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    assert!(validate_config(&config()).is_ok());
}

/// Test that parsing runs validation too.
#[test]
fn test_parse_rejects_out_of_range_reference() {
    let toml_str = CONFIG.replacen("zenith_encoder_value = 1024", "zenith_encoder_value = 4096", 1);

    let result = parse_config(&toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReferenceOutOfRange {
            value: 4096,
            encoder_max: 4096,
        }))
    ));
}

/// Test validation fails for an odd encoder resolution.
#[test]
fn test_odd_encoder_max() {
    let mut config = config();
    config.encoder_max = 4097;

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidEncoderMax(4097)))
    ));
}

/// Test validation fails for a zero gear reduction on either axis.
#[test]
fn test_zero_gear_reduction() {
    let mut config = config();
    config.elevation.drive.gear_reduction = 0.0;

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidGearReduction(_)))
    ));
}

/// Test validation fails for a non-positive rotation limit.
#[test]
fn test_non_positive_max_rotation() {
    let mut config = config();
    config.azimuth.max_rotation = Degrees(0.0);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidMaxRotation(_)))
    ));
}

/// Test validation fails for an infinite rotation limit.
#[test]
fn test_infinite_max_rotation() {
    let mut config = config();
    config.azimuth.max_rotation = Degrees(f32::INFINITY);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidMaxRotation(_)))
    ));

    let toml_str = CONFIG.replacen("max_rotation_deg = 540.0", "max_rotation_deg = inf", 1);
    assert!(matches!(
        parse_config(&toml_str),
        Err(Error::Config(ConfigError::InvalidMaxRotation(_)))
    ));
}

/// Test validation fails for an infinite gear reduction.
#[test]
fn test_infinite_gear_reduction() {
    let mut config = config();
    config.azimuth.drive.gear_reduction = f32::INFINITY;

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidGearReduction(_)))
    ));
}

/// Test validation of the zenith margin and drain angle ranges.
#[test]
fn test_angle_ranges() {
    let mut config = config();
    config.elevation.zenith_safety_margin = Degrees(91.0);
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidZenithMargin(_)))
    ));

    let mut config = crate::common::config();
    config.drain.elevation = Degrees(-5.0);
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDrainElevation(_)))
    ));
}

/// Test validation fails for inverted turn-counter bounds.
#[test]
fn test_inverted_turn_counter_bounds() {
    let mut config = config();
    config.azimuth.turn_counter = Some(TurnCounterBounds { min: 10, max: -10 });

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTurnCounterBounds { min: 10, max: -10 }))
    ));
}
