//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DriveConfig, PedestalConfig};

/// Validate a pedestal configuration.
///
/// Checks:
/// - Encoder resolution is even and at least 4 counts
/// - North and zenith references are valid encoder values
/// - Gear reductions are positive and finite
/// - Rotation limit, zenith margin and drain angle are in range
/// - Turn-counter bounds, if given, are ordered
pub fn validate_config(config: &PedestalConfig) -> Result<()> {
    let max = config.encoder_max;
    if max < 4 || max % 2 != 0 {
        return Err(Error::Config(ConfigError::InvalidEncoderMax(max)));
    }

    if config.azimuth.north_encoder_value >= max {
        return Err(Error::Config(ConfigError::ReferenceOutOfRange {
            value: config.azimuth.north_encoder_value,
            encoder_max: max,
        }));
    }

    if config.elevation.zenith_encoder_value >= max {
        return Err(Error::Config(ConfigError::ReferenceOutOfRange {
            value: config.elevation.zenith_encoder_value,
            encoder_max: max,
        }));
    }

    validate_drive(&config.azimuth.drive)?;
    validate_drive(&config.elevation.drive)?;

    let max_rotation = config.azimuth.max_rotation.0;
    if !max_rotation.is_finite() || max_rotation <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMaxRotation(max_rotation)));
    }

    let margin = config.elevation.zenith_safety_margin.0;
    if !(0.0..=90.0).contains(&margin) {
        return Err(Error::Config(ConfigError::InvalidZenithMargin(margin)));
    }

    let drain = config.drain.elevation.0;
    if !(0.0..=90.0).contains(&drain) {
        return Err(Error::Config(ConfigError::InvalidDrainElevation(drain)));
    }

    if let Some(bounds) = config.azimuth.turn_counter {
        if !bounds.is_valid() {
            return Err(Error::Config(ConfigError::InvalidTurnCounterBounds {
                min: bounds.min,
                max: bounds.max,
            }));
        }
    }

    Ok(())
}

fn validate_drive(drive: &DriveConfig) -> Result<()> {
    if !drive.gear_reduction.is_finite() || drive.gear_reduction <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidGearReduction(
            drive.gear_reduction,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Microsteps;

    #[test]
    fn test_invalid_gear_reduction() {
        let drive = DriveConfig {
            steps_per_revolution: 200,
            microsteps: Microsteps::SIXTEENTH,
            gear_reduction: -1.0, // Invalid!
            step_period_us: 1000,
        };

        let result = validate_drive(&drive);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidGearReduction(_)))
        ));
    }

    #[test]
    fn test_nan_gear_reduction_rejected() {
        let drive = DriveConfig {
            steps_per_revolution: 200,
            microsteps: Microsteps::SIXTEENTH,
            gear_reduction: f32::NAN,
            step_period_us: 1000,
        };

        assert!(validate_drive(&drive).is_err());
    }

    #[test]
    fn test_infinite_gear_reduction_rejected() {
        let drive = DriveConfig {
            steps_per_revolution: 200,
            microsteps: Microsteps::SIXTEENTH,
            gear_reduction: f32::INFINITY,
            step_period_us: 1000,
        };

        assert!(validate_drive(&drive).is_err());
    }
}
