//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::PedestalConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use pedestal_pointing::load_config;
///
/// let config = load_config("pedestal.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PedestalConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<PedestalConfig> {
    let config: PedestalConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
encoder_max = 4096

[azimuth]
north_encoder_value = 512
max_rotation_deg = 540.0

[azimuth.drive]
steps_per_revolution = 200
microsteps = 16
gear_reduction = 10.0

[elevation]
zenith_encoder_value = 3000
zenith_safety_margin_deg = 5.0

[elevation.drive]
steps_per_revolution = 200
microsteps = 8
gear_reduction = 20.0
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config(BASE).unwrap();
        assert_eq!(config.encoder_max, 4096);
        assert_eq!(config.azimuth.north_encoder_value, 512);
        assert_eq!(config.elevation.drive.microsteps_per_turn(), 1600);
    }

    #[test]
    fn test_parse_rejects_reference_outside_encoder() {
        let toml = BASE.replace("north_encoder_value = 512", "north_encoder_value = 4096");
        let result = parse_config(&toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ReferenceOutOfRange { value: 4096, .. }))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_config("encoder_max = \"lots\"");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/pedestal.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
