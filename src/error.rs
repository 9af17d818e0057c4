//! Error types for pedestal-pointing.
//!
//! Provides unified error handling across configuration, startup reference
//! capture and axis hardware access.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all pedestal-pointing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Actuator or sensor access failed
    Axis(AxisError),
    /// Startup reference is unusable
    Reference(ReferenceError),
}

/// Identifies one of the two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    /// Horizontal rotation, zero at north, growing toward east.
    Azimuth,
    /// Vertical rotation, zero at the horizon, growing toward zenith.
    Elevation,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (must be power of 2: 1, 2, 4, 8, 16, 32, 64, 128, 256)
    InvalidMicrosteps(u16),
    /// Encoder resolution must be even and at least 4
    InvalidEncoderMax(u16),
    /// Encoder reference value outside `[0, encoder_max)`
    ReferenceOutOfRange {
        /// Configured reference value
        value: u16,
        /// Encoder resolution
        encoder_max: u16,
    },
    /// Invalid gear reduction (must be > 0)
    InvalidGearReduction(f32),
    /// Invalid azimuth rotation limit (must be > 0)
    InvalidMaxRotation(f32),
    /// Invalid zenith safety margin (must be within 0-90)
    InvalidZenithMargin(f32),
    /// Invalid drain elevation (must be within 0-90)
    InvalidDrainElevation(f32),
    /// Invalid turn-counter bounds (min must be < max)
    InvalidTurnCounterBounds {
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
    /// A component required by the builder was not supplied
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis hardware errors.
///
/// The driver-specific error is not retained; the controller never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisError {
    /// Step command failed
    Actuator(AxisId),
    /// Position or turn-count read failed
    Sensor(AxisId),
}

/// Startup reference errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceError {
    /// Captured turn count too close to the counter's representable range
    TurnCountOutOfRange {
        /// Captured turn count
        value: i32,
        /// Counter lower bound
        min: i32,
        /// Counter upper bound
        max: i32,
    },
}

/// Stepper driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

/// Encoder driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// SPI transaction failed
    Bus,
    /// Response word failed its check bits
    Checksum(u16),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
            Error::Reference(e) => write!(f, "Reference error: {}", e),
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::Azimuth => write!(f, "azimuth"),
            AxisId::Elevation => write!(f, "elevation"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            ConfigError::InvalidEncoderMax(v) => {
                write!(f, "Invalid encoder resolution: {}. Must be even and >= 4", v)
            }
            ConfigError::ReferenceOutOfRange { value, encoder_max } => {
                write!(f, "Encoder reference {} outside [0, {})", value, encoder_max)
            }
            ConfigError::InvalidGearReduction(v) => write!(f, "Invalid gear reduction: {}. Must be > 0", v),
            ConfigError::InvalidMaxRotation(v) => write!(f, "Invalid max rotation: {}. Must be > 0", v),
            ConfigError::InvalidZenithMargin(v) => {
                write!(f, "Invalid zenith safety margin: {}. Must be within 0-90", v)
            }
            ConfigError::InvalidDrainElevation(v) => {
                write!(f, "Invalid drain elevation: {}. Must be within 0-90", v)
            }
            ConfigError::InvalidTurnCounterBounds { min, max } => {
                write!(f, "Invalid turn counter bounds: min ({}) must be < max ({})", min, max)
            }
            ConfigError::MissingComponent(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::Actuator(axis) => write!(f, "{} actuator command failed", axis),
            AxisError::Sensor(axis) => write!(f, "{} sensor read failed", axis),
        }
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceError::TurnCountOutOfRange { value, min, max } => {
                write!(f, "Startup turn count {} too close to counter range [{}, {}]", value, min, max)
            }
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Bus => write!(f, "SPI transaction failed"),
            SensorError::Checksum(word) => write!(f, "Check bits mismatch in word {:#06x}", word),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<ReferenceError> for Error {
    fn from(e: ReferenceError) -> Self {
        Error::Reference(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for ReferenceError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {}
