//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles and microstep divisors to
//! prevent unit confusion at compile time.

use serde::Deserialize;

use crate::error::ConfigError;

/// Angular position in degrees.
///
/// Used for configuration and the pointing API. Internally converted to
/// encoder counts and actuator steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Wrap into `[0, 360)` using a floor modulo.
    ///
    /// Any finite input, however negative, maps to the same physical direction.
    pub fn normalized(self) -> Self {
        let mut wrapped = libm::fmodf(self.0, 360.0);
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        // -1e-6 + 360.0 rounds to 360.0 in f32
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        Self(wrapped)
    }

    /// Clamp into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Degrees, max: Degrees) -> Self {
        if self.0 > max.0 {
            max
        } else if self.0 < min.0 {
            min
        } else {
            self
        }
    }
}

/// Microstep divisor (1, 2, 4, 8, 16, 32, 64, 128, 256).
///
/// Validated at construction to be a power of 2 within the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Microsteps(u16);

impl Microsteps {
    /// Full step (no microstepping).
    pub const FULL: Self = Self(1);
    /// Eighth step.
    pub const EIGHTH: Self = Self(8);
    /// Sixteenth step.
    pub const SIXTEENTH: Self = Self(16);

    const VALID_VALUES: [u16; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

    /// Create a new Microsteps value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrosteps` if the value is not a valid power of 2.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if Self::VALID_VALUES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidMicrosteps(value))
        }
    }

    /// Get the raw divisor value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for Microsteps {
    fn default() -> Self {
        Self::FULL
    }
}

impl<'de> Deserialize<'de> for Microsteps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        Microsteps::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
