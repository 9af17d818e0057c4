//! Pedestal configuration - root configuration structure.

use serde::Deserialize;

use super::drive::DriveConfig;
use super::limits::{ElevationLimits, TurnCounterBounds};
use super::units::Degrees;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct PedestalConfig {
    /// Encoder counts per sensor-shaft revolution, shared by both axes.
    pub encoder_max: u16,

    /// Encoder bus settings.
    #[serde(default)]
    pub bus: BusConfig,

    /// Startup sensor flush.
    #[serde(default)]
    pub warmup: WarmupConfig,

    /// Azimuth axis.
    pub azimuth: AzimuthConfig,

    /// Elevation axis.
    pub elevation: ElevationConfig,

    /// Water drain maneuver.
    #[serde(default)]
    pub drain: DrainConfig,
}

impl PedestalConfig {
    /// Elevation travel window derived from the zenith safety margin.
    pub fn elevation_limits(&self) -> ElevationLimits {
        ElevationLimits::from_zenith_margin(self.elevation.zenith_safety_margin)
    }

    /// Encoder value of the horizon.
    ///
    /// The zenith reference rotated back by a quarter turn; `encoder_max` is
    /// added first so a zenith below a quarter turn stays positive.
    pub fn horizon_encoder_value(&self) -> u16 {
        let max = self.encoder_max as i32;
        let zenith = self.elevation.zenith_encoder_value as i32;
        ((zenith - max / 4 + max) % max) as u16
    }
}

/// Encoder bus settings.
///
/// Mode and bit order are fixed by the encoder; only the clock is tunable.
/// The pedestal never reads it: it is for the code that constructs the
/// HAL `SpiDevice` handed to the encoder drivers, and a missing value
/// defaults to 500 kHz.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BusConfig {
    /// SPI clock in hertz.
    #[serde(default = "default_clock_hz")]
    pub clock_hz: u32,
}

fn default_clock_hz() -> u32 {
    500_000
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            clock_hz: default_clock_hz(),
        }
    }
}

/// Discard reads performed before the startup reference is trusted.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WarmupConfig {
    /// Reads per sensor.
    #[serde(default = "default_warmup_reads")]
    pub reads: u8,

    /// Delay after each read, in milliseconds.
    #[serde(default = "default_warmup_interval_ms")]
    pub interval_ms: u32,
}

fn default_warmup_reads() -> u8 {
    10
}

fn default_warmup_interval_ms() -> u32 {
    50
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            reads: default_warmup_reads(),
            interval_ms: default_warmup_interval_ms(),
        }
    }
}

/// Azimuth axis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AzimuthConfig {
    /// Drive train.
    pub drive: DriveConfig,

    /// Encoder value when the mount faces north.
    pub north_encoder_value: u16,

    /// Cumulative rotation from the startup reference allowed before a
    /// corrective full turn is inserted.
    #[serde(rename = "max_rotation_deg")]
    pub max_rotation: Degrees,

    /// Invert the actuator direction relative to the encoder count direction.
    #[serde(default)]
    pub invert_direction: bool,

    /// Optional turn-counter range used to validate the startup reference.
    #[serde(default)]
    pub turn_counter: Option<TurnCounterBounds>,
}

/// Elevation axis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ElevationConfig {
    /// Drive train.
    pub drive: DriveConfig,

    /// Encoder value when the dish points at the zenith.
    pub zenith_encoder_value: u16,

    /// Elevation is never commanded above `90 - margin`.
    #[serde(rename = "zenith_safety_margin_deg")]
    pub zenith_safety_margin: Degrees,

    /// Invert the actuator direction relative to the encoder count direction.
    ///
    /// The elevation actuator is mounted reversed, hence the default.
    #[serde(default = "default_true")]
    pub invert_direction: bool,
}

fn default_true() -> bool {
    true
}

/// Water drain maneuver parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DrainConfig {
    /// Tilt angle that lets water run off the dish.
    #[serde(default = "default_drain_elevation", rename = "elevation_deg")]
    pub elevation: Degrees,

    /// Time spent at the drain angle, in milliseconds.
    #[serde(default = "default_drain_hold_ms")]
    pub hold_ms: u32,
}

fn default_drain_elevation() -> Degrees {
    Degrees(60.0)
}

fn default_drain_hold_ms() -> u32 {
    3000
}

impl Default for DrainConfig {
    fn default() -> Self {
        Self {
            elevation: default_drain_elevation(),
            hold_ms: default_drain_hold_ms(),
        }
    }
}
