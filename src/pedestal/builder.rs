//! Builder for Pedestal.

use embedded_hal::delay::DelayNs;

use crate::axis::{Axis, CableWrap};
use crate::config::{validate_config, AxisGeometry, PedestalConfig};
use crate::error::{AxisId, ConfigError, Error, ReferenceError, Result};
use crate::hardware::{Actuator, PositionSensor, TurnCounter};

use super::controller::Pedestal;

/// Builder for creating Pedestal instances.
///
/// `build` talks to the hardware: it flushes both sensors and captures the
/// azimuth turn count every later cable-wrap decision is relative to.
pub struct PedestalBuilder<AZA, AZS, ELA, ELS, DELAY>
where
    AZA: Actuator,
    AZS: TurnCounter,
    ELA: Actuator,
    ELS: PositionSensor,
    DELAY: DelayNs,
{
    config: Option<PedestalConfig>,
    azimuth: Option<(AZA, AZS)>,
    elevation: Option<(ELA, ELS)>,
    delay: Option<DELAY>,
}

impl<AZA, AZS, ELA, ELS, DELAY> Default for PedestalBuilder<AZA, AZS, ELA, ELS, DELAY>
where
    AZA: Actuator,
    AZS: TurnCounter,
    ELA: Actuator,
    ELS: PositionSensor,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<AZA, AZS, ELA, ELS, DELAY> PedestalBuilder<AZA, AZS, ELA, ELS, DELAY>
where
    AZA: Actuator,
    AZS: TurnCounter,
    ELA: Actuator,
    ELS: PositionSensor,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            azimuth: None,
            elevation: None,
            delay: None,
        }
    }

    /// Set the configuration.
    pub fn config(mut self, config: PedestalConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the azimuth actuator and its turn-counting sensor.
    pub fn azimuth(mut self, actuator: AZA, sensor: AZS) -> Self {
        self.azimuth = Some((actuator, sensor));
        self
    }

    /// Set the elevation actuator and sensor.
    pub fn elevation(mut self, actuator: ELA, sensor: ELS) -> Self {
        self.elevation = Some((actuator, sensor));
        self
    }

    /// Set the delay provider used for warm-up and the drain hold.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Validate, warm up the sensors and capture the startup reference.
    ///
    /// # Errors
    ///
    /// Returns an error if a component is missing, the configuration is
    /// invalid, the startup turn count cannot be read, or it lies outside
    /// the configured turn-counter bounds.
    pub fn build(self) -> Result<Pedestal<AZA, AZS, ELA, ELS, DELAY>> {
        let config = self
            .config
            .ok_or(Error::Config(ConfigError::MissingComponent("config")))?;
        let (az_actuator, az_sensor) = self
            .azimuth
            .ok_or(Error::Config(ConfigError::MissingComponent("azimuth")))?;
        let (el_actuator, el_sensor) = self
            .elevation
            .ok_or(Error::Config(ConfigError::MissingComponent("elevation")))?;
        let mut delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingComponent("delay")))?;

        validate_config(&config)?;

        let az_geometry = AxisGeometry::from_drive(
            &config.azimuth.drive,
            config.encoder_max,
            config.azimuth.north_encoder_value,
        );
        let el_geometry = AxisGeometry::from_drive(
            &config.elevation.drive,
            config.encoder_max,
            config.horizon_encoder_value(),
        );

        let mut azimuth = Axis::new(
            AxisId::Azimuth,
            az_actuator,
            az_sensor,
            az_geometry,
            config.azimuth.invert_direction,
        );
        let mut elevation = Axis::new(
            AxisId::Elevation,
            el_actuator,
            el_sensor,
            el_geometry,
            config.elevation.invert_direction,
        );

        // the first reads after power-up are unreliable
        for _ in 0..config.warmup.reads {
            let _ = azimuth.read_position();
            delay.delay_ms(config.warmup.interval_ms);
            let _ = elevation.read_position();
            delay.delay_ms(config.warmup.interval_ms);
        }

        let init_turn_count = azimuth.read_turn_count()?;
        let cable_wrap = CableWrap::new(init_turn_count, config.azimuth.max_rotation);

        if let Some(bounds) = config.azimuth.turn_counter {
            if !bounds.admits(init_turn_count, cable_wrap.headroom_turns()) {
                return Err(ReferenceError::TurnCountOutOfRange {
                    value: init_turn_count,
                    min: bounds.min,
                    max: bounds.max,
                }
                .into());
            }
        }

        info!(
            "pedestal ready after {} warm-up reads, startup turn count {}",
            config.warmup.reads,
            init_turn_count
        );

        Ok(Pedestal::from_parts(
            azimuth,
            elevation,
            cable_wrap,
            config.elevation_limits(),
            config.drain,
            delay,
        ))
    }
}
