//! Two-axis pedestal controller.

use embedded_hal::delay::DelayNs;

use crate::axis::{Axis, CableWrap};
use crate::config::{Degrees, DrainConfig, ElevationLimits};
use crate::error::Result;
use crate::hardware::{Actuator, PositionSensor, TurnCounter};

use super::builder::PedestalBuilder;
use super::pointing::{fold_signed, Pointing};

/// Azimuth/elevation pedestal.
///
/// Every operation reads the sensors afresh before commanding a move, so
/// no position is cached between calls. Methods take `&mut self`: commands
/// are issued one at a time and each returns only after its moves have
/// completed.
///
/// Generic over:
/// - `AZA`, `ELA`: azimuth and elevation actuators
/// - `AZS`: azimuth sensor, which must count turns
/// - `ELS`: elevation sensor
/// - `DELAY`: delay provider for the drain hold
pub struct Pedestal<AZA, AZS, ELA, ELS, DELAY>
where
    AZA: Actuator,
    AZS: TurnCounter,
    ELA: Actuator,
    ELS: PositionSensor,
    DELAY: DelayNs,
{
    azimuth: Axis<AZA, AZS>,
    elevation: Axis<ELA, ELS>,
    cable_wrap: CableWrap,
    elevation_limits: ElevationLimits,
    drain: DrainConfig,
    delay: DELAY,
}

impl<AZA, AZS, ELA, ELS, DELAY> Pedestal<AZA, AZS, ELA, ELS, DELAY>
where
    AZA: Actuator,
    AZS: TurnCounter,
    ELA: Actuator,
    ELS: PositionSensor,
    DELAY: DelayNs,
{
    /// Create a builder.
    pub fn builder() -> PedestalBuilder<AZA, AZS, ELA, ELS, DELAY> {
        PedestalBuilder::new()
    }

    pub(super) fn from_parts(
        azimuth: Axis<AZA, AZS>,
        elevation: Axis<ELA, ELS>,
        cable_wrap: CableWrap,
        elevation_limits: ElevationLimits,
        drain: DrainConfig,
        delay: DELAY,
    ) -> Self {
        Self {
            azimuth,
            elevation,
            cable_wrap,
            elevation_limits,
            drain,
            delay,
        }
    }

    /// Turn count captured at startup.
    #[inline]
    pub fn init_turn_count(&self) -> i32 {
        self.cable_wrap.init_turn_count()
    }

    /// Cable-wrap policy.
    #[inline]
    pub fn cable_wrap(&self) -> &CableWrap {
        &self.cable_wrap
    }

    /// Elevation travel window.
    #[inline]
    pub fn elevation_limits(&self) -> ElevationLimits {
        self.elevation_limits
    }

    /// Point the mount at `azimuth` degrees from north and `elevation`
    /// degrees above the horizon.
    ///
    /// Any azimuth is accepted and wrapped into `[0, 360)`; elevation is
    /// clamped into the travel window. Errors come only from the hardware.
    pub fn point_to(&mut self, azimuth: Degrees, elevation: Degrees) -> Result<()> {
        self.point_azimuth(azimuth)?;
        self.point_elevation(elevation)
    }

    fn point_azimuth(&mut self, azimuth: Degrees) -> Result<()> {
        let azimuth = azimuth.normalized();
        let planned = self.azimuth.plan(azimuth)?;
        let geometry = *self.azimuth.geometry();

        let turn_count = self.azimuth.read_turn_count()?;
        let predicted = self.cable_wrap.predicted_rotation(
            turn_count,
            planned.current,
            planned.delta,
            geometry.encoder_max,
        );
        if let Some(correction) = self
            .cable_wrap
            .corrective_steps(predicted, geometry.full_turn_steps())
        {
            warn!(
                "azimuth: predicted rotation {} exceeds {}, correcting by {} steps",
                predicted.0,
                self.cable_wrap.max_rotation().0,
                correction
            );
            self.azimuth.step(correction)?;
        }

        let steps = geometry.counts_to_steps(planned.delta);
        debug!(
            "azimuth: {} deg, counts {} -> {} (delta {}), {} steps",
            azimuth.0,
            planned.current,
            planned.target,
            planned.delta,
            steps
        );
        self.azimuth.step(steps)
    }

    fn point_elevation(&mut self, elevation: Degrees) -> Result<()> {
        let elevation = self.elevation_limits.apply(elevation);
        let planned = self.elevation.plan(elevation)?;
        let steps = self.elevation.geometry().counts_to_steps(planned.delta);
        debug!(
            "elevation: {} deg, counts {} -> {} (delta {}), {} steps",
            elevation.0,
            planned.current,
            planned.target,
            planned.delta,
            steps
        );
        self.elevation.step(steps)
    }

    /// Remove every azimuth turn accumulated since startup.
    ///
    /// Moves by whole turns straight from the turn counter, without the
    /// shortest-path planning of [`point_to`](Self::point_to).
    pub fn untangle(&mut self) -> Result<()> {
        let turn_count = self.azimuth.read_turn_count()?;
        let steps = self
            .cable_wrap
            .unwind_steps(turn_count, self.azimuth.geometry());
        info!(
            "untangle: turn count {} (startup {}), {} steps",
            turn_count,
            self.cable_wrap.init_turn_count(),
            steps
        );
        self.azimuth.step(steps)
    }

    /// Untangle, then park at north and the highest permitted elevation.
    pub fn go_home(&mut self) -> Result<()> {
        self.untangle()?;
        let park = self.elevation_limits.max;
        info!("go home: parking at elevation {}", park.0);
        self.point_to(Degrees(0.0), park)
    }

    /// Tilt to the drain elevation, hold, then go home.
    pub fn empty_water(&mut self) -> Result<()> {
        info!(
            "empty water: tilting to {} for {} ms",
            self.drain.elevation.0,
            self.drain.hold_ms
        );
        self.point_to(Degrees(0.0), self.drain.elevation)?;
        self.delay.delay_ms(self.drain.hold_ms);
        self.go_home()
    }

    /// Read the current attitude. No actuator is commanded.
    pub fn pointing(&mut self) -> Result<Pointing> {
        let az_counts = self.azimuth.read_position()?;
        let turn_count = self.azimuth.read_turn_count()?;
        let el_counts = self.elevation.read_position()?;

        let az_geometry = self.azimuth.geometry();
        let el_geometry = self.elevation.geometry();

        Ok(Pointing {
            azimuth: az_geometry.counts_to_angle(az_counts as u16),
            elevation: fold_signed(el_geometry.counts_to_angle(el_counts as u16)),
            cable_rotation: self
                .cable_wrap
                .rotation(turn_count, az_counts, az_geometry.encoder_max),
        })
    }

    /// Release the hardware handles.
    ///
    /// Returns `(azimuth actuator, azimuth sensor, elevation actuator,
    /// elevation sensor, delay)`.
    pub fn release(self) -> (AZA, AZS, ELA, ELS, DELAY) {
        let (az_actuator, az_sensor) = self.azimuth.release();
        let (el_actuator, el_sensor) = self.elevation.release();
        (az_actuator, az_sensor, el_actuator, el_sensor, self.delay)
    }
}
