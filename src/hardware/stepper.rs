//! STEP/DIR stepper driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::DriveConfig;
use crate::error::MotorError;

use super::Actuator;

/// Width of the STEP pulse in microseconds.
const PULSE_WIDTH_US: u32 = 2;

/// Blocking stepper driver with a fixed step period.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepperActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = positive, unless inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Time between rising edges, in microseconds.
    step_period_us: u32,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Last level written to DIR (cached to avoid unnecessary pin writes).
    dir_high: Option<bool>,
}

impl<STEP, DIR, DELAY> StepperActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver with an explicit step period.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY, step_period_us: u32) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            step_period_us,
            invert_direction: false,
            dir_high: None,
        }
    }

    /// Create a driver using the step period of a drive configuration.
    pub fn from_drive_config(step_pin: STEP, dir_pin: DIR, delay: DELAY, drive: &DriveConfig) -> Self {
        Self::new(step_pin, dir_pin, delay, drive.step_period_us)
    }

    /// Invert DIR pin logic (for motors wired in reverse).
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn set_direction(&mut self, forward: bool) -> Result<(), MotorError> {
        let high = forward != self.invert_direction;
        if self.dir_high == Some(high) {
            return Ok(());
        }

        if high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.dir_high = Some(high);
        Ok(())
    }
}

impl<STEP, DIR, DELAY> Actuator for StepperActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    type Error = MotorError;

    fn step(&mut self, steps: i64) -> Result<(), MotorError> {
        if steps == 0 {
            return Ok(());
        }

        self.set_direction(steps > 0)?;

        let rest_us = self.step_period_us.saturating_sub(PULSE_WIDTH_US);
        for _ in 0..steps.unsigned_abs() {
            self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
            self.delay.delay_us(PULSE_WIDTH_US);
            self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
            if rest_us > 0 {
                self.delay.delay_us(rest_us);
            }
        }

        Ok(())
    }
}
