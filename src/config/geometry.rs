//! Axis geometry derived from configuration.
//!
//! Converts between real-world angles, encoder counts and actuator microsteps.

use super::drive::DriveConfig;
use super::units::Degrees;

/// Derived conversion parameters of one axis.
///
/// Computed once when the pedestal is built and used for every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    /// Encoder counts per sensor-shaft revolution.
    pub encoder_max: u16,

    /// Actuator-shaft revolutions per sensor-shaft revolution.
    pub gear_reduction: f32,

    /// Microsteps per actuator-shaft revolution.
    pub microsteps_per_turn: u32,

    /// Encoder value of the logical zero angle.
    pub zero_offset: u16,
}

impl AxisGeometry {
    /// Compute geometry from a drive configuration.
    pub fn from_drive(drive: &DriveConfig, encoder_max: u16, zero_offset: u16) -> Self {
        Self {
            encoder_max,
            gear_reduction: drive.gear_reduction,
            microsteps_per_turn: drive.microsteps_per_turn(),
            zero_offset,
        }
    }

    /// Actuator microsteps for one full sensor-shaft revolution.
    #[inline]
    pub fn full_turn_steps(&self) -> i64 {
        (self.microsteps_per_turn as f32 * self.gear_reduction) as i64
    }

    /// Encoder value for an angle already inside `[0, 360)`.
    ///
    /// Truncates toward zero before wrapping, so the result lies in
    /// `[0, encoder_max)`.
    pub fn target_counts(&self, angle: Degrees) -> i32 {
        let max = self.encoder_max as i32;
        let raw = (angle.0 / 360.0 * self.encoder_max as f32 + self.zero_offset as f32) as i32;
        raw.rem_euclid(max)
    }

    /// Signed count delta from `current` to `target` along the shorter way round.
    ///
    /// The result satisfies `|delta| <= encoder_max / 2` and
    /// `(current + delta) mod encoder_max == target`.
    pub fn shortest_delta(&self, target: i32, current: i32) -> i32 {
        let max = self.encoder_max as i32;
        let half = max / 2;
        let mut delta = target - current;
        if delta.abs() > half {
            if delta < 0 {
                delta += max;
            } else {
                delta -= max;
            }
        }
        delta
    }

    /// Actuator microsteps for a signed count delta, truncated toward zero.
    pub fn counts_to_steps(&self, delta: i32) -> i64 {
        (delta as f32 / self.encoder_max as f32
            * self.gear_reduction
            * self.microsteps_per_turn as f32) as i64
    }

    /// Angle of an encoder reading relative to the zero offset, in `[0, 360)`.
    pub fn counts_to_angle(&self, counts: u16) -> Degrees {
        let max = self.encoder_max as i32;
        let relative = (counts as i32 - self.zero_offset as i32).rem_euclid(max);
        Degrees(relative as f32 / max as f32 * 360.0)
    }
}
