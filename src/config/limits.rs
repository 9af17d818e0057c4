//! Travel limits: elevation clamp and turn-counter bounds.

use serde::Deserialize;

use super::units::Degrees;

/// Elevation travel window in degrees.
///
/// Requests outside the window are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationLimits {
    /// Lowest commandable elevation (the horizon).
    pub min: Degrees,
    /// Highest commandable elevation (zenith minus safety margin).
    pub max: Degrees,
}

impl ElevationLimits {
    /// Window `[0, 90 - zenith_safety_margin]`.
    pub fn from_zenith_margin(margin: Degrees) -> Self {
        Self {
            min: Degrees(0.0),
            max: Degrees(90.0 - margin.0),
        }
    }

    /// Check if an elevation is within limits.
    pub fn contains(&self, elevation: Degrees) -> bool {
        elevation.0 >= self.min.0 && elevation.0 <= self.max.0
    }

    /// Clamp a requested elevation into the window.
    pub fn apply(&self, target: Degrees) -> Degrees {
        target.clamp(self.min, self.max)
    }
}

/// Representable range of the azimuth sensor's turn counter.
///
/// When configured, the turn count captured at startup is checked against
/// these bounds so later arithmetic can never wrap the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TurnCounterBounds {
    /// Lowest value the counter can report.
    pub min: i32,
    /// Highest value the counter can report.
    pub max: i32,
}

impl TurnCounterBounds {
    /// Check if bounds are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check that `value` leaves at least `headroom` turns to either bound.
    pub fn admits(&self, value: i32, headroom: i32) -> bool {
        let value = value as i64;
        let headroom = headroom as i64;
        value > self.min as i64 + headroom && value < self.max as i64 - headroom
    }
}
