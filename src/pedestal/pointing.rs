//! Mount attitude readback.

use crate::config::Degrees;

/// Current attitude of the mount, computed from the sensors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointing {
    /// Azimuth from north, in `[0, 360)`.
    pub azimuth: Degrees,
    /// Elevation above the horizon, in `(-180, 180]`.
    pub elevation: Degrees,
    /// Cumulative azimuth rotation since startup.
    pub cable_rotation: Degrees,
}

/// Fold an angle in `[0, 360)` into `(-180, 180]`.
pub(crate) fn fold_signed(angle: Degrees) -> Degrees {
    if angle.0 > 180.0 {
        Degrees(angle.0 - 360.0)
    } else {
        angle
    }
}
