//! Cable-wrap protection for the azimuth axis.
//!
//! The azimuth cable run tolerates a bounded number of turns away from the
//! position the mount was in at startup. Rotation is tracked through the
//! sensor's turn counter relative to the value captured then.

use crate::config::{AxisGeometry, Degrees};

/// Cumulative-rotation policy anchored at the startup turn count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableWrap {
    /// Turn counter value captured at startup.
    init_turn_count: i32,
    /// Allowed rotation either side of the reference.
    max_rotation: Degrees,
}

impl CableWrap {
    /// Anchor the policy at `init_turn_count`.
    pub fn new(init_turn_count: i32, max_rotation: Degrees) -> Self {
        Self {
            init_turn_count,
            max_rotation,
        }
    }

    /// Turn counter value captured at startup.
    #[inline]
    pub fn init_turn_count(&self) -> i32 {
        self.init_turn_count
    }

    /// Allowed rotation either side of the reference.
    #[inline]
    pub fn max_rotation(&self) -> Degrees {
        self.max_rotation
    }

    /// Whole turns the counter must be able to move either way from the reference.
    pub fn headroom_turns(&self) -> i32 {
        (libm::ceilf(self.max_rotation.0 / 360.0) as i32).saturating_add(1)
    }

    /// Rotation since startup for a sensor at `position` on turn `turn_count`.
    pub fn rotation(&self, turn_count: i32, position: i32, encoder_max: u16) -> Degrees {
        let turns = (turn_count - self.init_turn_count) as f32;
        Degrees((turns + position as f32 / encoder_max as f32) * 360.0)
    }

    /// Rotation since startup once a pending `delta` from `current` is applied.
    ///
    /// The partial turn of `current + delta` counts as a fraction, so the
    /// limit applies to the actual end angle rather than whole turns only.
    pub fn predicted_rotation(&self, turn_count: i32, current: i32, delta: i32, encoder_max: u16) -> Degrees {
        self.rotation(turn_count, current + delta, encoder_max)
    }

    /// Corrective full turn, in sensor direction, needed before a move that
    /// would end at `predicted`.
    ///
    /// Returns `None` while the prediction stays within the limit.
    pub fn corrective_steps(&self, predicted: Degrees, full_turn_steps: i64) -> Option<i64> {
        if predicted.0 > self.max_rotation.0 {
            Some(-full_turn_steps)
        } else if predicted.0 < -self.max_rotation.0 {
            Some(full_turn_steps)
        } else {
            None
        }
    }

    /// Steps that remove every turn accumulated since startup.
    ///
    /// The whole product is truncated once, so a fractional gear reduction
    /// does not lose a step per turn.
    pub fn unwind_steps(&self, turn_count: i32, geometry: &AxisGeometry) -> i64 {
        let turns = turn_count as i64 - self.init_turn_count as i64;
        (turns as f64 * geometry.microsteps_per_turn as f64 * geometry.gear_reduction as f64) as i64
    }
}
