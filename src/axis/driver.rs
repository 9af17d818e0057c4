//! One rotational degree of freedom: an actuator, its sensor and geometry.

use crate::config::{AxisGeometry, Degrees};
use crate::error::{AxisError, AxisId, Result};
use crate::hardware::{Actuator, PositionSensor, TurnCounter};

/// A planned shortest-path move in encoder counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMove {
    /// Sensor reading the move was planned from.
    pub current: i32,
    /// Target encoder value.
    pub target: i32,
    /// Signed delta, `|delta| <= encoder_max / 2`.
    pub delta: i32,
}

/// Axis owning its actuator and sensor.
///
/// Generic over:
/// - `A`: actuator (must implement [`Actuator`])
/// - `S`: sensor (must implement [`PositionSensor`])
pub struct Axis<A, S>
where
    A: Actuator,
    S: PositionSensor,
{
    id: AxisId,
    actuator: A,
    sensor: S,
    geometry: AxisGeometry,
    invert_direction: bool,
}

impl<A, S> Axis<A, S>
where
    A: Actuator,
    S: PositionSensor,
{
    /// Create an axis.
    ///
    /// With `invert_direction` set, positive encoder deltas are sent to the
    /// actuator as negative step counts.
    pub fn new(id: AxisId, actuator: A, sensor: S, geometry: AxisGeometry, invert_direction: bool) -> Self {
        Self {
            id,
            actuator,
            sensor,
            geometry,
            invert_direction,
        }
    }

    /// Conversion parameters.
    #[inline]
    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    /// Read the wrapped sensor position.
    pub fn read_position(&mut self) -> Result<i32> {
        let position = self
            .sensor
            .read_position()
            .map_err(|_| AxisError::Sensor(self.id))?;
        Ok(position as i32)
    }

    /// Read the sensor and plan the shortest move to `angle`.
    ///
    /// `angle` must already be normalized or clamped by the caller.
    pub fn plan(&mut self, angle: Degrees) -> Result<AxisMove> {
        let target = self.geometry.target_counts(angle);
        let current = self.read_position()?;
        let delta = self.geometry.shortest_delta(target, current);
        Ok(AxisMove {
            current,
            target,
            delta,
        })
    }

    /// Command a relative move in sensor direction, applying mount orientation.
    pub fn step(&mut self, steps: i64) -> Result<()> {
        let steps = if self.invert_direction { -steps } else { steps };
        self.actuator
            .step(steps)
            .map_err(|_| AxisError::Actuator(self.id))?;
        Ok(())
    }

    /// Release the actuator and sensor.
    pub fn release(self) -> (A, S) {
        (self.actuator, self.sensor)
    }
}

impl<A, S> Axis<A, S>
where
    A: Actuator,
    S: TurnCounter,
{
    /// Read the sensor's signed turn counter.
    pub fn read_turn_count(&mut self) -> Result<i32> {
        let turns = self
            .sensor
            .read_turn_count()
            .map_err(|_| AxisError::Sensor(self.id))?;
        Ok(turns)
    }
}
