//! Hardware seams of the pedestal.
//!
//! The controller talks to its actuators and sensors only through these
//! traits. Reference drivers built on embedded-hal 1.0 are provided for a
//! STEP/DIR stepper driver and the AMT22 absolute SPI encoder.

mod amt22;
mod stepper;

pub use amt22::{decode_word, Amt22, Amt22MultiTurn, Resolution, ENCODER_SPI_MODE};
pub use stepper::StepperActuator;

/// Relative-move stepper actuator.
///
/// `step` must not return before the motion has completed (or has been
/// handed to a lower layer that serializes motion on this axis): the next
/// command's target depends on a sensor read taken after this one settles.
pub trait Actuator {
    /// Driver error type.
    type Error: core::fmt::Debug;

    /// Move by `steps` microsteps; the sign selects the direction.
    fn step(&mut self, steps: i64) -> Result<(), Self::Error>;
}

/// Absolute single-turn position sensor.
pub trait PositionSensor {
    /// Driver error type.
    type Error: core::fmt::Debug;

    /// Current wrapped position in `[0, encoder_max)`.
    fn read_position(&mut self) -> Result<u16, Self::Error>;
}

/// Position sensor that also counts full revolutions.
pub trait TurnCounter: PositionSensor {
    /// Signed count of wraps of [`PositionSensor::read_position`].
    fn read_turn_count(&mut self) -> Result<i32, Self::Error>;
}

impl<T: Actuator + ?Sized> Actuator for &mut T {
    type Error = T::Error;

    #[inline]
    fn step(&mut self, steps: i64) -> Result<(), Self::Error> {
        T::step(self, steps)
    }
}

impl<T: PositionSensor + ?Sized> PositionSensor for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_position(&mut self) -> Result<u16, Self::Error> {
        T::read_position(self)
    }
}

impl<T: TurnCounter + ?Sized> TurnCounter for &mut T {
    #[inline]
    fn read_turn_count(&mut self) -> Result<i32, Self::Error> {
        T::read_turn_count(self)
    }
}
