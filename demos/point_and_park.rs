//! Example: Point a simulated pedestal, drain it and park it.
//!
//! This example demonstrates how to:
//! - Parse a pedestal configuration from TOML
//! - Drive `StepperActuator`s from plain `OutputPin`s
//! - Build a `Pedestal` over encoders implementing `TurnCounter`
//! - Read the attitude back after each maneuver
//!
//! The pins move a simulated shaft, so the encoders report where the
//! commanded pulses actually took the mount.
//!
//! Run with: `cargo run --example point_and_park --features std`

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use pedestal_pointing::hardware::{Resolution, StepperActuator, ENCODER_SPI_MODE};
use pedestal_pointing::{parse_config, AxisGeometry, Degrees, Pedestal, PositionSensor, Result, TurnCounter};

/// Simulated shaft, in actuator microsteps from power-up.
#[derive(Clone, Default)]
struct Shaft {
    steps: Rc<Cell<i64>>,
    forward: Rc<Cell<bool>>,
}

/// STEP pin advancing the shaft on each rising edge.
struct StepPin(Shaft);

impl embedded_hal::digital::ErrorType for StepPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for StepPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        let delta = if self.0.forward.get() { 1 } else { -1 };
        self.0.steps.set(self.0.steps.get() + delta);
        Ok(())
    }
}

/// DIR pin selecting the shaft direction.
struct DirPin(Shaft);

impl embedded_hal::digital::ErrorType for DirPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for DirPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.forward.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.forward.set(true);
        Ok(())
    }
}

/// Delay that returns immediately.
struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Absolute encoder geared to a simulated shaft.
struct Encoder {
    shaft: Shaft,
    steps_per_turn: i64,
    encoder_max: i64,
    offset: i64,
    /// -1 when the actuator is mounted reversed.
    sense: i64,
}

impl Encoder {
    fn counts(&self) -> i64 {
        self.offset + self.sense * self.shaft.steps.get() * self.encoder_max / self.steps_per_turn
    }
}

impl PositionSensor for Encoder {
    type Error = Infallible;

    fn read_position(&mut self) -> core::result::Result<u16, Infallible> {
        Ok(self.counts().rem_euclid(self.encoder_max) as u16)
    }
}

impl TurnCounter for Encoder {
    fn read_turn_count(&mut self) -> core::result::Result<i32, Infallible> {
        Ok(self.counts().div_euclid(self.encoder_max) as i32)
    }
}

fn main() -> Result<()> {
    println!("=== Point and Park Example ===\n");

    let config = parse_config(
        r#"
encoder_max = 4096

[azimuth]
north_encoder_value = 300
max_rotation_deg = 540.0

[azimuth.drive]
steps_per_revolution = 200
microsteps = 16
gear_reduction = 10.0
step_period_us = 10

[elevation]
zenith_encoder_value = 1500
zenith_safety_margin_deg = 5.0

[elevation.drive]
steps_per_revolution = 200
microsteps = 16
gear_reduction = 10.0
step_period_us = 10

[drain]
hold_ms = 100
"#,
    )?;

    let resolution = Resolution::Bits12;
    if config.encoder_max != resolution.encoder_max() {
        println!(
            "Config expects {} counts per turn, the encoders give {}",
            config.encoder_max,
            resolution.encoder_max()
        );
        return Ok(());
    }
    println!("Encoder bus: {} Hz, {:?}\n", config.bus.clock_hz, ENCODER_SPI_MODE);

    let az_shaft = Shaft::default();
    let el_shaft = Shaft::default();
    let steps_per_turn =
        AxisGeometry::from_drive(&config.azimuth.drive, config.encoder_max, 0).full_turn_steps();

    let az_actuator = StepperActuator::from_drive_config(
        StepPin(az_shaft.clone()),
        DirPin(az_shaft.clone()),
        NoDelay,
        &config.azimuth.drive,
    );
    let el_actuator = StepperActuator::from_drive_config(
        StepPin(el_shaft.clone()),
        DirPin(el_shaft.clone()),
        NoDelay,
        &config.elevation.drive,
    );
    let az_encoder = Encoder {
        shaft: az_shaft,
        steps_per_turn,
        encoder_max: resolution.encoder_max() as i64,
        offset: 8 * 4096 + 300,
        sense: 1,
    };
    let el_encoder = Encoder {
        shaft: el_shaft,
        steps_per_turn,
        encoder_max: resolution.encoder_max() as i64,
        offset: 476,
        sense: -1,
    };

    let mut pedestal = Pedestal::builder()
        .config(config)
        .azimuth(az_actuator, az_encoder)
        .elevation(el_actuator, el_encoder)
        .delay(NoDelay)
        .build()?;
    println!("Startup turn count: {}\n", pedestal.init_turn_count());

    let targets = [(350.0, 45.0), (120.0, 95.0), (-60.0, -10.0), (250.0, 30.0)];
    for (azimuth, elevation) in targets {
        pedestal.point_to(Degrees(azimuth), Degrees(elevation))?;
        let pointing = pedestal.pointing()?;
        println!(
            "point_to({:>6.1}, {:>5.1}) -> az {:>6.2}, el {:>5.2}, cable {:>7.2}",
            azimuth, elevation, pointing.azimuth.0, pointing.elevation.0, pointing.cable_rotation.0
        );
    }

    pedestal.empty_water()?;
    let pointing = pedestal.pointing()?;
    println!(
        "\nAfter empty_water: az {:.2}, el {:.2}, cable {:.2}",
        pointing.azimuth.0, pointing.elevation.0, pointing.cable_rotation.0
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
