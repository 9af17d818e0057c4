//! Recording fakes for the hardware traits.
//!
//! All fakes share one `Rig`, so the order of reads, steps and delays
//! across both axes is visible in a single event log. With motion enabled
//! the rig also moves its simulated encoders by the commanded steps.

#![allow(dead_code)]

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use pedestal_pointing::config::PedestalConfig;
use pedestal_pointing::error::AxisId;
use pedestal_pointing::{parse_config, Actuator, Pedestal, PositionSensor, TurnCounter};

pub const ENCODER_MAX: i64 = 4096;
/// 200 steps x 16 microsteps x gear 10.
pub const FULL_TURN: i64 = 32_000;

pub const CONFIG: &str = r#"
encoder_max = 4096

[azimuth]
north_encoder_value = 0
max_rotation_deg = 540.0

[azimuth.drive]
steps_per_revolution = 200
microsteps = 16
gear_reduction = 10.0

[elevation]
zenith_encoder_value = 1024
zenith_safety_margin_deg = 5.0

[elevation.drive]
steps_per_revolution = 200
microsteps = 16
gear_reduction = 10.0
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Step(AxisId, i64),
    ReadPosition(AxisId),
    ReadTurns,
    DelayMs(u32),
    DelayNs(u32),
}

#[derive(Debug, Default)]
pub struct RigState {
    /// Azimuth encoder counts including whole turns.
    pub az_counts: f64,
    /// Elevation encoder counts.
    pub el_counts: f64,
    /// Move the encoders when the actuators step.
    pub motion: bool,
    pub fail_az_read: bool,
    pub fail_el_read: bool,
    pub fail_az_step: bool,
    pub events: Vec<Event>,
}

#[derive(Clone, Default)]
pub struct Rig(pub Rc<RefCell<RigState>>);

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_motion() -> Self {
        let rig = Self::new();
        rig.0.borrow_mut().motion = true;
        rig
    }

    pub fn set_azimuth(&self, turns: i64, position: i64) {
        self.0.borrow_mut().az_counts = (turns * ENCODER_MAX + position) as f64;
    }

    pub fn set_elevation(&self, position: i64) {
        self.0.borrow_mut().el_counts = position as f64;
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Step commands only, in order.
    pub fn steps(&self) -> Vec<(AxisId, i64)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Step(axis, steps) => Some((axis, steps)),
                _ => None,
            })
            .collect()
    }

    pub fn actuator(&self, axis: AxisId) -> FakeActuator {
        FakeActuator {
            rig: self.clone(),
            axis,
        }
    }

    pub fn azimuth_sensor(&self) -> FakeAzimuthSensor {
        FakeAzimuthSensor(self.clone())
    }

    pub fn elevation_sensor(&self) -> FakeElevationSensor {
        FakeElevationSensor(self.clone())
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay(self.clone())
    }

    fn state(&self) -> Ref<'_, RigState> {
        self.0.borrow()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }
}

fn wrapped(counts: f64) -> u16 {
    (counts.floor() as i64).rem_euclid(ENCODER_MAX) as u16
}

fn turns(counts: f64) -> i32 {
    (counts.floor() as i64).div_euclid(ENCODER_MAX) as i32
}

pub struct FakeActuator {
    rig: Rig,
    axis: AxisId,
}

impl Actuator for FakeActuator {
    type Error = ();

    fn step(&mut self, steps: i64) -> Result<(), ()> {
        self.rig.push(Event::Step(self.axis, steps));
        let mut state = self.rig.0.borrow_mut();
        if self.axis == AxisId::Azimuth && state.fail_az_step {
            return Err(());
        }
        if state.motion {
            let counts = steps as f64 * ENCODER_MAX as f64 / FULL_TURN as f64;
            match self.axis {
                AxisId::Azimuth => state.az_counts += counts,
                // the elevation actuator is mounted reversed
                AxisId::Elevation => state.el_counts -= counts,
            }
        }
        Ok(())
    }
}

pub struct FakeAzimuthSensor(Rig);

impl PositionSensor for FakeAzimuthSensor {
    type Error = ();

    fn read_position(&mut self) -> Result<u16, ()> {
        self.0.push(Event::ReadPosition(AxisId::Azimuth));
        let state = self.0.state();
        if state.fail_az_read {
            return Err(());
        }
        Ok(wrapped(state.az_counts))
    }
}

impl TurnCounter for FakeAzimuthSensor {
    fn read_turn_count(&mut self) -> Result<i32, ()> {
        self.0.push(Event::ReadTurns);
        let state = self.0.state();
        if state.fail_az_read {
            return Err(());
        }
        Ok(turns(state.az_counts))
    }
}

pub struct FakeElevationSensor(Rig);

impl PositionSensor for FakeElevationSensor {
    type Error = ();

    fn read_position(&mut self) -> Result<u16, ()> {
        self.0.push(Event::ReadPosition(AxisId::Elevation));
        let state = self.0.state();
        if state.fail_el_read {
            return Err(());
        }
        Ok(wrapped(state.el_counts))
    }
}

pub struct FakeDelay(Rig);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
    }
}

pub type TestPedestal =
    Pedestal<FakeActuator, FakeAzimuthSensor, FakeActuator, FakeElevationSensor, FakeDelay>;

pub fn config() -> PedestalConfig {
    parse_config(CONFIG).expect("test config parses")
}

pub fn build_with(rig: &Rig, config: PedestalConfig) -> pedestal_pointing::Result<TestPedestal> {
    Pedestal::builder()
        .config(config)
        .azimuth(rig.actuator(AxisId::Azimuth), rig.azimuth_sensor())
        .elevation(rig.actuator(AxisId::Elevation), rig.elevation_sensor())
        .delay(rig.delay())
        .build()
}

/// Build with the default test config and drop the startup events.
pub fn build(rig: &Rig) -> TestPedestal {
    let pedestal = build_with(rig, config()).expect("pedestal builds");
    rig.clear();
    pedestal
}
