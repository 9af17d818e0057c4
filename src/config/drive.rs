//! Per-axis drive train configuration from TOML.

use serde::Deserialize;

use super::units::Microsteps;

/// Stepper drive train of one axis.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Base steps per actuator-shaft revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u16,

    /// Microstep setting (1, 2, 4, 8, 16, 32, etc.).
    pub microsteps: Microsteps,

    /// Actuator-shaft revolutions per sensor-shaft revolution.
    #[serde(default = "default_gear_reduction")]
    pub gear_reduction: f32,

    /// Step period used by the STEP/DIR driver, in microseconds.
    #[serde(default = "default_step_period_us")]
    pub step_period_us: u32,
}

fn default_gear_reduction() -> f32 {
    1.0
}

fn default_step_period_us() -> u32 {
    1000
}

impl DriveConfig {
    /// Microsteps per actuator-shaft revolution.
    pub fn microsteps_per_turn(&self) -> u32 {
        self.steps_per_revolution as u32 * self.microsteps.value() as u32
    }
}
