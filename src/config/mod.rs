//! Configuration module for pedestal-pointing.
//!
//! Provides types for loading and validating the pedestal configuration
//! from TOML files (with `std` feature) or pre-parsed data.

mod drive;
mod geometry;
mod limits;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use drive::DriveConfig;
pub use geometry::AxisGeometry;
pub use limits::{ElevationLimits, TurnCounterBounds};
pub use system::{
    AzimuthConfig, BusConfig, DrainConfig, ElevationConfig, PedestalConfig, WarmupConfig,
};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Microsteps};
