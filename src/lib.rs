//! # pedestal-pointing
//!
//! Two-axis azimuth/elevation antenna pedestal control with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Encoder references, drive trains and limits in one TOML file
//! - **Hardware traits**: Relative-move actuators and absolute position sensors behind small traits
//! - **embedded-hal 1.0 drivers**: STEP/DIR stepper (`OutputPin`, `DelayNs`) and AMT22 encoders (`SpiDevice`)
//! - **Shortest-path moves**: Every move is planned from a fresh sensor reading
//! - **Cable-wrap protection**: Azimuth rotation bounded relative to the startup turn count
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pedestal_pointing::{Degrees, Pedestal};
//!
//! let config = pedestal_pointing::load_config("pedestal.toml")?;
//!
//! // Warm up the encoders and capture the startup turn count
//! let mut pedestal = Pedestal::builder()
//!     .config(config)
//!     .azimuth(az_stepper, az_encoder)
//!     .elevation(el_stepper, el_encoder)
//!     .delay(delay)
//!     .build()?;
//!
//! pedestal.point_to(Degrees(350.0), Degrees(45.0))?;
//! pedestal.empty_water()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade on hosts

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod hardware;
pub mod pedestal;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisMove, CableWrap};
pub use config::{validate_config, AxisGeometry, PedestalConfig};
pub use error::{Error, Result};
pub use hardware::{Actuator, PositionSensor, TurnCounter};
pub use pedestal::{Pedestal, PedestalBuilder, Pointing};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Microsteps};
