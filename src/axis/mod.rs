//! Axis module for pedestal-pointing.
//!
//! Provides the parametrised axis used for both azimuth and elevation, and
//! the azimuth cable-wrap policy.

mod cable_wrap;
mod driver;

pub use cable_wrap::CableWrap;
pub use driver::{Axis, AxisMove};
