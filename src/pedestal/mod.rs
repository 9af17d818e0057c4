//! Pedestal module for pedestal-pointing.
//!
//! Provides the two-axis controller, its builder and the attitude readback.

mod builder;
mod controller;
mod pointing;

pub use builder::PedestalBuilder;
pub use controller::Pedestal;
pub use pointing::Pointing;
