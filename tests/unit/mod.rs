//! Unit test harness for pedestal-pointing.
//!
//! This module organizes configuration tests that go through the public API.

mod config_parsing;
mod config_validation;
