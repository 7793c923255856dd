//! Test fixtures for repair-route-planner.
//!
//! Provides realistic test data including:
//! - Real New York City street locations (from the reporting app's demo set)
//! - A builder-style report type implementing `Report` with a numeric id
//! - A seeded report generator for property sweeps

#![allow(dead_code)]

pub mod nyc_locations;
pub mod reports;

pub use nyc_locations::*;
pub use reports::*;
