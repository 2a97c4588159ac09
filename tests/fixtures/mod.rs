//! Test fixtures for itinerary-planner.
//!
//! Provides real Italian city-centre locations and builders that turn them
//! into destinations.

#![allow(dead_code)]

pub mod italian_locations;

pub use italian_locations::*;
