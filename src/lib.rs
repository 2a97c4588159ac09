//! itinerary-planner core
//!
//! Orders destinations into a visiting route with fixed start/end points and
//! estimates distance and duration. Planner state, tabular import/export and
//! a geocoding adapter sit around that core.

pub mod traits;
pub mod error;
pub mod model;
pub mod haversine;
pub mod optimizer;
pub mod metrics;
pub mod itinerary;
pub mod address;
pub mod table;
pub mod import;
pub mod export;
pub mod nominatim;
pub mod polyline;
