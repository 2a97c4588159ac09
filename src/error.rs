//! Error types for the planner.

use std::fmt;

use thiserror::Error;

use crate::model::DestinationId;

/// Which of the optimizer's fixed points an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRole {
    Start,
    End,
}

impl fmt::Display for IndexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexRole::Start => f.write_str("start"),
            IndexRole::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("{role} index {index} is out of range for {len} waypoints")]
    InvalidIndex {
        role: IndexRole,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    #[error("destination {0} already exists")]
    DuplicateDestination(DestinationId),
    #[error("unknown destination {0}")]
    UnknownDestination(DestinationId),
    #[error("index {index} is out of range for {len} destinations")]
    InvalidIndex { index: usize, len: usize },
    #[error(transparent)]
    Route(#[from] RouteError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("table has no {0} column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("no destinations to export")]
    Empty,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid geocoding response: {0}")]
    InvalidResponse(String),
}
