//! Route optimizer: greedy nearest-neighbour ordering with fixed endpoints.
//!
//! The result is a heuristic tour, not an exact TSP solution. It is
//! deterministic for a given input order.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{IndexRole, RouteError};
use crate::haversine::distance_between;
use crate::traits::Waypoint;

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Remaining-pool size at which the nearest-neighbour scan moves onto
    /// the rayon thread pool.
    pub parallel_threshold: usize,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
        }
    }
}

/// Orders `waypoints` into a visiting sequence.
///
/// The waypoint at `start_index` is always first. A distinct `end_index` is
/// always last. When `end_index == Some(start_index)` the route is circular
/// and the start waypoint is repeated as the final stop. Inputs of length 0
/// or 1 are returned as-is and the indices are ignored.
pub fn optimize_route<W>(
    waypoints: &[W],
    start_index: usize,
    end_index: Option<usize>,
) -> Result<Vec<&W>, RouteError>
where
    W: Waypoint,
{
    build_route(waypoints, start_index, end_index, nearest_index)
}

/// Same ordering as [`optimize_route`], with the nearest-neighbour scan
/// spread over rayon's pool once enough waypoints remain.
pub fn optimize_route_parallel<'a, W>(
    waypoints: &'a [W],
    start_index: usize,
    end_index: Option<usize>,
    options: &OptimizeOptions,
) -> Result<Vec<&'a W>, RouteError>
where
    W: Waypoint + Sync,
{
    build_route(waypoints, start_index, end_index, |from, pool| {
        if pool.len() >= options.parallel_threshold {
            par_nearest_index(from, pool)
        } else {
            nearest_index(from, pool)
        }
    })
}

fn build_route<'a, W, F>(
    waypoints: &'a [W],
    start_index: usize,
    end_index: Option<usize>,
    mut nearest: F,
) -> Result<Vec<&'a W>, RouteError>
where
    W: Waypoint,
    F: FnMut((f64, f64), &[&'a W]) -> usize,
{
    let len = waypoints.len();
    if len <= 1 {
        return Ok(waypoints.iter().collect());
    }

    if start_index >= len {
        return Err(RouteError::InvalidIndex {
            role: IndexRole::Start,
            index: start_index,
            len,
        });
    }
    if let Some(end) = end_index {
        if end >= len {
            return Err(RouteError::InvalidIndex {
                role: IndexRole::End,
                index: end,
                len,
            });
        }
    }

    let is_circular = end_index == Some(start_index);

    let mut pool: Vec<&'a W> = waypoints.iter().collect();
    let mut route: Vec<&'a W> = Vec::with_capacity(len + usize::from(is_circular));

    let start = pool.remove(start_index);
    route.push(start);

    let mut ending = None;
    if let Some(end) = end_index.filter(|&end| end != start_index) {
        let adjusted = if end > start_index { end - 1 } else { end };
        ending = Some(pool.remove(adjusted));
    }

    debug!(
        waypoints = len,
        start = start_index,
        end = ?end_index,
        circular = is_circular,
        "optimizing route"
    );

    let mut current = start;
    while !pool.is_empty() {
        let next = nearest(current.location(), &pool);
        current = pool.remove(next);
        route.push(current);
    }

    if let Some(ending) = ending {
        route.push(ending);
    }

    if is_circular {
        route.push(start);
    }

    Ok(route)
}

/// Index of the pool entry closest to `from`.
///
/// The first entry is the running minimum and is only replaced by a strictly
/// smaller distance. Ties go to the earliest entry. A NaN first entry is never
/// replaced and a NaN later entry never replaces anything.
fn nearest_index<W>(from: (f64, f64), pool: &[&W]) -> usize
where
    W: Waypoint,
{
    pool.iter()
        .enumerate()
        .map(|(index, candidate)| (index, distance_between(from, candidate.location())))
        .reduce(closer)
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Parallel form of [`nearest_index`] with the same result.
///
/// NaN distances are dropped before reducing, which keeps the reduction
/// associative. With a finite first entry that is exactly the sequential
/// outcome.
fn par_nearest_index<W>(from: (f64, f64), pool: &[&W]) -> usize
where
    W: Waypoint + Sync,
{
    let Some(first) = pool.first() else {
        return 0;
    };
    if distance_between(from, first.location()).is_nan() {
        return 0;
    }

    pool.par_iter()
        .enumerate()
        .map(|(index, candidate)| (index, distance_between(from, candidate.location())))
        .filter(|(_, distance)| !distance.is_nan())
        .reduce_with(closer)
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Keeps the left candidate unless the right one is strictly closer.
fn closer(left: (usize, f64), right: (usize, f64)) -> (usize, f64) {
    if right.1 < left.1 { right } else { left }
}
