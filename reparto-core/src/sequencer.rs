//! Order stops into a visiting sequence.
//!
//! The [`Sequencer`] trait is the seam between the ordering algorithm and its
//! consumers. [`NearestNeighbour`] is the production implementation: a greedy
//! scan that always visits the closest remaining stop next.

use geo::Coord;

use crate::{Route, Stop, distance};

/// Produce a visiting order over a set of stops from a starting position.
///
/// Implementations must return a permutation of the input identifiers and be
/// `Send + Sync` so planners can share them across threads. An empty input
/// yields an empty route; it is not an error.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use reparto_core::{NearestNeighbour, Sequencer, Stop};
///
/// let stops = vec![
///     Stop::new(1, Coord { x: 1.0, y: 0.0 }),
///     Stop::new(2, Coord { x: 5.0, y: 0.0 }),
///     Stop::new(3, Coord { x: 2.0, y: 0.0 }),
/// ];
/// let route = NearestNeighbour.sequence(Coord { x: 0.0, y: 0.0 }, &stops);
/// assert_eq!(route.stop_ids(), &[1, 3, 2]);
/// ```
pub trait Sequencer: Send + Sync {
    /// Order `stops` into a route starting from `origin`.
    fn sequence(&self, origin: Coord<f64>, stops: &[Stop]) -> Route;
}

/// Greedy nearest-neighbour sequencer.
///
/// Repeatedly selects the unvisited stop closest to the current position,
/// comparing raw (unrounded) haversine distances. Ties go to the stop that
/// appears first in the input; the scan is index-ordered rather than a
/// re-sort, so the choice is deterministic for equidistant stops.
///
/// The search is O(n²) in the number of stops. Drivers carry tens of
/// deliveries, not thousands, so no spatial index is involved; that would be
/// the first thing to add if stop counts ever grew.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbour;

impl Sequencer for NearestNeighbour {
    fn sequence(&self, origin: Coord<f64>, stops: &[Stop]) -> Route {
        let mut unvisited: Vec<Stop> = stops.to_vec();
        let mut order = Vec::with_capacity(unvisited.len());
        let mut current = origin;

        while !unvisited.is_empty() {
            let nearest = unvisited
                .iter()
                .enumerate()
                .map(|(index, stop)| (index, distance::distance_km(current, stop.location)))
                // Strict comparison keeps the first of any equidistant stops.
                .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best });
            let Some((index, _)) = nearest else { break };
            let stop = unvisited.remove(index);
            order.push(stop.id);
            current = stop.location;
        }

        Route::new(order)
    }
}
