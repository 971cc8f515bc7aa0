//! Access to the stops a route must cover.

use crate::Stop;

/// Supply the current set of pending stops.
///
/// Implementers derive one [`Stop`] per outstanding delivery, keyed by the
/// delivery identifier. The engine treats the result as a read-only
/// snapshot; it is fetched again on every recomputation, so implementations
/// should reflect completions and cancellations immediately.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use reparto_core::{Stop, StopSource};
///
/// struct FixedStops(Vec<Stop>);
///
/// impl StopSource for FixedStops {
///     fn pending_stops(&self) -> Vec<Stop> {
///         self.0.clone()
///     }
/// }
///
/// let source = FixedStops(vec![Stop::new(1, Coord { x: 0.0, y: 0.0 })]);
/// assert_eq!(source.pending_stops().len(), 1);
/// ```
pub trait StopSource {
    /// Return the stops still awaiting a visit.
    fn pending_stops(&self) -> Vec<Stop>;
}
