//! Recomputation of the visiting order as inputs change.
//!
//! [`RoutePlanner`] owns the latest driver position and pending stop set and
//! re-runs the sequencer whenever either changes: a position update, a new
//! stop snapshot, or a removed stop all produce a fresh [`RoutePlan`] that
//! is pushed to the sink and retained as the current snapshot. The planner
//! never debounces; the sequencer is cheap and pure, and rate limiting
//! belongs to the location watch feeding the position updates.

use std::collections::HashMap;

use geo::Coord;
use reparto_core::{Route, Sequencer, Stop, StopSource, reported_distance_km};

use crate::error::PlanError;
use crate::plan::{RouteLeg, RoutePlan, RouteSink};

/// Keep a visiting order current while the driver moves and stops change.
///
/// The planner is generic over the engine boundaries: the [`Sequencer`] that
/// orders stops and the [`RouteSink`] that consumes each plan.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use reparto_core::{NearestNeighbour, Stop};
/// use reparto_planner::{RoutePlan, RoutePlanner, RouteSink};
///
/// struct NullSink;
///
/// impl RouteSink for NullSink {
///     fn route_updated(&self, _plan: &RoutePlan) {}
/// }
///
/// # fn main() -> Result<(), reparto_planner::PlanError> {
/// let mut planner = RoutePlanner::new(NearestNeighbour, NullSink);
/// planner.set_stops(vec![Stop::new(1, Coord { x: 1.0, y: 0.0 })])?;
/// let plan = planner.update_position(Coord { x: 0.0, y: 0.0 })?;
/// assert_eq!(plan.route().stop_ids(), &[1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RoutePlanner<Q, K>
where
    Q: Sequencer,
    K: RouteSink,
{
    sequencer: Q,
    sink: K,
    position: Option<Coord<f64>>,
    stops: Vec<Stop>,
    plan: Option<RoutePlan>,
}

impl<Q, K> RoutePlanner<Q, K>
where
    Q: Sequencer,
    K: RouteSink,
{
    /// Construct a planner with no position or stops yet.
    #[must_use]
    pub const fn new(sequencer: Q, sink: K) -> Self {
        Self {
            sequencer,
            sink,
            position: None,
            stops: Vec::new(),
            plan: None,
        }
    }

    /// The latest computed plan, if a position has been seen.
    #[must_use]
    pub const fn current_plan(&self) -> Option<&RoutePlan> {
        self.plan.as_ref()
    }

    /// Record a position update and recompute the plan.
    ///
    /// Called for every update the location watch delivers; the sequencer is
    /// cheap enough that no further filtering happens here.
    pub fn update_position(&mut self, position: Coord<f64>) -> Result<&RoutePlan, PlanError> {
        if !is_finite(position) {
            return Err(PlanError::NonFinitePosition);
        }
        self.position = Some(position);
        Ok(self.replan(position))
    }

    /// Replace the pending stop set and recompute once a position is known.
    ///
    /// Returns `Ok(None)` when no position has been seen yet; the stops are
    /// retained and sequenced on the first position update.
    pub fn set_stops(&mut self, stops: Vec<Stop>) -> Result<Option<&RoutePlan>, PlanError> {
        if let Some(stop) = stops.iter().find(|stop| !is_finite(stop.location)) {
            return Err(PlanError::NonFiniteStop(stop.id));
        }
        self.stops = stops;
        match self.position {
            Some(position) => Ok(Some(self.replan(position))),
            None => Ok(None),
        }
    }

    /// Pull the pending stops from `source` and recompute.
    ///
    /// Convenience for callers that keep their deliveries behind a
    /// [`StopSource`]; equivalent to `set_stops(source.pending_stops())`.
    pub fn refresh_stops(
        &mut self,
        source: &impl StopSource,
    ) -> Result<Option<&RoutePlan>, PlanError> {
        self.set_stops(source.pending_stops())
    }

    /// Drop a stop that was delivered or cancelled and recompute.
    ///
    /// Unknown identifiers are logged and otherwise ignored. Returns the
    /// fresh plan once a position is known.
    pub fn remove_stop(&mut self, id: u64) -> Option<&RoutePlan> {
        let before = self.stops.len();
        self.stops.retain(|stop| stop.id != id);
        if self.stops.len() == before {
            log::warn!("stop {id} was not in the pending set");
        }
        let position = self.position?;
        Some(self.replan(position))
    }

    fn replan(&mut self, position: Coord<f64>) -> &RoutePlan {
        let route = self.sequencer.sequence(position, &self.stops);
        log::debug!("sequenced {} pending stops", route.len());
        let plan = build_plan(position, &route, &self.stops);
        self.sink.route_updated(&plan);
        self.plan.insert(plan)
    }
}

fn is_finite(coord: Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

fn build_plan(origin: Coord<f64>, route: &Route, stops: &[Stop]) -> RoutePlan {
    let locations: HashMap<u64, Coord<f64>> =
        stops.iter().map(|stop| (stop.id, stop.location)).collect();

    let mut path = Vec::with_capacity(route.len() + 1);
    let mut legs = Vec::with_capacity(route.len());
    path.push(origin);
    let mut previous = origin;
    for stop_id in route.iter() {
        let Some(&location) = locations.get(&stop_id) else {
            log::warn!("stop {stop_id} missing from the pending set; leg skipped");
            debug_assert!(false, "stop {stop_id} missing from the pending set");
            continue;
        };
        legs.push(RouteLeg {
            stop_id,
            distance_km: reported_distance_km(previous, location),
        });
        path.push(location);
        previous = location;
    }

    RoutePlan::new(route.clone(), path, legs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reparto_core::NearestNeighbour;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        plans: RefCell<Vec<RoutePlan>>,
    }

    impl RouteSink for RecordingSink {
        fn route_updated(&self, plan: &RoutePlan) {
            self.plans.borrow_mut().push(plan.clone());
        }
    }

    fn planner() -> RoutePlanner<NearestNeighbour, RecordingSink> {
        RoutePlanner::new(NearestNeighbour, RecordingSink::default())
    }

    #[rstest]
    fn rejects_non_finite_positions() {
        let mut planner = planner();
        let err = planner
            .update_position(Coord { x: f64::NAN, y: 0.0 })
            .expect_err("NaN position must be rejected");
        assert_eq!(err, PlanError::NonFinitePosition);
        assert!(planner.current_plan().is_none());
    }

    #[rstest]
    fn rejects_non_finite_stops() {
        let mut planner = planner();
        let stops = vec![
            Stop::new(1, Coord { x: 0.0, y: 0.0 }),
            Stop::new(2, Coord { x: f64::INFINITY, y: 0.0 }),
        ];
        let err = planner
            .set_stops(stops)
            .expect_err("infinite stop must be rejected");
        assert_eq!(err, PlanError::NonFiniteStop(2));
    }

    #[rstest]
    fn stops_without_a_position_wait_for_the_first_fix() {
        let mut planner = planner();
        let outcome = planner
            .set_stops(vec![Stop::new(1, Coord { x: 1.0, y: 1.0 })])
            .expect("finite stops are accepted");
        assert!(outcome.is_none());
        assert!(planner.current_plan().is_none());
        assert!(planner.sink.plans.borrow().is_empty());
    }

    #[rstest]
    fn unknown_stop_removal_keeps_the_plan_intact() {
        let mut planner = planner();
        planner
            .set_stops(vec![Stop::new(1, Coord { x: 1.0, y: 0.0 })])
            .expect("finite stops are accepted");
        planner
            .update_position(Coord { x: 0.0, y: 0.0 })
            .expect("finite position is accepted");

        let plan = planner.remove_stop(99).expect("position is known");
        assert_eq!(plan.route().stop_ids(), &[1]);
    }
}
