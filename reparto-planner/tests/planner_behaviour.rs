//! Behaviour tests for route recomputation.

use std::cell::RefCell;
use std::rc::Rc;

use geo::Coord;
use reparto_core::test_support::{MemoryStopSource, ScriptedLocationSource};
use reparto_core::{LocationSource, NearestNeighbour, Stop};
use reparto_planner::{RoutePlan, RoutePlanner, RouteSink};
use rstest::{fixture, rstest};

/// Sink that keeps every plan it receives, shared with the test body.
#[derive(Clone, Default)]
struct SharedSink {
    plans: Rc<RefCell<Vec<RoutePlan>>>,
}

impl RouteSink for SharedSink {
    fn route_updated(&self, plan: &RoutePlan) {
        self.plans.borrow_mut().push(plan.clone());
    }
}

#[fixture]
fn origin() -> Coord<f64> {
    Coord { x: 0.0, y: 0.0 }
}

/// Three stops east of the origin along the equator, listed out of order.
#[fixture]
fn stops() -> Vec<Stop> {
    vec![
        Stop::new(2, Coord { x: 5.0, y: 0.0 }),
        Stop::new(1, Coord { x: 1.0, y: 0.0 }),
        Stop::new(3, Coord { x: 2.0, y: 0.0 }),
    ]
}

#[rstest]
fn first_fix_sequences_the_waiting_stops(origin: Coord<f64>, stops: Vec<Stop>) {
    let sink = SharedSink::default();
    let mut planner = RoutePlanner::new(NearestNeighbour, sink.clone());

    let waiting = planner.set_stops(stops).expect("finite stops are accepted");
    assert!(waiting.is_none());
    assert!(sink.plans.borrow().is_empty());

    let plan = planner
        .update_position(origin)
        .expect("finite position is accepted");
    assert_eq!(plan.route().stop_ids(), &[1, 3, 2]);
    assert_eq!(sink.plans.borrow().len(), 1);
}

#[rstest]
fn plan_path_follows_the_visit_order(origin: Coord<f64>, stops: Vec<Stop>) {
    let mut planner = RoutePlanner::new(NearestNeighbour, SharedSink::default());
    planner.set_stops(stops).expect("finite stops are accepted");
    let plan = planner
        .update_position(origin)
        .expect("finite position is accepted");

    let path = plan.path().to_vec();
    assert_eq!(
        path,
        vec![
            origin,
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 2.0, y: 0.0 },
            Coord { x: 5.0, y: 0.0 },
        ]
    );

    let legs: Vec<(u64, f64)> = plan
        .legs()
        .iter()
        .map(|leg| (leg.stop_id, leg.distance_km))
        .collect();
    // One degree of longitude on the equator reports as 111.2 km.
    assert_eq!(legs, vec![(1, 111.2), (3, 111.2), (2, 333.6)]);
}

#[rstest]
fn every_position_update_pushes_a_fresh_plan(origin: Coord<f64>, stops: Vec<Stop>) {
    let sink = SharedSink::default();
    let mut planner = RoutePlanner::new(NearestNeighbour, sink.clone());
    planner.set_stops(stops).expect("finite stops are accepted");

    planner
        .update_position(origin)
        .expect("finite position is accepted");
    planner
        .update_position(Coord { x: 4.5, y: 0.0 })
        .expect("finite position is accepted");

    let plans = sink.plans.borrow();
    assert_eq!(plans.len(), 2);
    // From the far end of the row the greedy order reverses.
    assert_eq!(
        plans.last().map(|plan| plan.route().stop_ids().to_vec()),
        Some(vec![2, 3, 1])
    );
}

#[rstest]
fn no_pending_stops_still_yields_a_snapshot(origin: Coord<f64>) {
    let mut planner = RoutePlanner::new(NearestNeighbour, SharedSink::default());
    let plan = planner
        .update_position(origin)
        .expect("finite position is accepted");
    assert!(plan.is_empty());
    assert_eq!(plan.path(), &[origin]);
    assert!(plan.legs().is_empty());
}

#[rstest]
fn removing_a_delivered_stop_recomputes(origin: Coord<f64>, stops: Vec<Stop>) {
    let mut planner = RoutePlanner::new(NearestNeighbour, SharedSink::default());
    planner.set_stops(stops).expect("finite stops are accepted");
    planner
        .update_position(origin)
        .expect("finite position is accepted");

    let plan = planner.remove_stop(1).expect("position is known");
    assert_eq!(plan.route().stop_ids(), &[3, 2]);
}

#[rstest]
fn refreshing_from_a_stop_source_recomputes(origin: Coord<f64>, stops: Vec<Stop>) {
    let mut planner = RoutePlanner::new(NearestNeighbour, SharedSink::default());
    planner
        .update_position(origin)
        .expect("finite position is accepted");

    let source = MemoryStopSource::with_stops(stops);
    let plan = planner
        .refresh_stops(&source)
        .expect("finite stops are accepted")
        .expect("position is known");
    assert_eq!(plan.route().stop_ids(), &[1, 3, 2]);
}

#[rstest]
fn one_shot_fix_feeds_the_planner(stops: Vec<Stop>) {
    let source = ScriptedLocationSource::with_positions([Coord { x: 0.0, y: 0.0 }]);
    let mut planner = RoutePlanner::new(NearestNeighbour, SharedSink::default());
    planner.set_stops(stops).expect("finite stops are accepted");

    let fix = source.current_position().expect("scripted fix available");
    let plan = planner
        .update_position(fix)
        .expect("finite position is accepted");
    assert_eq!(plan.route().stop_ids(), &[1, 3, 2]);
}
