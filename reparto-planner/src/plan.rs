//! Route plans handed to the map layer.

use geo::Coord;
use reparto_core::Route;

/// One hop of a planned route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    /// Stop the leg arrives at.
    pub stop_id: u64,
    /// Reported distance for the leg, rounded to one decimal place.
    pub distance_km: f64,
}

/// Snapshot of the current visiting order.
///
/// A plan is produced fresh on every recomputation and stays valid until the
/// next one replaces it. The path starts at the driver's position and then
/// follows each stop's coordinate in visiting order, ready for polyline
/// drawing; the legs carry the rounded display distance of each hop.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    route: Route,
    path: Vec<Coord<f64>>,
    legs: Vec<RouteLeg>,
}

impl RoutePlan {
    pub(crate) const fn new(route: Route, path: Vec<Coord<f64>>, legs: Vec<RouteLeg>) -> Self {
        Self { route, path, legs }
    }

    /// The visiting order.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Polyline coordinates: the driver's position, then each stop in
    /// visiting order.
    #[must_use]
    pub fn path(&self) -> &[Coord<f64>] {
        &self.path
    }

    /// Per-hop reported distances, in visiting order.
    #[must_use]
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Whether the plan visits any stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Receive each fresh plan as it is recomputed.
///
/// Implemented by the map-rendering layer, which draws the driver marker,
/// the numbered stop markers, and the connecting polyline from the plan.
pub trait RouteSink {
    /// Called with every recomputed plan.
    fn route_updated(&self, plan: &RoutePlan);
}
