//! Facade crate for the Reparto route-sequencing engine.
//!
//! This crate re-exports the core domain types and exposes the delivery
//! board and route planner behind feature flags.

#![forbid(unsafe_code)]

pub use reparto_core::{
    EARTH_RADIUS_KM, LocationError, LocationSource, LocationTracker, LocationWatch,
    NearestNeighbour, PositionHandler, Route, Sequencer, Stop, StopSource, UpdateFilter,
    WatchOptions, distance_km, reported_distance_km,
};

#[cfg(feature = "dispatch")]
pub use reparto_dispatch::{
    Customer, Delivery, DeliveryBoard, DeliveryItem, DeliveryStatus, DispatchError,
};

#[cfg(feature = "planner")]
pub use reparto_planner::{PlanError, RouteLeg, RoutePlan, RoutePlanner, RouteSink};
