//! Route planning for the Reparto engine.
//!
//! Bridges the core sequencer to the application: [`RoutePlanner`] re-runs
//! the sequencer whenever the driver position or the pending stop set
//! changes and hands each fresh [`RoutePlan`] to the map layer through the
//! [`RouteSink`] seam.

#![forbid(unsafe_code)]

mod error;
mod plan;
mod planner;

pub use error::PlanError;
pub use plan::{RouteLeg, RoutePlan, RouteSink};
pub use planner::RoutePlanner;
