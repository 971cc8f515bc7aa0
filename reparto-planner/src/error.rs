use thiserror::Error;

/// Errors returned by [`RoutePlanner`](crate::RoutePlanner) updates.
///
/// The core distance model and sequencer accept any numeric input and let
/// NaN propagate; the planner is the boundary that rejects non-finite
/// coordinates before they reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The driver position contained a NaN or infinite coordinate.
    #[error("driver position has a non-finite coordinate")]
    NonFinitePosition,
    /// A stop contained a NaN or infinite coordinate.
    #[error("stop {0} has a non-finite coordinate")]
    NonFiniteStop(u64),
}
