//! Device location seams.
//!
//! The engine never talks to a positioning device directly. Callers supply a
//! [`LocationSource`] for one-shot reads and a [`LocationTracker`] for
//! continuous watches. A watch is an explicit resource:
//! [`LocationTracker::watch`] returns a [`LocationWatch`] guard that owns the
//! subscription and cancels it when dropped, so no module-level state is
//! involved.
//!
//! Rate limiting lives here rather than in the sequencer: [`UpdateFilter`]
//! applies the distance and interval gates from [`WatchOptions`] before a
//! position reaches the planner. The planner itself re-sequences on every
//! update it receives.

use std::fmt;
use std::time::{Duration, Instant};

use geo::Coord;
use thiserror::Error;

use crate::distance;

/// Errors surfaced by location sources and trackers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user has not granted location permission.
    #[error("location permission was not granted")]
    PermissionDenied,
    /// The device could not produce a position fix.
    #[error("current position is unavailable")]
    Unavailable,
}

/// One-shot access to the driver's current position.
pub trait LocationSource {
    /// Return the current position as WGS84 decimal degrees.
    fn current_position(&self) -> Result<Coord<f64>, LocationError>;
}

/// Handler invoked with each accepted position update.
pub type PositionHandler = Box<dyn FnMut(Coord<f64>) + Send>;

/// Continuous position updates with explicit subscription ownership.
pub trait LocationTracker {
    /// Start watching the device position.
    ///
    /// `handler` receives every update that passes the gates in `options`.
    /// The returned guard stops the watch when dropped; there is no other
    /// way to cancel it.
    fn watch(
        &self,
        options: WatchOptions,
        handler: PositionHandler,
    ) -> Result<LocationWatch, LocationError>;
}

/// Gates applied between raw device updates and the handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Minimum movement, in metres, before another update is delivered.
    pub min_distance_m: f64,
    /// Minimum time between delivered updates.
    pub min_interval: Duration,
}

impl Default for WatchOptions {
    /// 50 m and 30 s, the tracking configuration the delivery app ships with.
    fn default() -> Self {
        Self {
            min_distance_m: 50.0,
            min_interval: Duration::from_secs(30),
        }
    }
}

/// Stateful filter applying [`WatchOptions`] to a stream of observations.
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use geo::Coord;
/// use reparto_core::{UpdateFilter, WatchOptions};
///
/// let mut filter = UpdateFilter::new(WatchOptions::default());
/// let start = Instant::now();
/// assert!(filter.accept(Coord { x: 0.0, y: 0.0 }, start));
/// // Same spot a minute later: the distance gate holds it back.
/// assert!(!filter.accept(Coord { x: 0.0, y: 0.0 }, start + Duration::from_secs(60)));
/// ```
#[derive(Debug, Clone)]
pub struct UpdateFilter {
    options: WatchOptions,
    last: Option<(Coord<f64>, Instant)>,
}

impl UpdateFilter {
    /// Construct a filter with no observations seen yet.
    #[must_use]
    pub const fn new(options: WatchOptions) -> Self {
        Self {
            options,
            last: None,
        }
    }

    /// Decide whether an observation should be delivered.
    ///
    /// The first observation always passes. Later ones pass once the driver
    /// has moved at least the distance gate since the last delivered update
    /// and the interval gate has elapsed. Accepted observations become the
    /// new reference point.
    #[expect(
        clippy::float_arithmetic,
        reason = "distance gate compares kilometres against metres"
    )]
    pub fn accept(&mut self, position: Coord<f64>, observed_at: Instant) -> bool {
        let passes = match self.last {
            None => true,
            Some((previous, delivered_at)) => {
                let moved_m = distance::distance_km(previous, position) * 1000.0;
                moved_m >= self.options.min_distance_m
                    && observed_at.duration_since(delivered_at) >= self.options.min_interval
            }
        };
        if passes {
            self.last = Some((position, observed_at));
        }
        passes
    }
}

/// Guard owning an active position watch.
///
/// Dropping the guard (or calling [`stop`](Self::stop)) cancels the
/// subscription exactly once.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use reparto_core::LocationWatch;
///
/// let stopped = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&stopped);
/// let watch = LocationWatch::new(move || flag.store(true, Ordering::SeqCst));
/// drop(watch);
/// assert!(stopped.load(Ordering::SeqCst));
/// ```
pub struct LocationWatch {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl LocationWatch {
    /// Wrap the action that cancels the underlying subscription.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the watch now rather than at drop.
    pub fn stop(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for LocationWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationWatch")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
