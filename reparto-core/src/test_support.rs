//! Test-only stop and location doubles used by unit and behaviour tests.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use geo::Coord;

use crate::{
    LocationError, LocationSource, LocationTracker, LocationWatch, PositionHandler, Stop,
    StopSource, UpdateFilter, WatchOptions,
};

/// In-memory [`StopSource`] backed by a fixed list.
#[derive(Default, Debug, Clone)]
pub struct MemoryStopSource {
    stops: Vec<Stop>,
}

impl MemoryStopSource {
    /// Create a source from a collection of stops.
    pub fn with_stops<I>(stops: I) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        Self {
            stops: stops.into_iter().collect(),
        }
    }
}

impl StopSource for MemoryStopSource {
    fn pending_stops(&self) -> Vec<Stop> {
        self.stops.clone()
    }
}

/// [`LocationSource`] returning scripted positions in order.
///
/// Each call to `current_position` pops the next scripted value; an
/// exhausted script reports [`LocationError::Unavailable`].
#[derive(Default, Debug)]
pub struct ScriptedLocationSource {
    positions: Mutex<VecDeque<Coord<f64>>>,
}

impl ScriptedLocationSource {
    /// Create a source that yields `positions` in order.
    pub fn with_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        Self {
            positions: Mutex::new(positions.into_iter().collect()),
        }
    }
}

impl LocationSource for ScriptedLocationSource {
    fn current_position(&self) -> Result<Coord<f64>, LocationError> {
        let mut positions = self
            .positions
            .lock()
            .map_err(|_| LocationError::Unavailable)?;
        positions.pop_front().ok_or(LocationError::Unavailable)
    }
}

/// [`LocationTracker`] driven manually by tests.
///
/// `watch` installs the handler together with an [`UpdateFilter`] built from
/// the given options; [`push`](Self::push) feeds it observations. The
/// returned guard clears the handler, so pushes after a stop are dropped.
#[derive(Default)]
pub struct ManualTracker {
    inner: Arc<Mutex<Option<ManualWatch>>>,
}

struct ManualWatch {
    filter: UpdateFilter,
    handler: PositionHandler,
}

impl ManualTracker {
    /// Create a tracker with no active watch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an observation to the active watch, if any.
    ///
    /// Returns whether the observation passed the gates and reached the
    /// handler.
    pub fn push(&self, position: Coord<f64>, observed_at: Instant) -> bool {
        let Ok(mut guard) = self.inner.lock() else {
            return false;
        };
        match guard.as_mut() {
            Some(watch) => {
                if watch.filter.accept(position, observed_at) {
                    (watch.handler)(position);
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}

impl LocationTracker for ManualTracker {
    fn watch(
        &self,
        options: WatchOptions,
        handler: PositionHandler,
    ) -> Result<LocationWatch, LocationError> {
        let mut guard = self.inner.lock().map_err(|_| LocationError::Unavailable)?;
        *guard = Some(ManualWatch {
            filter: UpdateFilter::new(options),
            handler,
        });
        let inner = Arc::clone(&self.inner);
        Ok(LocationWatch::new(move || {
            if let Ok(mut active) = inner.lock() {
                *active = None;
            }
        }))
    }
}

impl fmt::Debug for ManualTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.inner.lock().map(|guard| guard.is_some()).unwrap_or(false);
        f.debug_struct("ManualTracker")
            .field("active", &active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn ungated() -> WatchOptions {
        WatchOptions {
            min_distance_m: 0.0,
            min_interval: Duration::ZERO,
        }
    }

    #[test]
    fn scripted_source_runs_dry() {
        let source = ScriptedLocationSource::with_positions([Coord { x: 1.0, y: 2.0 }]);
        assert_eq!(source.current_position(), Ok(Coord { x: 1.0, y: 2.0 }));
        assert_eq!(source.current_position(), Err(LocationError::Unavailable));
    }

    #[test]
    fn stopping_the_watch_stops_delivery() {
        let tracker = ManualTracker::new();
        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&delivered);
        let watch = tracker
            .watch(
                ungated(),
                Box::new(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .expect("watch should start");

        let start = Instant::now();
        assert!(tracker.push(Coord { x: 0.0, y: 0.0 }, start));
        watch.stop();
        assert!(!tracker.push(Coord { x: 1.0, y: 1.0 }, start));
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn tracker_applies_the_gates() {
        let tracker = ManualTracker::new();
        let _watch = tracker
            .watch(WatchOptions::default(), Box::new(|_| {}))
            .expect("watch should start");

        let start = Instant::now();
        assert!(tracker.push(Coord { x: 0.0, y: 0.0 }, start));
        // Stationary update inside both gates is filtered out.
        assert!(!tracker.push(Coord { x: 0.0, y: 0.0 }, start + Duration::from_secs(5)));
    }
}
