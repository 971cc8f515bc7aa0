//! Core domain types and algorithms for the Reparto engine.
//!
//! Reparto turns a delivery driver's pending stops into a visiting order.
//! This crate holds the domain model ([`Stop`], [`Route`]), the haversine
//! distance model, the greedy [`NearestNeighbour`] sequencer, and the seams
//! the surrounding application implements: [`StopSource`] for pending
//! deliveries and [`LocationSource`]/[`LocationTracker`] for device
//! positions.
//!
//! The distance model and sequencer are pure, synchronous functions over
//! their inputs. They hold no shared state and may be called concurrently
//! without coordination; every call returns a fresh, independently owned
//! [`Route`].

#![forbid(unsafe_code)]

mod distance;
mod location;
mod route;
mod sequencer;
mod source;
mod stop;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_KM, distance_km, reported_distance_km};
pub use location::{
    LocationError, LocationSource, LocationTracker, LocationWatch, PositionHandler, UpdateFilter,
    WatchOptions,
};
pub use route::Route;
pub use sequencer::{NearestNeighbour, Sequencer};
pub use source::StopSource;
pub use stop::Stop;
