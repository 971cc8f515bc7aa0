//! Delivery listing for the Reparto engine.
//!
//! Wraps the backend's delivery records in an in-memory board that answers
//! the queries the engine needs: status filtering, lookups, status
//! transitions, and the pending-stop snapshot the route sequencer consumes.

#![forbid(unsafe_code)]

mod board;
mod delivery;

pub use board::{DeliveryBoard, DispatchError};
pub use delivery::{Customer, Delivery, DeliveryItem, DeliveryStatus};
