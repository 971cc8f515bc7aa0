//! The driver's working set of deliveries.
//!
//! [`DeliveryBoard`] is the delivery-listing facility: it owns the deliveries
//! assigned to the current driver and answers the queries the rest of the
//! engine needs. It is an explicitly constructed value passed to whoever
//! needs it; nothing here is a process-wide singleton.

use geo::Coord;
use reparto_core::{Stop, StopSource, reported_distance_km};
use thiserror::Error;

use crate::{Delivery, DeliveryStatus};

/// Errors returned by [`DeliveryBoard`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The referenced delivery is not on the board.
    #[error("delivery {0} is not on the board")]
    UnknownDelivery(u64),
}

/// In-memory set of deliveries assigned to one driver.
///
/// The board keeps deliveries in the order the backend handed them over;
/// queries that need a display order sort on demand.
#[derive(Debug, Clone, Default)]
pub struct DeliveryBoard {
    deliveries: Vec<Delivery>,
}

impl DeliveryBoard {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deliveries: Vec::new(),
        }
    }

    /// Create a board holding `deliveries`.
    pub fn with_deliveries<I>(deliveries: I) -> Self
    where
        I: IntoIterator<Item = Delivery>,
    {
        Self {
            deliveries: deliveries.into_iter().collect(),
        }
    }

    /// All deliveries, newest first, optionally filtered by status.
    #[must_use]
    pub fn deliveries(&self, status: Option<DeliveryStatus>) -> Vec<Delivery> {
        let mut selected: Vec<Delivery> = self
            .deliveries
            .iter()
            .filter(|delivery| status.is_none_or(|wanted| delivery.status == wanted))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }

    /// Look up a delivery by identifier.
    #[must_use]
    pub fn delivery(&self, id: u64) -> Option<&Delivery> {
        self.deliveries.iter().find(|delivery| delivery.id == id)
    }

    /// Move a delivery to a new status.
    ///
    /// Completing or cancelling a delivery removes it from the pending-stop
    /// snapshot, which is what triggers the next route recomputation.
    pub fn update_status(
        &mut self,
        id: u64,
        status: DeliveryStatus,
    ) -> Result<&Delivery, DispatchError> {
        let delivery = self
            .deliveries
            .iter_mut()
            .find(|delivery| delivery.id == id)
            .ok_or(DispatchError::UnknownDelivery(id))?;
        delivery.status = status;
        Ok(delivery)
    }

    /// Number of deliveries still pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.deliveries
            .iter()
            .filter(|delivery| delivery.status == DeliveryStatus::Pending)
            .count()
    }

    /// Reported distance from `position` to a delivery's drop-off.
    ///
    /// Rounded to one decimal place for list display; `None` when the
    /// delivery is unknown.
    #[must_use]
    pub fn distance_from(&self, position: Coord<f64>, id: u64) -> Option<f64> {
        self.delivery(id)
            .map(|delivery| reported_distance_km(position, delivery.customer.location))
    }
}

impl StopSource for DeliveryBoard {
    /// Pending deliveries become stops, in board order.
    fn pending_stops(&self) -> Vec<Stop> {
        self.deliveries
            .iter()
            .filter(|delivery| delivery.status == DeliveryStatus::Pending)
            .map(|delivery| Stop::new(delivery.id, delivery.customer.location))
            .collect()
    }
}
