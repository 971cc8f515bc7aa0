//! Delivery records assigned to a driver.
//!
//! These mirror the backend's order payloads. The engine never creates or
//! persists them; it receives them from the delivery-listing API and reads
//! the customer coordinate out of each one.

use chrono::{DateTime, Utc};
use geo::Coord;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Accepted but not yet out for delivery.
    Pending,
    /// Currently being driven to the customer.
    InProgress,
    /// Handed over to the customer.
    Completed,
    /// Called off before completion.
    Cancelled,
}

impl DeliveryStatus {
    /// Return the status as the backend's lowercase string.
    ///
    /// # Examples
    /// ```
    /// use reparto_dispatch::DeliveryStatus;
    ///
    /// assert_eq!(DeliveryStatus::InProgress.as_str(), "in_progress");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipient of a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend identifier.
    pub id: String,
    /// Full name shown to the driver.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address of the drop-off.
    pub address: String,
    /// Geocoded position of the address.
    pub location: Coord<f64>,
}

/// One line item in a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
    /// Backend identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Units to hand over.
    pub quantity: u32,
    /// Unit price in the local currency.
    pub price: f64,
}

/// A delivery assigned to the current driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Engine-local identifier; doubles as the stop id when sequencing.
    pub id: u64,
    /// Human-facing order reference.
    pub order_id: String,
    /// Recipient and drop-off location.
    pub customer: Customer,
    /// Items to hand over.
    pub items: Vec<DeliveryItem>,
    /// Current lifecycle state.
    pub status: DeliveryStatus,
    /// Total order value.
    pub total_amount: f64,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// Promised hand-over time, when the backend supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    /// Courier instructions from the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
