use geo::Coord;

/// A pending delivery location awaiting a visit.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// identifier is opaque to the engine; it only has to be unique within a
/// single sequencing call, and it is what callers use to map a route entry
/// back to a delivery.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use reparto_core::Stop;
///
/// let stop = Stop::new(7, Coord { x: -69.9312, y: 18.4861 });
/// assert_eq!(stop.id, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Caller-assigned identifier, unique within one sequencing call.
    pub id: u64,
    /// Geospatial position of the delivery address.
    pub location: Coord<f64>,
}

impl Stop {
    /// Construct a stop from an identifier and a position.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>) -> Self {
        Self { id, location }
    }
}
