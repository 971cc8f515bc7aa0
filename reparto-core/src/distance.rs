//! Great-circle distances between coordinates.
//!
//! Distances use the haversine formula on a spherical Earth. Sequencing
//! compares raw values; anything shown to a user goes through
//! [`reported_distance_km`], which rounds to one decimal place.

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between `a` and `b` in kilometres.
///
/// Coordinates are WGS84 decimal degrees with `x = longitude` and
/// `y = latitude`. The result carries full floating-point precision. The
/// function does not validate its input: non-finite coordinates propagate as
/// NaN rather than being rejected.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use reparto_core::distance_km;
///
/// let santo_domingo = Coord { x: -69.9312, y: 18.4861 };
/// assert_eq!(distance_km(santo_domingo, santo_domingo), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();

    // Rounding can push the intermediate a hair past 1 near antipodes,
    // which would turn sqrt(1 - h) into NaN.
    let h = ((d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance between `a` and `b` rounded to one decimal place.
///
/// This is the reporting boundary: delivery list rows and leg summaries show
/// this value. Sequencing never uses it, as comparing rounded distances can
/// reorder stops that the raw values distinguish.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use reparto_core::reported_distance_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let nearby = Coord { x: 0.0, y: 0.001 };
/// assert_eq!(reported_distance_km(origin, nearby), 0.1);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "rounding to one decimal place")]
pub fn reported_distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (distance_km(a, b) * 10.0).round() / 10.0
}
