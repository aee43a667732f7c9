//! Geographic utilities feeding the distance and pace formatters.
//!
//! All functions expect WGS84 coordinates (latitude/longitude in degrees),
//! the standard produced by GPS receivers.

use crate::TrackPoint;
use geo::{Distance, Haversine, Point};

/// Great-circle distance between two track points using the Haversine
/// formula, in meters.
///
/// # Example
/// ```
/// use track_render::{geo_utils, TrackPoint};
///
/// let london = TrackPoint::new(51.5074, -0.1278, 0);
/// let paris = TrackPoint::new(48.8566, 2.3522, 0);
///
/// let distance = geo_utils::haversine_distance(&london, &paris);
/// assert!((distance - 343_560.0).abs() < 1000.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(p1: &TrackPoint, p2: &TrackPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Total length of a track in meters.
///
/// Sums the haversine distance between consecutive points. Empty or
/// single-point tracks return 0.0.
pub fn polyline_length(points: &[TrackPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}
