//! # Track Render
//!
//! Gap-aware GPS track segmentation and styling for map rendering.
//!
//! This library provides:
//! - Track segmentation into continuous-motion and recording-gap runs
//! - Stacked polyline styles per segment class
//! - Bounding-box accumulation for viewport framing
//! - Display formatters for track summaries (date, distance, duration, pace)
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch segmentation with rayon
//! - **`serde`** - Enable serde derives on the output value types
//!
//! ## Quick Start
//!
//! ```rust
//! use track_render::{segment_track, GapClass, SegmentConfig, TrackPoint};
//!
//! // Two points ten seconds apart, then a two minute recording gap
//! let points = vec![
//!     TrackPoint::new(51.5074, -0.1278, 0),
//!     TrackPoint::new(51.5080, -0.1290, 10_000),
//!     TrackPoint::new(51.5090, -0.1300, 130_000),
//! ];
//!
//! let track = segment_track(&points, &SegmentConfig::default());
//! assert_eq!(track.segments.len(), 2);
//! assert_eq!(track.segments[0].class, GapClass::Continuous);
//! assert_eq!(track.segments[1].class, GapClass::Gap);
//! assert!(track.bounds.is_some());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Gap classification and the static per-class style tables
pub mod style;
pub use style::{style_layers, GapClass, StyleLayer, GAP_THRESHOLD_MS};

// Track segmentation
pub mod segmenter;
#[cfg(feature = "parallel")]
pub use segmenter::segment_tracks_parallel;
pub use segmenter::{segment_track, segment_tracks, SegmentConfig};

// Display formatters for track summaries
pub mod format;
pub use format::{
    format_date, format_distance, format_duration, format_pace, TrackSummary, PLACEHOLDER,
};

// Geographic utilities (distance calculations)
pub mod geo_utils;

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with its recording timestamp.
///
/// Produced upstream by a GPX parser; the core treats points as immutable
/// values ordered by increasing `timestamp_ms` (ordering is a convention,
/// not enforced; see [`GapClass::classify`]).
///
/// # Example
/// ```
/// use track_render::TrackPoint;
/// let point = TrackPoint::new(51.5074, -0.1278, 1_431_648_000_000); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Milliseconds since the Unix epoch, UTC.
    pub timestamp_ms: i64,
}

impl TrackPoint {
    /// Create a new track point.
    pub fn new(latitude: f64, longitude: f64, timestamp_ms: i64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp_ms,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box enclosing a set of track points.
///
/// The "empty" accumulator state is the absence of a `Bounds` (an
/// `Option`), never a box collapsed to `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Bounds collapsed to a single point.
    pub fn of_point(p: &TrackPoint) -> Self {
        Self {
            min_lat: p.latitude,
            max_lat: p.latitude,
            min_lng: p.longitude,
            max_lng: p.longitude,
        }
    }

    /// Bounds of a whole track. Returns `None` for empty input.
    pub fn from_points(points: &[TrackPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::of_point(first);
        for p in rest {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Grow the box to contain `p`.
    ///
    /// Monotone: the box never shrinks, and extending with an already
    /// contained point leaves it unchanged.
    pub fn extend(&mut self, p: &TrackPoint) {
        self.min_lat = self.min_lat.min(p.latitude);
        self.max_lat = self.max_lat.max(p.latitude);
        self.min_lng = self.min_lng.min(p.longitude);
        self.max_lng = self.max_lng.max(p.longitude);
    }

    /// Center of the box as `(latitude, longitude)`, for viewport framing.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Check whether `p` lies inside the box (inclusive).
    pub fn contains(&self, p: &TrackPoint) -> bool {
        p.latitude >= self.min_lat
            && p.latitude <= self.max_lat
            && p.longitude >= self.min_lng
            && p.longitude <= self.max_lng
    }
}

/// A contiguous run of track points sharing one gap classification.
///
/// Segments at a class transition share the boundary point: it is the last
/// point of the closing segment and the first point of the next, so the two
/// independently styled polylines join without a visible break.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub class: GapClass,
    /// At least one point, contiguous in the source stream.
    pub points: Vec<TrackPoint>,
}

impl Segment {
    /// The stacked stroke styles to draw this segment with, outermost first.
    pub fn style(&self) -> &'static [StyleLayer] {
        style_layers(self.class)
    }
}

/// The output of one segmentation pass, owned by the rendering layer.
///
/// Segments cover the full input path in order; `bounds` encloses every
/// input point and is `None` exactly when the input was empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderableTrack {
    pub segments: Vec<Segment>,
    pub bounds: Option<Bounds>,
}

impl RenderableTrack {
    /// True when the pass produced nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> Vec<TrackPoint> {
        vec![
            TrackPoint::new(51.5074, -0.1278, 0),
            TrackPoint::new(51.5080, -0.1290, 10_000),
            TrackPoint::new(51.5090, -0.1300, 20_000),
            TrackPoint::new(51.5100, -0.1310, 30_000),
        ]
    }

    #[test]
    fn test_track_point_validation() {
        assert!(TrackPoint::new(51.5074, -0.1278, 0).is_valid());
        assert!(!TrackPoint::new(91.0, 0.0, 0).is_valid());
        assert!(!TrackPoint::new(0.0, 181.0, 0).is_valid());
        assert!(!TrackPoint::new(f64::NAN, 0.0, 0).is_valid());
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points(&sample_track()).unwrap();
        assert_eq!(bounds.min_lat, 51.5074);
        assert_eq!(bounds.max_lat, 51.5100);
        assert_eq!(bounds.min_lng, -0.1310);
        assert_eq!(bounds.max_lng, -0.1278);
    }

    #[test]
    fn test_bounds_empty_input() {
        assert_eq!(Bounds::from_points(&[]), None);
    }

    #[test]
    fn test_bounds_extend_is_idempotent() {
        let track = sample_track();
        let mut bounds = Bounds::from_points(&track).unwrap();
        let before = bounds;
        bounds.extend(&track[1]);
        assert_eq!(bounds, before);
    }

    #[test]
    fn test_bounds_extend_never_shrinks() {
        let track = sample_track();
        let mut bounds = Bounds::of_point(&track[0]);
        let mut prev = bounds;
        for p in &track[1..] {
            bounds.extend(p);
            assert!(bounds.min_lat <= prev.min_lat);
            assert!(bounds.max_lat >= prev.max_lat);
            assert!(bounds.min_lng <= prev.min_lng);
            assert!(bounds.max_lng >= prev.max_lng);
            prev = bounds;
        }
        for p in &track {
            assert!(bounds.contains(p));
        }
    }

    #[test]
    fn test_bounds_center() {
        let bounds = Bounds {
            min_lat: 51.50,
            max_lat: 51.52,
            min_lng: -0.14,
            max_lng: -0.12,
        };
        let (lat, lng) = bounds.center();
        assert!((lat - 51.51).abs() < 1e-9);
        assert!((lng - (-0.13)).abs() < 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_renderable_track_serde_round_trip() {
        let track = segment_track(&sample_track(), &SegmentConfig::default());
        let json = serde_json::to_string(&track).unwrap();
        let back: RenderableTrack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }
}
