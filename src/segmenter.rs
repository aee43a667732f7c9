//! Gap-aware track segmentation.
//!
//! Splits an ordered GPS point stream into contiguous runs of tracked
//! motion and recording gaps, duplicating the boundary point at each class
//! transition so that independently styled polylines join without a
//! visible break, and accumulating the bounding box that frames the whole
//! track.
//!
//! ## Algorithm
//! 1. The first point opens a tentative continuous run and seeds the bounds
//! 2. Each later point is classified against its predecessor's timestamp
//! 3. A class change closes the open segment and reopens at the predecessor
//! 4. The last open segment is closed at end of input
//!
//! One linear pass, constant state beyond the output being built. Never
//! panics: empty, single-point and non-monotonic inputs all degrade to
//! defined results.

use crate::{Bounds, GapClass, RenderableTrack, Segment, TrackPoint};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for track segmentation.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Elapsed milliseconds between consecutive points above which the
    /// transition counts as a recording gap.
    /// Default: [`GAP_THRESHOLD_MS`](crate::GAP_THRESHOLD_MS) (90 seconds)
    pub gap_threshold_ms: i64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            gap_threshold_ms: crate::style::GAP_THRESHOLD_MS,
        }
    }
}

/// Partition a track into styled segments and accumulate its bounds.
///
/// Segments cover the input in order; the boundary point at each class
/// transition is repeated as the last point of the closing segment and the
/// first point of the next. Dropping one duplicate per transition from the
/// concatenated segments reproduces the input exactly.
///
/// Inputs with fewer than two points yield no segments: the bounds collapse
/// to the single point, or `None` for empty input.
///
/// # Example
/// ```
/// use track_render::{segment_track, GapClass, SegmentConfig, TrackPoint};
///
/// let points = vec![
///     TrackPoint::new(51.5074, -0.1278, 0),
///     TrackPoint::new(51.5080, -0.1290, 10_000),
/// ];
///
/// let track = segment_track(&points, &SegmentConfig::default());
/// assert_eq!(track.segments.len(), 1);
/// assert_eq!(track.segments[0].class, GapClass::Continuous);
/// ```
pub fn segment_track(points: &[TrackPoint], config: &SegmentConfig) -> RenderableTrack {
    if points.len() < 2 {
        return RenderableTrack {
            segments: Vec::new(),
            bounds: points.first().map(Bounds::of_point),
        };
    }

    let mut bounds = Bounds::of_point(&points[0]);
    let mut segments: Vec<Segment> = Vec::new();
    // The first point opens a tentative continuous run; a track-opening gap
    // closes it as a single-point segment.
    let mut current_class = GapClass::Continuous;
    let mut current = vec![points[0]];

    for pair in points.windows(2) {
        let (prev, p) = (pair[0], pair[1]);
        let class =
            GapClass::classify_with(p.timestamp_ms - prev.timestamp_ms, config.gap_threshold_ms);

        if class != current_class {
            // Repeat the boundary point so the two styled polylines meet
            segments.push(Segment {
                class: current_class,
                points: std::mem::replace(&mut current, vec![prev]),
            });
            current_class = class;
        }
        current.push(p);
        bounds.extend(&p);
    }

    segments.push(Segment {
        class: current_class,
        points: current,
    });

    debug!(
        "segmented {} points into {} segments ({} gap runs)",
        points.len(),
        segments.len(),
        segments
            .iter()
            .filter(|s| s.class == GapClass::Gap)
            .count()
    );

    RenderableTrack {
        segments,
        bounds: Some(bounds),
    }
}

/// Segment a batch of tracks sequentially.
pub fn segment_tracks(tracks: &[Vec<TrackPoint>], config: &SegmentConfig) -> Vec<RenderableTrack> {
    tracks.iter().map(|t| segment_track(t, config)).collect()
}

/// Segment a batch of tracks in parallel using rayon.
///
/// Output order matches input order.
#[cfg(feature = "parallel")]
pub fn segment_tracks_parallel(
    tracks: &[Vec<TrackPoint>],
    config: &SegmentConfig,
) -> Vec<RenderableTrack> {
    tracks.par_iter().map(|t| segment_track(t, config)).collect()
}
