//! Display formatters for track summaries.
//!
//! Plain exported functions over raw numeric and timestamp fields; no
//! registration or process-wide state. Every formatter is total and
//! degrades to [`PLACEHOLDER`] for missing or degenerate data instead of
//! failing.
//!
//! All dates are rendered in UTC.

use chrono::DateTime;

use crate::geo_utils::polyline_length;
use crate::TrackPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shown when time or distance data is missing or unusable.
pub const PLACEHOLDER: &str = "-";

/// Format a millisecond Unix timestamp as a `YYYY-MM-DD` calendar date, UTC.
///
/// Timestamps outside chrono's representable range degrade to
/// [`PLACEHOLDER`].
///
/// # Example
/// ```
/// use track_render::format_date;
/// assert_eq!(format_date(1_431_648_000_000), "2015-05-15");
/// ```
pub fn format_date(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a distance in meters as kilometers with a fixed number of
/// decimal places.
///
/// # Example
/// ```
/// use track_render::format_distance;
/// assert_eq!(format_distance(10_500.0, 2), "10.50");
/// ```
pub fn format_distance(meters: f64, decimal_places: usize) -> String {
    format!("{:.*}", decimal_places, meters / 1000.0)
}

/// Format the elapsed time of a `[start, end]` millisecond pair.
///
/// Whole seconds are floored; output is `H:MM:SS` from one hour up,
/// `M:SS` below. Fewer than two timestamps degrade to [`PLACEHOLDER`].
///
/// # Example
/// ```
/// use track_render::format_duration;
/// assert_eq!(format_duration(&[0, 125_000]), "2:05");
/// assert_eq!(format_duration(&[0, 3_725_000]), "1:02:05");
/// assert_eq!(format_duration(&[]), "-");
/// ```
pub fn format_duration(time_span_ms: &[i64]) -> String {
    let (Some(&start), Some(&end)) = (time_span_ms.first(), time_span_ms.get(1)) else {
        return PLACEHOLDER.to_string();
    };

    let total = (end - start).div_euclid(1000);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format a minutes-per-kilometer pace as `M'SS'' / km`.
///
/// Whole minutes are truncated, the fractional minute converted to
/// zero-padded seconds (also truncated). Absent time data or a
/// non-positive distance degrades to [`PLACEHOLDER`] rather than hitting
/// a division fault.
///
/// # Example
/// ```
/// use track_render::format_pace;
/// assert_eq!(format_pace(Some(1800), 5000.0), "6'00'' / km");
/// assert_eq!(format_pace(None, 5000.0), "-");
/// assert_eq!(format_pace(Some(1800), 0.0), "-");
/// ```
pub fn format_pace(elapsed_seconds: Option<i64>, distance_meters: f64) -> String {
    let Some(elapsed) = elapsed_seconds else {
        return PLACEHOLDER.to_string();
    };
    if distance_meters <= 0.0 {
        return PLACEHOLDER.to_string();
    }

    let pace = elapsed as f64 / (distance_meters / 1000.0) / 60.0;
    let whole_minutes = pace.floor();
    let fraction_seconds = ((pace - whole_minutes) * 60.0) as i64;

    format!("{}'{:02}'' / km", whole_minutes as i64, fraction_seconds)
}

/// Pre-formatted display fields for one track.
///
/// The rendering layer consumes ready-made strings; raw numbers stay in
/// this crate. Built from the same point stream the segmenter receives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackSummary {
    pub name: String,
    /// Calendar date of the first point, or the placeholder for an
    /// untimed track.
    pub date: String,
    /// Track length in kilometers, two decimals.
    pub distance_km: String,
    pub duration: String,
    pub pace: String,
}

impl TrackSummary {
    /// Assemble the summary fields for a track.
    ///
    /// Distance is the polyline length over the raw points; duration and
    /// pace come from the first and last timestamps and degrade to the
    /// placeholder on tracks with fewer than two points.
    pub fn from_track(name: &str, points: &[TrackPoint]) -> Self {
        let distance = polyline_length(points);

        let (span, elapsed) = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => (
                vec![first.timestamp_ms, last.timestamp_ms],
                Some((last.timestamp_ms - first.timestamp_ms).div_euclid(1000)),
            ),
            _ => (Vec::new(), None),
        };

        Self {
            name: name.to_string(),
            date: points
                .first()
                .map(|p| format_date(p.timestamp_ms))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            distance_km: format_distance(distance, 2),
            duration: format_duration(&span),
            pace: format_pace(elapsed, distance),
        }
    }
}
