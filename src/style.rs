//! Gap classification and per-class polyline styles.
//!
//! A segment's class decides how it is drawn: tracked motion gets a
//! three-layer "highlighted route" stack, a recording gap gets a single
//! dashed gray line signalling uncertain position. The tables are static;
//! layer order is render order, outermost first.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Elapsed milliseconds between consecutive points above which the
/// recording counts as interrupted.
///
/// 90 seconds separates a stationary pause or signal loss from normal GPS
/// sampling jitter. Chosen empirically; tune via
/// [`SegmentConfig`](crate::SegmentConfig) when the default does not fit
/// the recording interval.
pub const GAP_THRESHOLD_MS: i64 = 90_000;

/// Classification of the transition between two consecutive track points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GapClass {
    /// The device kept recording at its normal interval.
    Continuous,
    /// The device paused or lost signal between the two points.
    Gap,
}

impl GapClass {
    /// Classify the elapsed time between two consecutive points.
    ///
    /// Total over all deltas: the threshold itself is still continuous,
    /// and a zero or negative delta (duplicate or out-of-order timestamps)
    /// classifies as [`GapClass::Continuous`] rather than being rejected.
    ///
    /// # Example
    /// ```
    /// use track_render::GapClass;
    ///
    /// assert_eq!(GapClass::classify(10_000), GapClass::Continuous);
    /// assert_eq!(GapClass::classify(120_000), GapClass::Gap);
    /// ```
    #[inline]
    pub fn classify(delta_ms: i64) -> Self {
        Self::classify_with(delta_ms, GAP_THRESHOLD_MS)
    }

    #[inline]
    pub(crate) fn classify_with(delta_ms: i64, threshold_ms: i64) -> Self {
        if delta_ms > threshold_ms {
            GapClass::Gap
        } else {
            GapClass::Continuous
        }
    }
}

/// One stroke in a stacked polyline style.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StyleLayer {
    /// CSS color of the stroke.
    pub color: &'static str,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke opacity, 0.0 to 1.0.
    pub opacity: f64,
    /// SVG dash pattern, `None` for a solid stroke.
    pub dash_array: Option<&'static str>,
}

/// Style stack for tracked motion: wide dark outline, near-opaque white
/// mid layer, thin accent line on top.
pub const CONTINUOUS_STYLE: [StyleLayer; 3] = [
    StyleLayer {
        color: "black",
        weight: 8.0,
        opacity: 0.5,
        dash_array: None,
    },
    StyleLayer {
        color: "white",
        weight: 7.0,
        opacity: 0.9,
        dash_array: None,
    },
    StyleLayer {
        color: "blue",
        weight: 2.0,
        opacity: 1.0,
        dash_array: None,
    },
];

/// Style for a recording gap: a single dashed gray line.
pub const GAP_STYLE: [StyleLayer; 1] = [StyleLayer {
    color: "#888",
    weight: 3.0,
    opacity: 0.8,
    dash_array: Some("5,7"),
}];

/// The stacked stroke styles for a segment class, outermost first.
pub fn style_layers(class: GapClass) -> &'static [StyleLayer] {
    match class {
        GapClass::Continuous => &CONTINUOUS_STYLE,
        GapClass::Gap => &GAP_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_below_threshold() {
        assert_eq!(GapClass::classify(0), GapClass::Continuous);
        assert_eq!(GapClass::classify(10_000), GapClass::Continuous);
        assert_eq!(GapClass::classify(89_999), GapClass::Continuous);
    }

    #[test]
    fn test_classify_threshold_is_continuous() {
        // The boundary value itself does not count as a gap
        assert_eq!(GapClass::classify(GAP_THRESHOLD_MS), GapClass::Continuous);
        assert_eq!(GapClass::classify(GAP_THRESHOLD_MS + 1), GapClass::Gap);
    }

    #[test]
    fn test_classify_negative_delta_is_continuous() {
        // Out-of-order timestamps are absorbed, not rejected
        assert_eq!(GapClass::classify(-1), GapClass::Continuous);
        assert_eq!(GapClass::classify(i64::MIN), GapClass::Continuous);
    }

    #[test]
    fn test_classify_large_delta_is_gap() {
        assert_eq!(GapClass::classify(i64::MAX), GapClass::Gap);
    }

    #[test]
    fn test_continuous_style_stack() {
        let layers = style_layers(GapClass::Continuous);
        assert_eq!(layers.len(), 3);
        // Outermost first: widths decrease towards the accent line
        assert!(layers[0].weight > layers[1].weight);
        assert!(layers[1].weight > layers[2].weight);
        assert!(layers.iter().all(|l| l.dash_array.is_none()));
    }

    #[test]
    fn test_gap_style_is_single_dashed_line() {
        let layers = style_layers(GapClass::Gap);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].dash_array, Some("5,7"));
        assert!(layers[0].opacity < 1.0);
    }
}
