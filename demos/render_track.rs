//! Segment a recorded track with a mid-ride pause and print what the map
//! layer would draw.
//!
//! Run with: cargo run --example render_track

use track_render::{segment_track, SegmentConfig, TrackPoint, TrackSummary};

fn main() {
    // A short ride through London with a three minute pause in the middle
    let mut points = Vec::new();
    let mut t: i64 = 1_431_680_400_000; // 2015-05-15 09:00 UTC
    for i in 0..10 {
        points.push(TrackPoint::new(
            51.5074 + i as f64 * 0.0008,
            -0.1278 - i as f64 * 0.0005,
            t,
        ));
        t += if i == 4 { 180_000 } else { 10_000 };
    }

    let config = SegmentConfig::default();
    let track = segment_track(&points, &config);

    println!("Track Segmentation Example\n");
    println!("Gap threshold: {}ms\n", config.gap_threshold_ms);

    for (i, segment) in track.segments.iter().enumerate() {
        println!(
            "Segment {}: {:?}, {} points",
            i + 1,
            segment.class,
            segment.points.len()
        );
        for layer in segment.style() {
            println!(
                "   stroke: color={} weight={} opacity={} dash={:?}",
                layer.color, layer.weight, layer.opacity, layer.dash_array
            );
        }
    }

    if let Some(bounds) = track.bounds {
        let (lat, lng) = bounds.center();
        println!("\nFit viewport to: {:?}", bounds);
        println!("Centered on: ({:.4}, {:.4})", lat, lng);
    }

    let summary = TrackSummary::from_track("Morning ride", &points);
    println!(
        "\n{} | {} | {} km | {} | {}",
        summary.name, summary.date, summary.distance_km, summary.duration, summary.pace
    );
}
