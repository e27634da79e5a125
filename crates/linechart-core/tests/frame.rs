// File: crates/linechart-core/tests/frame.rs
// Purpose: Validate frame construction: draw order, z-order promotion, labels, guides.

use linechart_core::frame::Anchor;
use linechart_core::{Chart, ChartError, PointerEvent, Series};

fn three_series_chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::from_pairs("a", vec![(1.0, 10.0), (2.0, 30.0), (3.0, 20.0)]));
    chart.add_series(Series::from_pairs("b", vec![(1.0, 5.0), (2.0, 15.0), (3.0, 25.0)]));
    chart.add_series(Series::from_pairs("c", vec![(1.0, 40.0), (2.0, 35.0), (3.0, 30.0)]));
    chart
}

#[test]
fn empty_dataset_renders_guides_only() {
    let chart = Chart::new();
    let frame = chart.render().expect("empty render is valid");
    assert_eq!(frame.guides.len(), 2);
    assert!(frame.lines.is_empty());
    assert!(frame.markers.is_empty());
    assert!(frame.labels.is_empty());
    assert!(frame.tooltip.is_none());
}

#[test]
fn guide_lines_frame_the_plot() {
    let frame = Chart::new().render().unwrap();
    let vertical = frame.guides[0];
    assert_eq!((vertical.x1, vertical.x2), (30.0, 30.0));
    assert_eq!((vertical.y1, vertical.y2), (-100.0, 200.0));
    let horizontal = frame.guides[1];
    assert_eq!((horizontal.y1, horizontal.y2), (200.0, 200.0));
    assert_eq!((horizontal.x1, horizontal.x2), (30.0, 700.0));
}

#[test]
fn lines_follow_insertion_order_when_nothing_is_active() {
    let chart = three_series_chart();
    let frame = chart.render().unwrap();
    let order: Vec<usize> = frame.lines.iter().map(|l| l.series).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert!(frame.lines.iter().all(|l| !l.active && l.stroke_width == 2.0));
}

#[test]
fn active_series_paints_last() {
    let mut chart = three_series_chart();
    chart.handle_event(PointerEvent::Click { series: 0 });
    let frame = chart.render().unwrap();

    let order: Vec<usize> = frame.lines.iter().map(|l| l.series).collect();
    // The active line moves to the end; the others keep their relative order.
    assert_eq!(order, vec![1, 2, 0]);

    let last = frame.lines.last().unwrap();
    assert!(last.active);
    assert_eq!(last.stroke_width, 3.0);
    assert!(frame.lines[..2].iter().all(|l| l.stroke_width == 2.0));

    // Markers are never reordered: still flattened in insertion order.
    let marker_series: Vec<usize> = frame.markers.iter().map(|m| m.series).collect();
    assert_eq!(marker_series, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
}

#[test]
fn vertical_flip_happens_at_draw_time() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_pairs("s", vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]));
    let frame = chart.render().unwrap();

    // max_y = 30 on a 200-unit plot: the largest value draws at the top.
    let ys: Vec<f64> = frame.markers.iter().map(|m| m.y).collect();
    assert!((ys[2] - 0.0).abs() < 1e-9, "max value at screen top");
    assert!(ys[0] > ys[1] && ys[1] > ys[2], "screen y decreases as data y grows");
    assert_eq!(frame.lines[0].points, frame.markers.iter().map(|m| (m.x, m.y)).collect::<Vec<_>>());
}

#[test]
fn colors_are_assigned_by_position() {
    let chart = three_series_chart();
    let frame = chart.render().unwrap();
    let palette: Vec<String> = frame.lines.iter().map(|l| l.color.to_string()).collect();
    assert_eq!(palette, vec!["#FF5733", "#4287F5", "#A9A9A9"]);
    // Markers reuse the line color of their series.
    assert_eq!(frame.markers[0].color, frame.lines[0].color);
}

#[test]
fn tick_labels_for_both_axes() {
    let chart = three_series_chart();
    let frame = chart.render().unwrap();
    assert_eq!(frame.labels.len(), 10 + 25);

    let y_labels = &frame.labels[..10];
    assert!(y_labels.iter().all(|l| l.x == 20.0 && l.anchor == Anchor::End));
    let x_labels = &frame.labels[10..];
    assert!(x_labels.iter().all(|l| l.y == 220.0 && l.anchor == Anchor::Middle));

    // Every label is a floored multiple of 5.
    for l in &frame.labels {
        let v: f64 = l.text.parse().expect("numeric label");
        assert_eq!(v % 5.0, 0.0, "label {} is a multiple of 5", l.text);
    }
}

#[test]
fn degenerate_bounds_fail_the_render() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_pairs("flat", vec![(1.0, 0.0), (2.0, 0.0)]));
    assert!(matches!(
        chart.render(),
        Err(ChartError::DegenerateBounds { .. })
    ));
}

#[test]
fn series_with_no_points_render_like_empty_input() {
    let mut chart = Chart::new();
    chart.add_series(Series::new("hollow"));
    let frame = chart.render().expect("no points, no scale needed");
    assert_eq!(frame.guides.len(), 2);
    assert!(frame.lines.is_empty() && frame.markers.is_empty());
}
