// File: crates/linechart-svg/tests/svg.rs
// Purpose: Validate SVG serialization of a rendered frame.

use linechart_core::{Chart, PointerEvent, Series};
use linechart_svg::frame_to_svg;

fn sample_chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::from_pairs("a", vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]));
    chart.add_series(Series::from_pairs("b", vec![(1.0, 30.0), (2.0, 20.0), (3.0, 10.0)]));
    chart
}

#[test]
fn document_shape_and_element_counts() {
    let frame = sample_chart().render().unwrap();
    let svg = frame_to_svg(&frame);

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"width="800" height="400""#));

    assert_eq!(svg.matches("<path ").count(), 2, "one path per series");
    assert_eq!(svg.matches("<circle ").count(), 6, "one circle per point");
    assert_eq!(svg.matches("<text ").count(), 35, "10 + 25 tick labels");
    assert_eq!(svg.matches("<line ").count(), 2, "two guide lines");
}

#[test]
fn paths_use_move_then_line_commands() {
    let frame = sample_chart().render().unwrap();
    let svg = frame_to_svg(&frame);
    assert!(svg.contains(r#"d="M"#), "path starts with a move");
    assert!(svg.contains(" L"), "subsequent points are line-to commands");
    assert!(svg.contains(r#"fill="none""#));
    assert!(svg.contains(r##"stroke="#FF5733""##));
}

#[test]
fn active_class_and_tooltip_overlay() {
    let mut chart = sample_chart();
    chart.handle_event(PointerEvent::Click { series: 1 });
    chart.handle_event(PointerEvent::PointerEnter {
        series: 1,
        point: 0,
        pointer_x: 90.0,
        pointer_y: 80.0,
    });
    let svg = frame_to_svg(&chart.render().unwrap());

    assert!(svg.contains(r#"class="active""#));
    assert!(svg.contains(r#"stroke-width="3""#));
    assert!(svg.contains(r#"class="tooltip""#));
    // Tooltip sits at pointer + (10, -30).
    assert!(svg.contains(r#"x="100" y="50""#));
}
