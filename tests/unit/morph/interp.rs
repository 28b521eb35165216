use super::*;
use kurbo::Shape;

fn build(a: &str, b: &str) -> PathTween {
    ResamplingInterpolator
        .build(a, b, &InterpolateOptions::default())
        .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn endpoints_return_input_strings() {
    let a = "M0 0L10 0L10 10L0 10Z";
    let b = "M20 20L30 20L30 30L20 30Z";
    let tween = build(a, b);
    assert_eq!(tween(0.0), a);
    assert_eq!(tween(1.0), b);
    assert_eq!(tween(-3.0), a);
    assert_eq!(tween(7.5), b);
}

#[test]
fn midpoint_of_translated_square_is_halfway() {
    let tween = build("M0 0L10 0L10 10L0 10Z", "M20 20L30 20L30 30L20 30Z");
    let mid = BezPath::from_svg(&tween(0.5)).unwrap();
    let bb = mid.bounding_box();
    assert!(approx(bb.x0, 10.0), "{bb:?}");
    assert!(approx(bb.y0, 10.0), "{bb:?}");
    assert!(approx(bb.x1, 20.0), "{bb:?}");
    assert!(approx(bb.y1, 20.0), "{bb:?}");
}

#[test]
fn open_lines_blend_pointwise() {
    let tween = build("M0 0L100 0", "M0 100L100 100");
    let mid = BezPath::from_svg(&tween(0.25)).unwrap();
    let bb = mid.bounding_box();
    assert!(approx(bb.y0, 25.0));
    assert!(approx(bb.y1, 25.0));
    assert!(approx(bb.x0, 0.0));
    assert!(approx(bb.x1, 100.0));
}

#[test]
fn only_first_subpath_participates() {
    let tween = build("M0 0L10 0L10 10Z M500 500L600 600", "M0 0L10 0L10 10Z");
    let mid = BezPath::from_svg(&tween(0.5)).unwrap();
    assert!(mid.bounding_box().x1 <= 10.0 + 1e-6);
}

#[test]
fn sample_count_respects_caps() {
    let ring = Ring::parse("M0 0L1000 0L1000 1000L0 1000Z").unwrap();
    assert!(ring.closed);
    assert!(approx(ring.length, 4000.0));
    let pts = ring.sample(8, ring.closed);
    assert_eq!(pts.len(), 8);
    assert!(approx(pts[0].x, 0.0) && approx(pts[0].y, 0.0));
    assert!(approx(pts[2].x, 1000.0) && approx(pts[2].y, 0.0));
}

#[test]
fn rotation_aligns_closed_rings() {
    let from = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
    ];
    let to = vec![
        Point::new(1.0, 1.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
    ];
    assert_eq!(best_rotation(&from, &to), 1);
}

#[test]
fn invalid_inputs_are_rejected() {
    let opts = InterpolateOptions::default();
    assert!(ResamplingInterpolator.build("M0 0 X 5", "M0 0L1 1", &opts).is_err());
    assert!(ResamplingInterpolator.build("", "M0 0L1 1", &opts).is_err());

    let bad = InterpolateOptions {
        max_segment_length: 0.0,
        ..InterpolateOptions::default()
    };
    assert!(bad.validate().is_err());
    assert!(ResamplingInterpolator.build("M0 0L1 1", "M0 0L1 1", &bad).is_err());
}

#[test]
fn closed_to_open_keeps_closing_edge() {
    let tween = build("M0 0L10 0L10 10L0 10Z", "M0 0L10 0L10 10");
    let mid = tween(0.01);
    assert!(mid.trim_end().ends_with('Z'), "{mid}");

    // Early in the morph the shape still covers the square's full extent.
    let bb = BezPath::from_svg(&mid).unwrap().bounding_box();
    assert!(bb.x0 < 0.5 && bb.y1 > 9.5);
}
