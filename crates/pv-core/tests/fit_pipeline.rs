//! Integration tests: text → PolygonSet → bounds → view box → effective view.

use pv_core::viewport::{DEFAULT_BOUNDS, PADDING_RATIO};
use pv_core::*;

fn outline() -> PolygonSet {
    parse_polygons(include_str!("fixtures/base_outline.json")).unwrap()
}

// ─── Containment ────────────────────────────────────────────────────────

#[test]
fn bounds_contain_every_point() {
    let set = outline();
    let b = compute_bounds(&set, None);
    for p in set.points() {
        let v = p.value.to_view();
        assert!(
            b.contains(v.x, v.y),
            "polygon {} point {} ({}, {}) outside {b:?}",
            p.polygon,
            p.point,
            p.value.x,
            p.value.z
        );
    }
}

#[test]
fn bounds_contain_custom_point() {
    let set = outline();
    let custom = Point::new(-500.0, 900.0);
    let b = compute_bounds(&set, Some(custom));
    let v = custom.to_view();
    assert!(b.contains(v.x, v.y));
    for p in set.points() {
        let v = p.value.to_view();
        assert!(b.contains(v.x, v.y));
    }
}

#[test]
fn padding_is_strictly_outside_geometry() {
    let set = outline();
    let b = compute_bounds(&set, None);
    // Raw extents: x ∈ [-120.5, 352], z ∈ [-40, 112.25].
    let raw_w = 352.0 - -120.5;
    let pad = raw_w * PADDING_RATIO;
    assert!((b.min_x - (-120.5 - pad)).abs() < 1e-9);
    assert!((b.max_x - (352.0 + pad)).abs() < 1e-9);
    assert!((b.min_y - (-40.0 - pad)).abs() < 1e-9);
    assert!((b.max_y - (112.25 + pad)).abs() < 1e-9);
}

// ─── Sample & defaults ──────────────────────────────────────────────────

#[test]
fn sample_fits_and_round_trips() {
    let set = parse_polygons(SAMPLE_POLYGONS).unwrap();
    let vb = compute_view_box(compute_bounds(&set, None));
    // Sample spans x ∈ [0, 200], z ∈ [0, 100] → padding 20.
    assert_eq!(
        vb,
        ViewBox {
            min_x: -20.0,
            min_y: -20.0,
            width: 240.0,
            height: 140.0,
        }
    );
    assert_eq!(parse_polygons(&emit_polygons(&set)).unwrap(), set);
}

#[test]
fn failed_parse_leaves_default_fit() {
    assert!(parse_polygons("[[{\"x\": 1}]]").is_err());
    let vb = compute_view_box(compute_bounds(&PolygonSet::new(), None));
    assert_eq!(vb, compute_view_box(DEFAULT_BOUNDS));
}

// ─── Effective view ─────────────────────────────────────────────────────

#[test]
fn zoom_shrinks_around_pan_origin() {
    let set = outline();
    let vb = compute_view_box(compute_bounds(&set, None));
    let ev = compute_effective_view(vb, 1.5, PanOffset { x: 4.0, y: -2.0 });
    assert!((ev.width - vb.width / 1.5).abs() < 1e-9);
    assert!((ev.height - vb.height / 1.5).abs() < 1e-9);
    assert_eq!(ev.min_x, vb.min_x + 4.0);
    assert_eq!(ev.min_y, vb.min_y - 2.0);
}
