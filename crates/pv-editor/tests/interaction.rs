//! Integration tests: viewer state driven end-to-end through messages.
//!
//! Uses the built-in sample on a 480×280 surface. The sample fits to the
//! view box (-20, -20, 240, 140), so at zoom 1 one view unit is two pixels
//! and sample vertex (0, 0) sits at pixel (40, 40).

use pv_core::{Axis, PanOffset, Point};
use pv_editor::viewer::{self, Message, ViewerState};
use pv_editor::{Button, InputEvent};
use pv_render::Surface;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_state() -> ViewerState {
    init_logging();
    viewer::update(
        ViewerState::new(Surface::new(480.0, 280.0)),
        Message::LoadSample,
    )
}

fn send(state: ViewerState, event: InputEvent) -> ViewerState {
    viewer::update(state, Message::Pointer(event))
}

fn drag(state: ViewerState, path: &[(f64, f64)]) -> ViewerState {
    let (x0, y0) = path[0];
    let mut state = send(
        state,
        InputEvent::PointerDown {
            x: x0,
            y: y0,
            button: Button::Primary,
        },
    );
    for &(x, y) in &path[1..] {
        state = send(state, InputEvent::PointerMove { x, y });
    }
    let &(xn, yn) = path.last().unwrap_or(&(x0, y0));
    send(state, InputEvent::PointerUp { x: xn, y: yn })
}

// ─── Drag ───────────────────────────────────────────────────────────────

#[test]
fn drag_is_linear_in_incremental_steps() {
    let stepped = drag(sample_state(), &[(100.0, 100.0), (130.0, 90.0), (150.0, 140.0)]);
    let single = drag(sample_state(), &[(100.0, 100.0), (150.0, 140.0)]);
    assert!(approx_eq(stepped.pan.x, single.pan.x));
    assert!(approx_eq(stepped.pan.y, single.pan.y));
    // 50px right and 40px down at 2px per unit.
    assert!(approx_eq(single.pan.x, -25.0));
    assert!(approx_eq(single.pan.y, -20.0));
}

#[test]
fn dragged_vertex_stays_under_pointer() {
    let state = drag(sample_state(), &[(40.0, 40.0), (75.0, 62.0), (100.0, 70.0)]);
    let t = state.transform().unwrap();
    let s = t.to_screen(Point::new(0.0, 0.0).to_view());
    assert!(approx_eq(s.x, 100.0), "x = {}", s.x);
    assert!(approx_eq(s.y, 70.0), "y = {}", s.y);
}

#[test]
fn zoom_scales_drag() {
    let state = viewer::update(sample_state(), Message::ZoomIn);
    let state = drag(state, &[(0.0, 0.0), (30.0, 0.0)]);
    // At zoom 1.5 the view is 160 units over 480px.
    assert!(approx_eq(state.pan.x, -10.0));
    assert!(approx_eq(state.pan.y, 0.0));
}

#[test]
fn secondary_drag_does_not_pan() {
    let state = send(
        sample_state(),
        InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: Button::Secondary,
        },
    );
    let state = send(state, InputEvent::PointerMove { x: 50.0, y: 50.0 });
    assert_eq!(state.pan, PanOffset::ZERO);
}

#[test]
fn leaving_surface_ends_drag() {
    let state = send(
        sample_state(),
        InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: Button::Primary,
        },
    );
    let state = send(state, InputEvent::PointerLeave);
    assert!(!state.is_dragging());
    let state = send(state, InputEvent::PointerMove { x: 80.0, y: 80.0 });
    assert_eq!(state.pan, PanOffset::ZERO);
}

// ─── Reset ──────────────────────────────────────────────────────────────

#[test]
fn reset_restores_fit_after_pan_and_zoom() {
    let fitted = sample_state();
    let fitted_box = fitted.view_box;

    let state = viewer::update(fitted, Message::ZoomIn);
    let state = viewer::update(state, Message::ZoomIn);
    let state = drag(state, &[(10.0, 10.0), (200.0, 120.0)]);
    assert_ne!(state.pan, PanOffset::ZERO);

    let state = viewer::update(state, Message::ResetView);
    assert_eq!(state.zoom, 1.0);
    assert_eq!(state.pan, PanOffset::ZERO);
    assert_eq!(state.view_box, fitted_box);
}

#[test]
fn reset_includes_custom_point() {
    let state = viewer::update(
        sample_state(),
        Message::CoordChanged {
            axis: Axis::X,
            raw: "1000".into(),
        },
    );
    let state = viewer::update(
        state,
        Message::CoordChanged {
            axis: Axis::Z,
            raw: "50".into(),
        },
    );
    let with_point = state.view_box;
    let state = viewer::update(state, Message::ResetView);
    assert_eq!(state.view_box, with_point);
    assert!(state.view_box.min_x + state.view_box.width > 1000.0);
}

#[test]
fn text_edit_after_drag_resets_pan_keeps_zoom() {
    let state = viewer::update(sample_state(), Message::ZoomIn);
    let dragged = drag(state, &[(10.0, 10.0), (90.0, 60.0)]);
    assert_ne!(dragged.pan, PanOffset::ZERO);

    let valid = viewer::update(
        dragged.clone(),
        Message::TextChanged(r#"[[{"x": 5, "z": 5}, {"x": 30, "z": 12}]]"#.into()),
    );
    assert!(valid.error.is_none());
    assert_eq!(valid.pan, PanOffset::ZERO);
    assert_eq!(valid.zoom, 1.5);

    let invalid = viewer::update(dragged, Message::TextChanged("[[{\"x\": 5}]]".into()));
    assert!(invalid.error.is_some());
    assert_eq!(invalid.pan, PanOffset::ZERO);
    assert_eq!(invalid.zoom, 1.5);
}

// ─── Tooltip ────────────────────────────────────────────────────────────

#[test]
fn hover_vertex_shows_tooltip() {
    let state = send(sample_state(), InputEvent::PointerMove { x: 42.0, y: 39.0 });
    assert!(state.tooltip.visible);
    assert_eq!(state.tooltip.x, 52.0);
    assert_eq!(state.tooltip.y, 29.0);
    assert_eq!(state.tooltip.content, "Polygon 1, Point 1\nx: 0.000, z: 0.000");

    let state = send(state, InputEvent::PointerMove { x: 300.0, y: 250.0 });
    assert!(!state.tooltip.visible);
    assert_eq!(state.hovered, None);
}

#[test]
fn hover_custom_point() {
    let state = viewer::update(
        sample_state(),
        Message::CoordChanged {
            axis: Axis::X,
            raw: "60".into(),
        },
    );
    let state = viewer::update(
        state,
        Message::CoordChanged {
            axis: Axis::Z,
            raw: "40.5".into(),
        },
    );
    let t = state.transform().unwrap();
    let s = t.to_screen(Point::new(60.0, 40.5).to_view());
    let state = send(state, InputEvent::PointerMove { x: s.x, y: s.y });
    assert!(state.tooltip.visible);
    assert_eq!(state.tooltip.content, "Custom Point\nx: 60.000, z: 40.500");
}

#[test]
fn tooltip_suppressed_while_dragging() {
    let state = send(sample_state(), InputEvent::PointerMove { x: 40.0, y: 40.0 });
    assert!(state.tooltip.visible);

    let state = send(
        state,
        InputEvent::PointerDown {
            x: 40.0,
            y: 40.0,
            button: Button::Primary,
        },
    );
    assert!(!state.tooltip.visible);

    // The vertex follows the pointer, but no tooltip while dragging.
    let state = send(state, InputEvent::PointerMove { x: 44.0, y: 40.0 });
    assert!(!state.tooltip.visible);

    let state = send(state, InputEvent::PointerUp { x: 44.0, y: 40.0 });
    let state = send(state, InputEvent::PointerMove { x: 44.0, y: 40.0 });
    assert!(state.tooltip.visible);
}

#[test]
fn zoom_hides_stale_tooltip() {
    let hovered = send(sample_state(), InputEvent::PointerMove { x: 40.0, y: 40.0 });
    assert!(hovered.tooltip.visible);

    for msg in [
        Message::ZoomIn,
        Message::ZoomOut,
        Message::Key {
            key: "+".into(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        },
    ] {
        let state = viewer::update(hovered.clone(), msg);
        assert!(!state.tooltip.visible);
        assert_eq!(state.hovered, None);
    }

    // The vertex moved to (60, 60); hovering there picks it up again.
    let state = viewer::update(hovered, Message::ZoomIn);
    let state = send(state, InputEvent::PointerMove { x: 60.0, y: 60.0 });
    assert!(state.tooltip.visible);
    assert_eq!(state.tooltip.content, "Polygon 1, Point 1\nx: 0.000, z: 0.000");
}

// ─── Render handoff ─────────────────────────────────────────────────────

#[test]
fn handoff_reflects_zoom_and_pan() {
    let state = viewer::update(sample_state(), Message::ZoomIn);
    let state = drag(state, &[(0.0, 0.0), (0.0, 30.0)]);
    let handoff = state.render_handoff();
    assert_eq!(handoff.polygons.len(), 2);
    assert_eq!(handoff.custom_point, None);
    assert!(approx_eq(handoff.view.width, 240.0 / 1.5));
    assert!(approx_eq(handoff.view.height, 140.0 / 1.5));
    assert!(approx_eq(handoff.view.min_x, -20.0));
    assert!(approx_eq(handoff.view.min_y, -20.0 - 30.0 * (140.0 / 1.5) / 280.0));
}

#[test]
fn bad_text_after_sample_fails_closed() {
    let state = viewer::update(sample_state(), Message::TextChanged("[1, 2]".into()));
    assert!(state.polygons.is_empty());
    assert_eq!(
        state.error_message().as_deref(),
        Some("Polygon 0 must be an array of points")
    );
    let handoff = state.render_handoff();
    assert_eq!(handoff.view.width, 100.0);
}
