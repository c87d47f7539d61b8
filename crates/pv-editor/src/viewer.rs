//! Viewer state and its transitions.
//!
//! The whole session lives in one `ViewerState` value. Every event is a
//! `Message`, and each kind of message has a pure next-state function
//! (`text_changed`, `zoom_in`, `pointer`, ...) taking the old state by value
//! and returning the new one. `update` just dispatches.
//!
//! Control flow for an edit:
//!
//! ```text
//! text ──parse──▶ polygons | error ──refit──▶ view box (pan reset)
//!                                             ──▶ effective view ──▶ renderer
//! ```

use crate::input::InputEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::PanTool;
use crate::tooltip::{self, TooltipState};
use crate::zoom::{self, DEFAULT_ZOOM};
use kurbo::Point as ScreenPoint;
use pv_core::{
    Axis, CustomPointInput, EffectiveView, PanOffset, ParseError, Point, PolygonSet,
    SAMPLE_POLYGONS, ViewBox, compute_bounds, compute_effective_view, compute_view_box,
    parse_polygons,
};
use pv_render::{HitTarget, Surface, VERTEX_HIT_RADIUS, ViewTransform, hit_test};

/// Everything the viewer knows.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Polygon text exactly as the user typed it.
    pub source: String,
    /// Last successful parse; empty after a failed one.
    pub polygons: PolygonSet,
    /// Error from the last parse, if it failed.
    pub error: Option<ParseError>,
    pub custom: CustomPointInput,
    /// Fit of the current geometry. Independent of zoom and pan.
    pub view_box: ViewBox,
    pub zoom: f64,
    pub pan: PanOffset,
    pub surface: Surface,
    pub tooltip: TooltipState,
    pub hovered: Option<HitTarget>,
    pan_tool: PanTool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

/// The three values a renderer consumes.
#[derive(Debug, Clone, Copy)]
pub struct RenderHandoff<'a> {
    pub view: EffectiveView,
    pub polygons: &'a PolygonSet,
    pub custom_point: Option<Point>,
}

impl ViewerState {
    pub fn new(surface: Surface) -> Self {
        Self {
            source: String::new(),
            polygons: PolygonSet::new(),
            error: None,
            custom: CustomPointInput::default(),
            view_box: ViewBox::default(),
            zoom: DEFAULT_ZOOM,
            pan: PanOffset::ZERO,
            surface,
            tooltip: TooltipState::default(),
            hovered: None,
            pan_tool: PanTool::new(),
        }
    }

    pub fn custom_point(&self) -> Option<Point> {
        self.custom.point()
    }

    pub fn effective_view(&self) -> EffectiveView {
        compute_effective_view(self.view_box, self.zoom, self.pan)
    }

    pub fn render_handoff(&self) -> RenderHandoff<'_> {
        RenderHandoff {
            view: self.effective_view(),
            polygons: &self.polygons,
            custom_point: self.custom_point(),
        }
    }

    /// View → surface mapping for the current frame.
    pub fn transform(&self) -> Option<ViewTransform> {
        ViewTransform::new(&self.effective_view(), self.surface)
    }

    pub fn is_dragging(&self) -> bool {
        self.pan_tool.is_dragging()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Hide the tooltip and drop the hover highlight. Any change to the
    /// effective view moves markers out from under the pointer.
    fn clear_hover(&mut self) {
        self.tooltip = tooltip::leave();
        self.hovered = None;
    }

    /// Recompute the view box from current geometry. Pan is always reset:
    /// it was measured against the old box.
    fn refit(mut self) -> Self {
        self.view_box = compute_view_box(compute_bounds(&self.polygons, self.custom_point()));
        self.pan = PanOffset::ZERO;
        self.clear_hover();
        log::debug!("refit view box {:?}", self.view_box);
        self
    }
}

/// Every event the viewer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TextChanged(String),
    CoordChanged { axis: Axis, raw: String },
    LoadSample,
    ZoomIn,
    ZoomOut,
    ResetView,
    Pointer(InputEvent),
    Resize(Surface),
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

/// Apply one message.
pub fn update(state: ViewerState, msg: Message) -> ViewerState {
    match msg {
        Message::TextChanged(text) => text_changed(state, text),
        Message::CoordChanged { axis, raw } => coord_changed(state, axis, raw),
        Message::LoadSample => load_sample(state),
        Message::ZoomIn => zoom_in(state),
        Message::ZoomOut => zoom_out(state),
        Message::ResetView => reset_view(state),
        Message::Pointer(event) => pointer(state, event),
        Message::Resize(surface) => resize(state, surface),
        Message::Key {
            key,
            ctrl,
            shift,
            alt,
            meta,
        } => self::key(state, &key, ctrl, shift, alt, meta),
    }
}

// ─── Document edits ──────────────────────────────────────────────────────

/// Re-parse the polygon text. A failed parse clears the drawing and keeps
/// only the error, so stale geometry is never shown next to it.
pub fn text_changed(mut state: ViewerState, text: String) -> ViewerState {
    match parse_polygons(&text) {
        Ok(polygons) => {
            log::debug!(
                "parsed {} polygons ({} points)",
                polygons.len(),
                polygons.point_count()
            );
            state.polygons = polygons;
            state.error = None;
        }
        Err(e) => {
            log::warn!("polygon text rejected: {e}");
            state.polygons = PolygonSet::new();
            state.error = Some(e);
        }
    }
    state.source = text;
    state.refit()
}

/// Edit one coordinate field. Partial or invalid entries clear the custom
/// point silently.
pub fn coord_changed(mut state: ViewerState, axis: Axis, raw: String) -> ViewerState {
    let before = state.custom_point();
    state.custom.set(axis, raw);
    let after = state.custom_point();
    if before == after {
        return state;
    }
    log::debug!("custom point {before:?} -> {after:?}");
    state.refit()
}

pub fn load_sample(state: ViewerState) -> ViewerState {
    text_changed(state, SAMPLE_POLYGONS.to_string())
}

// ─── View ────────────────────────────────────────────────────────────────

pub fn zoom_in(mut state: ViewerState) -> ViewerState {
    state.zoom = zoom::zoom_in(state.zoom);
    state.clear_hover();
    state
}

pub fn zoom_out(mut state: ViewerState) -> ViewerState {
    state.zoom = zoom::zoom_out(state.zoom);
    state.clear_hover();
    state
}

/// Zoom back to 1 and refit the view to the current geometry.
pub fn reset_view(mut state: ViewerState) -> ViewerState {
    state.zoom = DEFAULT_ZOOM;
    state.refit()
}

pub fn resize(mut state: ViewerState, surface: Surface) -> ViewerState {
    if !surface.is_usable() {
        log::warn!("ignoring resize to {surface:?}");
        return state;
    }
    state.surface = surface;
    state
}

// ─── Pointer ─────────────────────────────────────────────────────────────

pub fn pointer(mut state: ViewerState, event: InputEvent) -> ViewerState {
    let view = state.effective_view();
    let was_dragging = state.pan_tool.is_dragging();

    if let Some(delta) = state.pan_tool.handle(&event, &view, state.surface) {
        state.pan.x += delta.x;
        state.pan.y += delta.y;
        return state;
    }

    match event {
        InputEvent::PointerDown { .. } => {
            if state.pan_tool.is_dragging() {
                state.clear_hover();
            }
        }
        InputEvent::PointerMove { x, y } if !was_dragging => {
            state = hover_at(state, x, y);
        }
        InputEvent::PointerLeave => state.clear_hover(),
        InputEvent::Wheel { dy } => {
            let zoom = zoom::zoom_for_wheel(state.zoom, dy);
            if zoom != state.zoom {
                state.zoom = zoom;
                state.clear_hover();
            }
        }
        _ => {}
    }
    state
}

fn hover_at(mut state: ViewerState, x: f64, y: f64) -> ViewerState {
    let custom = state.custom_point();
    let target = state.transform().and_then(|t| {
        hit_test(
            &state.polygons,
            custom,
            &t,
            ScreenPoint::new(x, y),
            VERTEX_HIT_RADIUS,
        )
    });
    let resolved = target.and_then(|t| Some((t, t.resolve(&state.polygons, custom)?)));

    match resolved {
        Some((target, point)) => {
            state.tooltip = tooltip::hover(point, &target.to_string(), x, y);
            state.hovered = Some(target);
        }
        None => state.clear_hover(),
    }
    state
}

// ─── Keyboard ────────────────────────────────────────────────────────────

pub fn key(
    mut state: ViewerState,
    key: &str,
    ctrl: bool,
    shift: bool,
    alt: bool,
    meta: bool,
) -> ViewerState {
    match ShortcutMap::resolve(key, ctrl, shift, alt, meta) {
        Some(ShortcutAction::ZoomIn) => zoom_in(state),
        Some(ShortcutAction::ZoomOut) => zoom_out(state),
        Some(ShortcutAction::ResetView) => reset_view(state),
        Some(ShortcutAction::HideTooltip) => {
            state.clear_hover();
            state
        }
        None => state,
    }
}
