//! WASM bridge for the polygon viewer. Exposes the Rust viewer to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the DOM
//! (text area, coordinate fields, buttons, tooltip element) and forwards
//! raw strings and pointer coordinates here; everything else happens in
//! Rust.

mod render2d;
mod svg;

use pv_core::{Axis, emit_polygons, parse_polygons};
use pv_editor::input::{Button, InputEvent};
use pv_editor::viewer::{self, Message, ViewerState};
use pv_render::{DrawList, Surface, build_draw_list};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing viewer controller.
///
/// Holds the viewer state. All interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct PolyViewer {
    state: ViewerState,
    /// `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl PolyViewer {
    /// Create a viewer for a drawing surface of the given CSS pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        // Set up panic hook and logger for the browser console
        console_setup();

        Self {
            state: ViewerState::new(Surface::new(width, height)),
            dark_mode: false,
        }
    }

    /// Replace the polygon text. Returns `true` if it parsed.
    ///
    /// On failure the drawing is cleared and `error_message` holds the reason.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.dispatch(Message::TextChanged(text.to_string()));
        self.state.error.is_none()
    }

    /// The polygon text as last set.
    pub fn get_text(&self) -> String {
        self.state.source.clone()
    }

    /// The current parse error, or an empty string.
    pub fn error_message(&self) -> String {
        self.state.error_message().unwrap_or_default()
    }

    /// Load the built-in sample and return its text for the text area.
    pub fn load_sample(&mut self) -> String {
        self.dispatch(Message::LoadSample);
        self.state.source.clone()
    }

    /// Pretty-print the current polygons in canonical form.
    pub fn format_text(&self) -> String {
        emit_polygons(&self.state.polygons)
    }

    /// Update the custom point's x field with raw text.
    pub fn set_custom_x(&mut self, raw: &str) -> bool {
        self.dispatch(Message::CoordChanged {
            axis: Axis::X,
            raw: raw.to_string(),
        })
    }

    /// Update the custom point's z field with raw text.
    pub fn set_custom_z(&mut self, raw: &str) -> bool {
        self.dispatch(Message::CoordChanged {
            axis: Axis::Z,
            raw: raw.to_string(),
        })
    }

    /// Set both coordinate fields at once. Returns true if anything visible changed.
    pub fn set_custom_point(&mut self, x_raw: &str, z_raw: &str) -> bool {
        let x = self.set_custom_x(x_raw);
        let z = self.set_custom_z(z_raw);
        x || z
    }

    /// Whether both coordinate fields currently form a point.
    pub fn has_custom_point(&self) -> bool {
        self.state.custom_point().is_some()
    }

    pub fn zoom_in(&mut self) -> bool {
        self.dispatch(Message::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.dispatch(Message::ZoomOut)
    }

    /// Zoom back to 1 and refit the view.
    pub fn reset_view(&mut self) -> bool {
        self.dispatch(Message::ResetView)
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Resize the canvas.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.dispatch(Message::Resize(Surface::new(width, height)))
    }

    /// Handle pointer down. `button` is `PointerEvent.button`.
    /// Returns true if a redraw is needed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64, button: i16) -> bool {
        let Some(button) = Button::from_dom(button) else {
            return false;
        };
        self.dispatch(Message::Pointer(InputEvent::PointerDown { x, y, button }))
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(Message::Pointer(InputEvent::PointerMove { x, y }))
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(Message::Pointer(InputEvent::PointerUp { x, y }))
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.dispatch(Message::Pointer(InputEvent::PointerLeave))
    }

    /// Handle a wheel event. `dy` is `WheelEvent.deltaY`.
    pub fn handle_wheel(&mut self, dy: f64) -> bool {
        self.dispatch(Message::Pointer(InputEvent::Wheel { dy }))
    }

    /// Handle a keyboard event. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.dispatch(Message::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Whether a drag is in progress (the host can switch cursors on this).
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Render the current frame to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = self.theme();
        let view = self.state.effective_view();
        let Some(transform) = self.state.transform() else {
            log::warn!("skipping render: no usable transform for {view:?}");
            return;
        };
        let list = self.draw_list();
        render2d::render_scene(ctx, &list, &view, &transform, self.state.surface, &theme);
    }

    /// Tooltip state as JSON: `{"visible":bool,"x":..,"y":..,"content":".."}`.
    pub fn tooltip_json(&self) -> String {
        to_json(&self.state.tooltip)
    }

    /// The effective view as JSON: `{"minX":..,"minY":..,"width":..,"height":..}`.
    pub fn view_json(&self) -> String {
        to_json(&self.state.effective_view())
    }

    /// Legend rows as JSON: `[{"label":"Polygon 1","color":"#3B82F6","points":3}, ...]`.
    pub fn legend_json(&self) -> String {
        let rows: Vec<serde_json::Value> = self
            .draw_list()
            .legend
            .iter()
            .map(|e| {
                serde_json::json!({
                    "label": e.label,
                    "color": e.color.to_hex(),
                    "points": e.points,
                })
            })
            .collect();
        serde_json::Value::Array(rows).to_string()
    }

    /// Export the current frame as an SVG document.
    pub fn export_svg(&self) -> String {
        svg::render_svg(&self.draw_list(), self.state.surface, &self.theme())
    }
}

impl PolyViewer {
    /// Run one message through the viewer. Returns true when anything
    /// visible changed.
    fn dispatch(&mut self, msg: Message) -> bool {
        let before = Snapshot::of(&self.state);
        let state = std::mem::take(&mut self.state);
        self.state = viewer::update(state, msg);
        before != Snapshot::of(&self.state)
    }

    fn draw_list(&self) -> DrawList {
        match self.state.transform() {
            Some(t) => build_draw_list(
                &self.state.polygons,
                self.state.custom_point(),
                &t,
                self.state.hovered,
            ),
            None => DrawList::default(),
        }
    }

    fn theme(&self) -> render2d::CanvasTheme {
        if self.dark_mode {
            render2d::CanvasTheme::dark()
        } else {
            render2d::CanvasTheme::light()
        }
    }
}

/// The parts of the state that affect what is on screen.
#[derive(PartialEq)]
struct Snapshot {
    view: pv_core::EffectiveView,
    source: String,
    custom: Option<pv_core::Point>,
    tooltip: pv_editor::TooltipState,
    hovered: Option<pv_render::HitTarget>,
    surface: Surface,
}

impl Snapshot {
    fn of(state: &ViewerState) -> Self {
        Self {
            view: state.effective_view(),
            source: state.source.clone(),
            custom: state.custom_point(),
            tooltip: state.tooltip.clone(),
            hovered: state.hovered,
            surface: state.surface,
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json(&format!("Serialization error: {e}")))
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "ok": false, "error": message }).to_string()
}

// ─── Console setup for WASM debugging ────────────────────────────────────

fn console_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SETUP: Once = Once::new();
        SETUP.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Polyview WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
            if let Err(e) = console_log::init_with_level(log::Level::Debug) {
                web_sys::console::warn_1(&format!("logger already set: {e}").into());
            }
        });
    }
}

// ─── Standalone functions (no viewer needed) ─────────────────────────────

/// Validate polygon text. Returns JSON: `{"ok":true,"polygons":N}` or
/// `{"ok":false,"kind":"syntax|structural|field","error":"..."}`.
#[wasm_bindgen]
pub fn validate(source: &str) -> String {
    match parse_polygons(source) {
        Ok(set) => serde_json::json!({ "ok": true, "polygons": set.len() }).to_string(),
        Err(e) => {
            let kind = match e.kind() {
                pv_core::ErrorKind::Syntax => "syntax",
                pv_core::ErrorKind::Structural => "structural",
                pv_core::ErrorKind::Field => "field",
            };
            serde_json::json!({ "ok": false, "kind": kind, "error": e.to_string() }).to_string()
        }
    }
}

/// Reformat polygon text. Returns JSON `{"ok":true,"text":"..."}` or
/// `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn format_source(source: &str) -> String {
    match parse_polygons(source) {
        Ok(set) => serde_json::json!({ "ok": true, "text": emit_polygons(&set) }).to_string(),
        Err(e) => error_json(&e.to_string()),
    }
}
