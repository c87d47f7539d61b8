//! Canvas2D software renderer.
//!
//! Draws a `DrawList` to an HTML `<canvas>` via `CanvasRenderingContext2d`.
//! The grid and axes are computed here from the effective view; everything
//! else is already in surface pixels.

use kurbo::PathEl;
use pv_core::{EffectiveView, ViewPoint};
use pv_render::{DrawList, Marker, Surface, ViewTransform};
use web_sys::CanvasRenderingContext2d;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub marker_outline: &'static str,
    pub legend_bg: &'static str,
    pub legend_text: &'static str,
}

impl CanvasTheme {
    /// Light theme, warm white canvas.
    pub fn light() -> Self {
        Self {
            bg: "#F5F5F7",
            grid: "rgba(0, 0, 0, 0.06)",
            axis: "rgba(0, 0, 0, 0.25)",
            marker_outline: "#FFFFFF",
            legend_bg: "rgba(255, 255, 255, 0.85)",
            legend_text: "#1D1D1F",
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            grid: "rgba(255, 255, 255, 0.05)",
            axis: "rgba(255, 255, 255, 0.3)",
            marker_outline: "#1C1C1E",
            legend_bg: "rgba(44, 44, 46, 0.85)",
            legend_text: "#F5F5F7",
        }
    }
}

/// Grid spacing in view units: 1, 2, or 5 × 10ⁿ, giving roughly
/// `target_lines` lines across `span`.
pub fn grid_step(span: f64, target_lines: f64) -> f64 {
    if !(span.is_finite() && span > 0.0 && target_lines > 0.0) {
        return 1.0;
    }
    let raw = span / target_lines;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Upper bound on grid lines per axis.
pub const MAX_GRID_LINES: usize = 1000;

/// View-space positions of the grid lines in `[min, max]`, at multiples of
/// `step`. Empty when `step` is below the float resolution at `min` or the
/// range would need more than [`MAX_GRID_LINES`] lines.
pub fn grid_lines(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite() && step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    if min + step == min {
        return Vec::new();
    }
    let first = (min / step).ceil();
    let last = (max / step).floor();
    if !(first.is_finite() && last.is_finite()) || last < first {
        return Vec::new();
    }
    let count = (last - first) as usize + 1;
    if count > MAX_GRID_LINES {
        log::debug!("skipping grid: {count} lines between {min} and {max}");
        return Vec::new();
    }
    (0..count).map(|i| (first + i as f64) * step).collect()
}

/// Render one frame.
pub fn render_scene(
    ctx: &CanvasRenderingContext2d,
    list: &DrawList,
    view: &EffectiveView,
    transform: &ViewTransform,
    surface: Surface,
    theme: &CanvasTheme,
) {
    // Clear canvas
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, surface.width, surface.height);

    draw_grid(ctx, view, transform, surface, theme);

    for poly in &list.polygons {
        ctx.save();
        trace_path(ctx, poly.path.elements());
        if let Some(fill) = poly.fill {
            ctx.set_fill_style_str(&fill.to_css());
            ctx.fill();
        }
        ctx.set_stroke_style_str(&poly.stroke.to_css());
        ctx.set_line_width(2.0);
        ctx.set_line_join("round");
        if !poly.closed {
            let _ = ctx.set_line_dash(&js_sys::Array::of2(
                &wasm_bindgen::JsValue::from_f64(6.0),
                &wasm_bindgen::JsValue::from_f64(4.0),
            ));
        }
        ctx.stroke();
        ctx.restore();
    }

    for marker in &list.markers {
        draw_marker(ctx, marker, theme);
    }

    draw_legend(ctx, list, theme);
}

fn trace_path(ctx: &CanvasRenderingContext2d, elements: &[PathEl]) {
    ctx.begin_path();
    for el in elements {
        match *el {
            PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
            PathEl::QuadTo(c, p) => ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
            PathEl::CurveTo(c1, c2, p) => ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathEl::ClosePath => ctx.close_path(),
        }
    }
}

fn draw_marker(ctx: &CanvasRenderingContext2d, m: &Marker, theme: &CanvasTheme) {
    ctx.save();
    ctx.begin_path();
    let _ = ctx.arc(m.center.x, m.center.y, m.radius, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(&m.color.to_css());
    ctx.fill();
    ctx.set_stroke_style_str(theme.marker_outline);
    ctx.set_line_width(if m.hovered { 2.0 } else { 1.0 });
    ctx.stroke();
    ctx.restore();
}

fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    view: &EffectiveView,
    transform: &ViewTransform,
    surface: Surface,
    theme: &CanvasTheme,
) {
    let step_x = grid_step(view.width, 10.0);
    let step_y = grid_step(view.height, 10.0);

    ctx.save();
    ctx.set_stroke_style_str(theme.grid);
    ctx.set_line_width(1.0);
    ctx.begin_path();

    for x in grid_lines(view.min_x, view.max_x(), step_x) {
        let sx = transform.to_screen(ViewPoint::new(x, view.min_y)).x.round() + 0.5;
        ctx.move_to(sx, 0.0);
        ctx.line_to(sx, surface.height);
    }
    for y in grid_lines(view.min_y, view.max_y(), step_y) {
        let sy = transform.to_screen(ViewPoint::new(view.min_x, y)).y.round() + 0.5;
        ctx.move_to(0.0, sy);
        ctx.line_to(surface.width, sy);
    }
    ctx.stroke();

    // Axes through the data origin, when visible.
    let origin = transform.to_screen(ViewPoint::new(0.0, 0.0));
    ctx.set_stroke_style_str(theme.axis);
    let _ = ctx.set_line_dash(&js_sys::Array::of2(
        &wasm_bindgen::JsValue::from_f64(4.0),
        &wasm_bindgen::JsValue::from_f64(4.0),
    ));
    ctx.begin_path();
    if (0.0..=surface.width).contains(&origin.x) {
        ctx.move_to(origin.x, 0.0);
        ctx.line_to(origin.x, surface.height);
    }
    if (0.0..=surface.height).contains(&origin.y) {
        ctx.move_to(0.0, origin.y);
        ctx.line_to(surface.width, origin.y);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_legend(ctx: &CanvasRenderingContext2d, list: &DrawList, theme: &CanvasTheme) {
    if list.legend.is_empty() {
        return;
    }
    let row = 18.0;
    let pad = 8.0;
    let width = 150.0;
    let height = pad * 2.0 + row * list.legend.len() as f64;

    ctx.save();
    ctx.set_fill_style_str(theme.legend_bg);
    ctx.fill_rect(pad, pad, width, height);

    ctx.set_font("12px Inter, system-ui, sans-serif");
    ctx.set_text_baseline("middle");
    for (i, entry) in list.legend.iter().enumerate() {
        let y = pad * 2.0 + row * i as f64 + row / 2.0;
        ctx.set_fill_style_str(&entry.color.to_css());
        ctx.fill_rect(pad * 2.0, y - 5.0, 10.0, 10.0);
        ctx.set_fill_style_str(theme.legend_text);
        let text = format!("{} ({} pts)", entry.label, entry.points);
        let _ = ctx.fill_text(&text, pad * 2.0 + 16.0, y);
    }
    ctx.restore();
}
