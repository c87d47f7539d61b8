//! SVG export of the current frame.
//!
//! Exports exactly what the canvas shows: the draw list is already in
//! surface pixels, so the SVG's size is the surface size.

use crate::render2d::CanvasTheme;
use pv_render::{DrawList, Surface};

pub fn render_svg(list: &DrawList, surface: Surface, theme: &CanvasTheme) -> String {
    let (w, h) = (surface.width, surface.height);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\" />\n",
        theme.bg
    ));

    for poly in &list.polygons {
        let fill = poly
            .fill
            .map_or_else(|| "none".to_string(), |c| c.to_hex());
        let fill_opacity = poly.fill.map_or(1.0, |c| c.a);
        let dash = if poly.closed {
            ""
        } else {
            " stroke-dasharray=\"6 4\""
        };
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"{fill}\" fill-opacity=\"{fill_opacity}\" stroke=\"{}\" stroke-width=\"2\" stroke-linejoin=\"round\"{dash} />\n",
            poly.path.to_svg(),
            poly.stroke.to_hex(),
        ));
    }

    for m in &list.markers {
        svg.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" />\n",
            m.center.x,
            m.center.y,
            m.radius,
            m.color.to_hex(),
            theme.marker_outline
        ));
    }

    svg.push_str("</svg>");
    svg
}
