pub mod emitter;
pub mod model;
pub mod parser;
pub mod viewport;

pub use emitter::{SAMPLE_POLYGONS, emit_polygons};
pub use model::*;
pub use parser::{ErrorKind, ParseError, parse_polygons};
pub use viewport::{
    BoundingRect, EffectiveView, PanOffset, ViewBox, compute_bounds, compute_effective_view,
    compute_view_box,
};
