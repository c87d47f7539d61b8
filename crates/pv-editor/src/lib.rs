//! Interaction controller for the polygon viewer.
//!
//! Turns pointer, wheel, keyboard, and form events into zoom, pan, and
//! tooltip changes on a single [`viewer::ViewerState`].

pub mod input;
pub mod shortcuts;
pub mod tools;
pub mod tooltip;
pub mod viewer;
pub mod zoom;

pub use input::{Button, InputEvent};
pub use tooltip::TooltipState;
pub use viewer::{Message, RenderHandoff, ViewerState, update};
