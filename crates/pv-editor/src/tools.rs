//! Drag-to-pan gesture.
//!
//! A two-state machine: `Idle` until a primary-button press, `Dragging`
//! until release or the pointer leaves the surface. Each move reports the
//! pan change since the previous pointer position (not since the press),
//! so consecutive moves compose linearly.

use crate::input::{Button, InputEvent};
use pv_core::{EffectiveView, PanOffset};
use pv_render::Surface;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `last_x`/`last_y` is the previous pointer position in surface pixels.
    Dragging { last_x: f64, last_y: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct PanTool {
    state: DragState,
}

impl PanTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one event. Returns the pan change in view units for moves
    /// during a drag, `None` for everything else.
    ///
    /// `view` and `surface` give the current view-units-per-pixel scale.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        view: &EffectiveView,
        surface: Surface,
    ) -> Option<PanOffset> {
        match (*event, self.state) {
            (InputEvent::PointerDown { x, y, button }, DragState::Idle) => {
                if button == Button::Primary {
                    self.state = DragState::Dragging {
                        last_x: x,
                        last_y: y,
                    };
                }
                None
            }
            (InputEvent::PointerMove { x, y }, DragState::Dragging { last_x, last_y }) => {
                self.state = DragState::Dragging {
                    last_x: x,
                    last_y: y,
                };
                if !surface.is_usable() {
                    log::warn!("ignoring drag on unusable surface {surface:?}");
                    return None;
                }
                let dx = (x - last_x) * view.width / surface.width;
                let dy = (y - last_y) * view.height / surface.height;
                log::trace!("pan by ({dx}, {dy})");
                // Dragging right moves the window left.
                Some(PanOffset { x: -dx, y: -dy })
            }
            (InputEvent::PointerUp { .. } | InputEvent::PointerLeave, DragState::Dragging { .. }) => {
                self.state = DragState::Idle;
                None
            }
            _ => None,
        }
    }
}
