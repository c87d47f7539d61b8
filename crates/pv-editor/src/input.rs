//! Input abstraction layer.
//!
//! Normalizes DOM pointer and wheel events into a unified `InputEvent`
//! enum. Coordinates are CSS pixels relative to the drawing surface's
//! top-left corner.

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, single-finger touch, or pen contact.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `PointerEvent.button` code.
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown { x: f64, y: f64, button: Button },

    /// Pointer moved, pressed or not.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// Pointer left the drawing surface.
    PointerLeave,

    /// Scroll wheel / trackpad scroll. Negative `dy` scrolls up.
    Wheel { dy: f64 },
}

impl InputEvent {
    /// Extract position if this is a positioned pointer event.
    pub fn position(&self) -> Option<(f64, f64)> {
        match *self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some((x, y))
            }
            Self::PointerLeave | Self::Wheel { .. } => None,
        }
    }
}
