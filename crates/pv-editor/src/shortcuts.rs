//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The shortcut map lives in Rust so it's shared across WASM and native.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ZoomIn,
    ZoomOut,
    /// Back to zoom 1 with the view refitted to the geometry.
    ResetView,
    HideTooltip,
}

/// Resolves key events into shortcut actions.
///
/// View shortcuts work both bare and with ⌘/Ctrl, matching the browser's
/// own zoom muscle memory.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"+"`, `"Escape"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        _shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        if alt {
            return None;
        }
        let cmd = ctrl || meta;

        match key {
            "=" | "+" => Some(ShortcutAction::ZoomIn),
            "-" | "_" => Some(ShortcutAction::ZoomOut),
            "0" => Some(ShortcutAction::ResetView),
            "Escape" if !cmd => Some(ShortcutAction::HideTooltip),
            _ => None,
        }
    }
}
