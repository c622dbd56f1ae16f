use parqview_core::PeekError;
use parqview_tui::panel::{resolve_next, Direction, PanelId, PanelRegistry};

/// Owns the panel registry and the one panel that currently has focus.
pub struct FocusController {
    registry: PanelRegistry,
    focused: PanelId,
}

impl FocusController {
    pub fn new(registry: PanelRegistry, initial: PanelId) -> Self {
        Self { registry, focused: initial }
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn focused(&self) -> PanelId {
        self.focused
    }

    /// Move focus one step in `direction`. Returns `(from, to)`; both are
    /// equal when no panel lies that way.
    pub fn move_focus(&mut self, direction: Direction) -> (PanelId, PanelId) {
        let from = self.focused;
        self.focused = resolve_next(&self.registry, from, direction);
        (from, self.focused)
    }

    /// Same as [`move_focus`](Self::move_focus) for a raw unit vector. A vector
    /// that is not one of the four directions leaves focus untouched.
    pub fn move_focus_by(&mut self, vector: (i32, i32)) -> Result<(PanelId, PanelId), PeekError> {
        match Direction::try_from(vector) {
            Ok(direction) => Ok(self.move_focus(direction)),
            Err(e) => {
                tracing::warn!("{e}; focus stays on panel {}", self.focused);
                Err(e)
            }
        }
    }
}
