use crossterm::event::KeyEvent;
use ratatui::prelude::{Frame, Rect};

use crate::theme::Theme;

mod navigation;
mod registry;
mod types;

pub use navigation::resolve_next;
pub use registry::{Panel, PanelRegistry};
pub use types::{Direction, PanelId, PanelKind, Position};

/// Result of handing a key to the focused pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneOutcome {
    Ignored,
    Handled,
    FileSelected(std::path::PathBuf),
}

/// Every pane must satisfy this contract:
/// - Render itself within a given Rect
/// - React to focus state (styling only)
/// - Accept keys only while focused and report a selected file
pub trait Pane {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme);
    fn handle_key(&mut self, key: KeyEvent) -> PaneOutcome;
    fn kind(&self) -> PanelKind;
}
