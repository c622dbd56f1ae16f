mod file_picker;
mod preview_table;
mod text_input;

use crossterm::event::KeyEvent;
use parqview_tui::panel::{Pane, PaneOutcome, PanelKind};
use parqview_tui::theme::Theme;
use ratatui::prelude::{Frame, Rect};

pub use file_picker::{FilePickerPane, PickerUpdate};
pub use preview_table::PreviewTablePane;
pub use text_input::TextInputPane;

/// The widgets a panel can hold.
pub enum PaneContent {
    FilePicker(FilePickerPane),
    Table(PreviewTablePane),
    TextInput(TextInputPane),
}

impl PaneContent {
    pub fn as_table_mut(&mut self) -> Option<&mut PreviewTablePane> {
        match self {
            PaneContent::Table(table) => Some(table),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn as_table(&self) -> Option<&PreviewTablePane> {
        match self {
            PaneContent::Table(table) => Some(table),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn as_text_input(&self) -> Option<&TextInputPane> {
        match self {
            PaneContent::TextInput(input) => Some(input),
            _ => None,
        }
    }
}

impl Pane for PaneContent {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        match self {
            PaneContent::FilePicker(picker) => picker.render(frame, area, focused, theme),
            PaneContent::Table(table) => table.render(frame, area, focused, theme),
            PaneContent::TextInput(input) => input.render(frame, area, focused, theme),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> PaneOutcome {
        let handled = match self {
            PaneContent::FilePicker(picker) => match picker.update(key) {
                PickerUpdate { selected: Some(path), .. } => return PaneOutcome::FileSelected(path),
                PickerUpdate { handled, .. } => handled,
            },
            PaneContent::Table(table) => table.handle_key(key),
            PaneContent::TextInput(input) => input.handle_key(key),
        };
        if handled {
            PaneOutcome::Handled
        } else {
            PaneOutcome::Ignored
        }
    }

    fn kind(&self) -> PanelKind {
        match self {
            PaneContent::FilePicker(_) => PanelKind::FilePicker,
            PaneContent::Table(_) => PanelKind::Table,
            PaneContent::TextInput(_) => PanelKind::TextInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn unconsumed_keys_are_ignored_by_every_pane_kind() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.parquet"), b"x").unwrap();

        let mut panes = [
            PaneContent::FilePicker(FilePickerPane::new(dir.path().to_path_buf(), false, 10)),
            PaneContent::Table(PreviewTablePane::new(10)),
            PaneContent::TextInput(TextInputPane::new("", 10, 20)),
        ];
        for pane in &mut panes {
            let chord = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
            assert_eq!(pane.handle_key(chord), PaneOutcome::Ignored, "{:?}", pane.kind());
            assert_eq!(pane.handle_key(key(KeyCode::F(5))), PaneOutcome::Ignored, "{:?}", pane.kind());
        }
    }

    #[test]
    fn picker_reports_consumed_and_selected_keys() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.parquet"), b"x").unwrap();
        std::fs::write(dir.path().join("b.parquet"), b"x").unwrap();

        let mut pane = PaneContent::FilePicker(FilePickerPane::new(dir.path().to_path_buf(), false, 10));
        assert_eq!(pane.handle_key(key(KeyCode::Down)), PaneOutcome::Handled);
        let PaneOutcome::FileSelected(path) = pane.handle_key(key(KeyCode::Enter)) else {
            panic!("expected a selection");
        };
        assert!(path.ends_with("b.parquet"));
    }
}
