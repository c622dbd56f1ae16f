use crossterm::event::{KeyCode, KeyEvent};
use parqview_core::TablePreview;
use parqview_tui::theme::Theme;
use parqview_tui::widgets::preview_table::PreviewTableWidget;
use ratatui::prelude::{Frame, Rect};

pub struct PreviewTablePane {
    preview: Option<TablePreview>,
    title: Option<String>,
    selected: Option<usize>,
    page_size: usize,
}

impl PreviewTablePane {
    pub fn new(page_size: usize) -> Self {
        Self { preview: None, title: None, selected: None, page_size: page_size.max(1) }
    }

    pub fn set_preview(&mut self, preview: TablePreview) {
        self.selected = if preview.rows.is_empty() { None } else { Some(0) };
        self.title = Some(
            preview
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| preview.source.display().to_string()),
        );
        self.preview = Some(preview);
    }

    #[allow(dead_code)]
    pub fn preview(&self) -> Option<&TablePreview> {
        self.preview.as_ref()
    }

    #[allow(dead_code)]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns whether the key moved the selection.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = self.preview.as_ref().map_or(0, |p| p.rows.len());
        let Some(current) = self.selected else { return false };
        let last = len.saturating_sub(1);
        let next = match key.code {
            KeyCode::Up => current.saturating_sub(1),
            KeyCode::Down => (current + 1).min(last),
            KeyCode::PageUp => current.saturating_sub(self.page_size),
            KeyCode::PageDown => (current + self.page_size).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => return false,
        };
        self.selected = Some(next);
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let (headers, widths, rows) = match &self.preview {
            Some(p) => (p.headers.as_slice(), p.widths.as_slice(), p.rows.as_slice()),
            None => (&[][..], &[][..], &[][..]),
        };
        PreviewTableWidget {
            title: self.title.as_deref(),
            headers,
            widths,
            rows,
            selected: self.selected,
            focused,
            theme,
        }
        .render(frame, area);
    }
}
