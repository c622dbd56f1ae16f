use std::path::Path;

use parqview_core::{format_size, DirEntry};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::theme::Theme;

pub struct FilePickerWidget<'a> {
    pub dir: &'a Path,
    pub entries: &'a [DirEntry],
    pub cursor: usize,
    pub error: Option<&'a str>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> FilePickerWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let t = self.theme;

        let header = Rect { height: 1, ..area };
        let body = Rect { y: area.y + 1, height: area.height.saturating_sub(1), ..area };
        frame.render_widget(
            Paragraph::new(self.dir.display().to_string()).style(Style::default().fg(t.fg).bold()),
            header,
        );

        if let Some(err) = self.error {
            frame.render_widget(Paragraph::new(format!("Error: {err}")).style(t.status_error), body);
            return;
        }

        if self.entries.is_empty() {
            frame.render_widget(Paragraph::new("No files found.").style(t.placeholder), body);
            return;
        }

        let size_width = 7;
        let name_width = (body.width as usize).saturating_sub(size_width + 3);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let (name, style, size) = if entry.is_dir {
                    (format!("{}/", entry.name), t.directory, String::new())
                } else {
                    (entry.name.clone(), Style::default().fg(t.fg), format_size(entry.size))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<name_width$}"), style),
                    Span::styled(format!(" {size:>size_width$}"), t.placeholder),
                ]))
            })
            .collect();

        let highlight = if self.focused { t.cursor } else { Style::default().fg(t.fg) };
        let list = List::new(items).highlight_style(highlight).highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.cursor.min(self.entries.len() - 1)));
        frame.render_stateful_widget(list, body, &mut state);
    }
}
