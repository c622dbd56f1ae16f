use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::theme::Theme;

pub struct PreviewTableWidget<'a> {
    pub title: Option<&'a str>,
    pub headers: &'a [String],
    pub widths: &'a [u16],
    pub rows: &'a [Vec<String>],
    pub selected: Option<usize>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> PreviewTableWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let t = self.theme;

        let Some(title) = self.title else {
            frame.render_widget(Paragraph::new("Select a file to preview its first rows.").style(t.placeholder), area);
            return;
        };

        let title_area = Rect { height: 1, ..area };
        let table_area = Rect { y: area.y + 1, height: area.height.saturating_sub(1), ..area };
        frame.render_widget(Paragraph::new(title).style(Style::default().fg(t.fg).bold()), title_area);

        if self.headers.is_empty() {
            frame.render_widget(Paragraph::new("No columns.").style(t.placeholder), table_area);
            return;
        }

        let header = Row::new(self.headers.iter().map(|h| Cell::from(h.as_str())))
            .style(Style::default().fg(t.fg))
            .height(1);
        let rows: Vec<Row> = self.rows.iter().map(|r| Row::new(r.iter().map(|c| Cell::from(c.as_str())))).collect();
        let widths: Vec<Constraint> = self.widths.iter().map(|w| Constraint::Length(*w)).collect();

        let highlight = if self.focused { t.selection } else { Style::default() };
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::TOP).border_style(t.table_header))
            .row_highlight_style(highlight);

        let mut state = TableState::default().with_selected(self.selected);
        frame.render_stateful_widget(table, table_area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::{all_text, draw, row_text};

    #[test]
    fn placeholder_before_any_load() {
        let theme = Theme::default();
        let buf = draw(50, 3, |frame, area| {
            PreviewTableWidget {
                title: None,
                headers: &[],
                widths: &[],
                rows: &[],
                selected: None,
                focused: false,
                theme: &theme,
            }
            .render(frame, area)
        });
        assert!(all_text(&buf).contains("Select a file"));
    }

    #[test]
    fn renders_title_headers_and_rows() {
        let theme = Theme::default();
        let headers = vec!["id".to_string(), "dag".to_string()];
        let widths = vec![7, 8];
        let rows = vec![vec!["1".to_string(), "etl".to_string()], vec!["2".to_string(), "load".to_string()]];
        let buf = draw(40, 6, |frame, area| {
            PreviewTableWidget {
                title: Some("runs.parquet"),
                headers: &headers,
                widths: &widths,
                rows: &rows,
                selected: Some(0),
                focused: true,
                theme: &theme,
            }
            .render(frame, area)
        });

        assert!(row_text(&buf, 0).starts_with("runs.parquet"));
        // Row 1 is the top border, row 2 the header.
        let header = row_text(&buf, 2);
        assert!(header.contains("id"));
        assert!(header.contains("dag"));
        assert!(row_text(&buf, 3).contains("etl"));
        assert!(row_text(&buf, 4).contains("load"));
    }
}
