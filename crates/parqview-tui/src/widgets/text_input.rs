use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct TextInputWidget<'a> {
    pub value: &'a str,
    /// Cursor position in chars.
    pub cursor: usize,
    pub placeholder: &'a str,
    pub width: u16,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> TextInputWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width < 3 {
            return;
        }
        let t = self.theme;
        let prompt = "> ";
        let field_width = self.width.min(area.width.saturating_sub(prompt.len() as u16)) as usize;

        // Horizontal scroll so the cursor stays inside the field.
        let start = self.cursor.saturating_sub(field_width.saturating_sub(1));
        let visible: String = self.value.chars().skip(start).take(field_width).collect();

        let body = if self.value.is_empty() {
            Span::styled(self.placeholder.chars().take(field_width).collect::<String>(), t.placeholder)
        } else {
            Span::styled(visible, Style::default().fg(t.fg))
        };
        let line = Line::from(vec![Span::styled(prompt, Style::default().fg(t.fg)), body]);
        frame.render_widget(Paragraph::new(line), Rect { height: 1, ..area });

        if self.focused {
            let x = area.x + prompt.len() as u16 + (self.cursor - start) as u16;
            frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}
