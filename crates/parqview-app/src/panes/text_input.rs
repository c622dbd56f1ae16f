use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parqview_config::PanelConfig;
use parqview_tui::theme::Theme;
use parqview_tui::widgets::text_input::TextInputWidget;
use ratatui::prelude::{Frame, Rect};

pub struct TextInputPane {
    value: String,
    cursor: usize,
    placeholder: String,
    char_limit: usize,
    width: u16,
}

impl TextInputPane {
    pub fn new(placeholder: impl Into<String>, char_limit: usize, width: u16) -> Self {
        Self { value: String::new(), cursor: 0, placeholder: placeholder.into(), char_limit, width }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self::new(config.text_input_placeholder.clone(), config.text_input_char_limit, config.text_input_width)
    }

    #[allow(dead_code)]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        let len = self.value.chars().count();
        match key.code {
            KeyCode::Char(c) => {
                if self.char_limit > 0 && len >= self.char_limit {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            _ => return false,
        }
        true
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value.char_indices().nth(char_idx).map_or(self.value.len(), |(i, _)| i)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        TextInputWidget {
            value: &self.value,
            cursor: self.cursor,
            placeholder: &self.placeholder,
            width: self.width,
            focused,
            theme,
        }
        .render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInputPane, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let mut input = TextInputPane::new("Pikachu", 156, 20);
        type_str(&mut input, "abc");
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = TextInputPane::new("", 156, 20);
        type_str(&mut input, "acd");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        type_str(&mut input, "b");
        assert_eq!(input.value(), "abcd");
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "abd");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ad");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut input = TextInputPane::new("", 3, 20);
        type_str(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn multibyte_characters_are_handled_by_char() {
        let mut input = TextInputPane::new("", 10, 20);
        type_str(&mut input, "héé");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "hé");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "é");
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut input = TextInputPane::new("", 10, 20);
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn from_config_uses_panel_settings() {
        let input = TextInputPane::from_config(&PanelConfig::default());
        assert_eq!(input.placeholder, "Pikachu");
        assert_eq!(input.char_limit, 156);
        assert_eq!(input.width, 20);
    }
}
