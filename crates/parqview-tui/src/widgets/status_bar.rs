use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub const HELP_TEXT: &str = "h/j/k/l: move focus • enter: open • ctrl+c: quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: StatusLevel::Info, created_at: Instant::now(), ttl: Duration::from_secs(3) }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: StatusLevel::Error, created_at: Instant::now(), ttl: Duration::from_secs(8) }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Two lines under the panel grid: the current file or last message, then
/// the key help.
pub struct StatusBarWidget<'a> {
    pub selected_file: Option<&'a str>,
    pub message: Option<&'a StatusMessage>,
    pub theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let t = self.theme;

        let status = match (self.message, self.selected_file) {
            (Some(msg), _) => {
                let style = match msg.level {
                    StatusLevel::Error => t.status_error,
                    StatusLevel::Info => t.status_info,
                };
                Line::from(Span::styled(msg.text.as_str(), style))
            }
            (None, Some(path)) => Line::from(vec![
                Span::styled("file: ", t.help),
                Span::styled(path, Style::default().fg(t.fg)),
            ]),
            (None, None) => Line::from(Span::styled("no file selected", t.help)),
        };
        frame.render_widget(Paragraph::new(status), Rect { height: 1, ..area });

        if area.height > 1 {
            let help_area = Rect { y: area.y + 1, height: 1, ..area };
            frame.render_widget(Paragraph::new(HELP_TEXT).style(t.help), help_area);
        }
    }
}

#[cfg(test)]
mod tests;
