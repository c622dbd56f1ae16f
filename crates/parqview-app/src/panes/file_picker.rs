use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parqview_core::{read_dir_sorted, DirEntry};
use parqview_tui::theme::Theme;
use parqview_tui::widgets::file_picker::FilePickerWidget;
use ratatui::prelude::{Frame, Rect};

/// What a single key did to the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerUpdate {
    /// The key is one the picker reacts to.
    pub handled: bool,
    pub selected: Option<PathBuf>,
}

impl PickerUpdate {
    fn handled() -> Self {
        Self { handled: true, selected: None }
    }
}

pub struct FilePickerPane {
    dir: PathBuf,
    entries: Vec<DirEntry>,
    cursor: usize,
    error: Option<String>,
    show_hidden: bool,
    page_size: usize,
}

impl FilePickerPane {
    pub fn new(dir: PathBuf, show_hidden: bool, page_size: usize) -> Self {
        let dir = std::fs::canonicalize(&dir).unwrap_or(dir);
        let mut pane =
            Self { dir, entries: Vec::new(), cursor: 0, error: None, show_hidden, page_size: page_size.max(1) };
        pane.reload();
        pane
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn update(&mut self, key: KeyEvent) -> PickerUpdate {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return PickerUpdate::default();
        }
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor_down(1),
            KeyCode::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size),
            KeyCode::PageDown => self.cursor_down(self.page_size),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = self.entries.len().saturating_sub(1),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Esc => self.back(),
            KeyCode::Right | KeyCode::Enter => return PickerUpdate { handled: true, selected: self.open() },
            _ => return PickerUpdate::default(),
        }
        PickerUpdate::handled()
    }

    fn cursor_down(&mut self, by: usize) {
        let last = self.entries.len().saturating_sub(1);
        self.cursor = (self.cursor + by).min(last);
    }

    /// Enter the directory under the cursor, or report the file under it as
    /// selected.
    fn open(&mut self) -> Option<PathBuf> {
        let entry = self.entries.get(self.cursor)?.clone();
        if entry.is_dir {
            self.change_dir(entry.path, None);
            None
        } else {
            tracing::info!("Selected {}", entry.path.display());
            Some(entry.path)
        }
    }

    fn back(&mut self) {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else { return };
        let came_from = self.dir.file_name().map(|n| n.to_string_lossy().into_owned());
        self.change_dir(parent, came_from.as_deref());
    }

    fn change_dir(&mut self, dir: PathBuf, focus_name: Option<&str>) {
        let previous = std::mem::replace(&mut self.dir, dir);
        if !self.reload() {
            // Listing is untouched on failure; the error stays visible until the next move.
            self.dir = previous;
            return;
        }
        self.cursor = focus_name.and_then(|name| self.entries.iter().position(|e| e.name == name)).unwrap_or(0);
    }

    fn reload(&mut self) -> bool {
        match read_dir_sorted(&self.dir, self.show_hidden) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
                self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
                true
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        FilePickerWidget {
            dir: &self.dir,
            entries: &self.entries,
            cursor: self.cursor,
            error: self.error.as_deref(),
            focused,
            theme,
        }
        .render(frame, area);
    }
}
