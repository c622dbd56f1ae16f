use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;

use parqview_config::AppConfig;
use parqview_core::{PeekError, PreviewLoader, TablePreview};
use parqview_tui::layout::{PanelStyle, RenderContext};
use parqview_tui::panel::{Pane, PaneOutcome, PanelId, PanelKind, PanelRegistry, Position};
use parqview_tui::theme::Theme;
use parqview_tui::widgets::status_bar::StatusMessage;

use crate::command::Command;
use crate::event::{AppEvent, EventHandler};
use crate::focus::FocusController;
use crate::panes::{FilePickerPane, PaneContent, PreviewTablePane, TextInputPane};

/// Rows a panel loses to its border and title line.
const PANEL_CHROME_ROWS: u16 = 3;

/// Side effects of a single key press.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key release/repeat events are dropped.
    Ignored,
    Quit,
    FocusMoved { from: PanelId, to: PanelId },
    FocusRejected(PeekError),
    Forwarded(PanelId),
    Loaded(PathBuf),
    LoadFailed(PeekError),
}

/// The viewer's fixed layout: picker top-left, preview to its right, the text
/// input below the picker.
pub fn default_layout() -> PanelRegistry {
    PanelRegistry::new([
        (Position::new(0, 0), PanelKind::FilePicker),
        (Position::new(1, 0), PanelKind::Table),
        (Position::new(0, 1), PanelKind::TextInput),
    ])
}

pub struct App {
    running: bool,
    tick_rate: Duration,
    focus: FocusController,
    panes: HashMap<PanelId, PaneContent>,
    loader: Box<dyn PreviewLoader>,
    selected_file: Option<PathBuf>,
    status: Option<StatusMessage>,
    style: PanelStyle,
    theme: Theme,
}

impl App {
    pub fn new(config: &AppConfig, start_dir: PathBuf, loader: Box<dyn PreviewLoader>) -> Self {
        Self::with_registry(config, default_layout(), start_dir, loader)
    }

    pub fn with_registry(
        config: &AppConfig,
        registry: PanelRegistry,
        start_dir: PathBuf,
        loader: Box<dyn PreviewLoader>,
    ) -> Self {
        let page_size = usize::from(config.panels.height.saturating_sub(PANEL_CHROME_ROWS)).max(1);

        let mut panes = HashMap::new();
        for panel in registry.iter() {
            let content = match panel.kind {
                PanelKind::FilePicker => {
                    PaneContent::FilePicker(FilePickerPane::new(start_dir.clone(), config.general.show_hidden, page_size))
                }
                PanelKind::Table => PaneContent::Table(PreviewTablePane::new(page_size)),
                PanelKind::TextInput => PaneContent::TextInput(TextInputPane::from_config(&config.panels)),
            };
            panes.insert(panel.id, content);
        }

        let initial = registry
            .find_kind(PanelKind::FilePicker)
            .or_else(|| registry.iter().next())
            .map_or(0, |p| p.id);
        tracing::info!("Starting in {} with {} panels, focus on panel {initial}", start_dir.display(), registry.len());

        Self {
            running: true,
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            focus: FocusController::new(registry, initial),
            panes,
            loader,
            selected_file: None,
            status: None,
            style: PanelStyle::from(&config.panels),
            theme: Theme::from_config(&config.theme),
        }
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[allow(dead_code)]
    pub fn focused(&self) -> PanelId {
        self.focus.focused()
    }

    #[allow(dead_code)]
    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    #[allow(dead_code)]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[allow(dead_code)]
    pub fn pane(&self, id: PanelId) -> Option<&PaneContent> {
        self.panes.get(&id)
    }

    #[allow(dead_code)]
    pub fn registry(&self) -> &PanelRegistry {
        self.focus.registry()
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate);

        while self.running {
            let selected = self.selected_file.as_ref().map(|p| p.display().to_string());
            terminal.draw(|frame| {
                let ctx = RenderContext {
                    registry: self.focus.registry(),
                    focused: self.focus.focused(),
                    panes: &self.panes,
                    style: self.style,
                    selected_file: selected.as_deref(),
                    status: self.status.as_ref(),
                    theme: &self.theme,
                };
                parqview_tui::layout::render_root(frame, &ctx);
            })?;

            self.handle_event(events.next().await?);
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                self.handle_key(key);
            }
            AppEvent::Tick => {
                if self.status.as_ref().is_some_and(StatusMessage::is_expired) {
                    self.status = None;
                }
            }
            AppEvent::Resize(_, _) => {}
        }
    }

    /// Process one key to completion: quit, move focus, or hand the key to the
    /// focused pane and load whatever file it reports as selected.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }

        match Command::from_key(key) {
            Command::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
                KeyOutcome::Quit
            }
            Command::MoveFocus(vector) => match self.focus.move_focus_by(vector) {
                Ok((from, to)) => KeyOutcome::FocusMoved { from, to },
                Err(e) => KeyOutcome::FocusRejected(e),
            },
            Command::Forward(key) => self.forward_to_focused(key),
        }
    }

    fn forward_to_focused(&mut self, key: KeyEvent) -> KeyOutcome {
        let focused = self.focus.focused();
        let Some(pane) = self.panes.get_mut(&focused) else {
            tracing::warn!("Focused panel {focused} has no content");
            return KeyOutcome::Forwarded(focused);
        };

        match pane.handle_key(key) {
            PaneOutcome::FileSelected(path) => self.load_file(path),
            PaneOutcome::Handled | PaneOutcome::Ignored => KeyOutcome::Forwarded(focused),
        }
    }

    fn load_file(&mut self, path: PathBuf) -> KeyOutcome {
        self.selected_file = Some(path.clone());

        match self.loader.load(&path) {
            Ok(preview) => {
                tracing::info!(
                    "Loaded {} rows x {} columns from {}",
                    preview.rows.len(),
                    preview.headers.len(),
                    path.display()
                );
                self.status = Some(StatusMessage::info(format!(
                    "Loaded {} rows from {}",
                    preview.rows.len(),
                    path.display()
                )));
                self.show_preview(preview);
                KeyOutcome::Loaded(path)
            }
            Err(e) => {
                tracing::error!("{e}");
                self.status = Some(StatusMessage::error(e.to_string()));
                KeyOutcome::LoadFailed(e)
            }
        }
    }

    fn show_preview(&mut self, preview: TablePreview) {
        let Some(table_id) = self.focus.registry().find_kind(PanelKind::Table).map(|p| p.id) else {
            tracing::warn!("No table panel to show {}", preview.source.display());
            return;
        };
        if let Some(table) = self.panes.get_mut(&table_id).and_then(PaneContent::as_table_mut) {
            table.set_preview(preview);
        }
    }
}
