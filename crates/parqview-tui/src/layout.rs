use std::collections::HashMap;

use parqview_config::PanelConfig;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders};

use crate::panel::{Pane, PanelId, PanelRegistry};
use crate::theme::Theme;
use crate::widgets::status_bar::{StatusBarWidget, StatusMessage};

/// Lines reserved under the grid for the status and help lines.
const STATUS_HEIGHT: u16 = 2;

/// Blank border so unfocused panels keep the same footprint as the focused one.
const HIDDEN_BORDER: border::Set = border::Set {
    top_left: " ",
    top_right: " ",
    bottom_left: " ",
    bottom_right: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_top: " ",
    horizontal_bottom: " ",
};

/// Fixed cell size of every panel, including its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub width: u16,
    pub height: u16,
}

impl From<&PanelConfig> for PanelStyle {
    fn from(config: &PanelConfig) -> Self {
        Self { width: config.width, height: config.height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSlot {
    pub id: PanelId,
    pub area: Rect,
    pub focused: bool,
}

pub struct RenderContext<'a, P: Pane> {
    pub registry: &'a PanelRegistry,
    pub focused: PanelId,
    pub panes: &'a HashMap<PanelId, P>,
    pub style: PanelStyle,
    pub selected_file: Option<&'a str>,
    pub status: Option<&'a StatusMessage>,
    pub theme: &'a Theme,
}

pub fn render_root<P: Pane>(frame: &mut Frame, ctx: &RenderContext<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    render_panels(frame, chunks[0], ctx);
    render_status_bar(frame, chunks[1], ctx);
}

/// Place panels row by row: rows stack top to bottom in ascending order and
/// each row's panels run left to right in registry order. Slots are clipped
/// to `area`; panels that fall completely outside are dropped.
pub fn panel_slots(registry: &PanelRegistry, focused: PanelId, area: Rect, style: PanelStyle) -> Vec<PanelSlot> {
    let mut slots = Vec::with_capacity(registry.len());
    for (row_idx, (_, panels)) in registry.rows().into_iter().enumerate() {
        let y = u32::from(area.y) + row_idx as u32 * u32::from(style.height);
        for (col_idx, panel) in panels.into_iter().enumerate() {
            let x = u32::from(area.x) + col_idx as u32 * u32::from(style.width);
            let Some(rect) = clip(area, x, y, style) else { continue };
            slots.push(PanelSlot { id: panel.id, area: rect, focused: panel.id == focused });
        }
    }
    slots
}

fn clip(area: Rect, x: u32, y: u32, style: PanelStyle) -> Option<Rect> {
    if x >= u32::from(area.right()) || y >= u32::from(area.bottom()) {
        return None;
    }
    let width = (u32::from(style.width)).min(u32::from(area.right()) - x) as u16;
    let height = (u32::from(style.height)).min(u32::from(area.bottom()) - y) as u16;
    if width == 0 || height == 0 {
        return None;
    }
    Some(Rect { x: x as u16, y: y as u16, width, height })
}

fn render_panels<P: Pane>(frame: &mut Frame, area: Rect, ctx: &RenderContext<P>) {
    for slot in panel_slots(ctx.registry, ctx.focused, area, ctx.style) {
        let Some(pane) = ctx.panes.get(&slot.id) else { continue };

        let block = if slot.focused {
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::PLAIN)
                .border_style(ctx.theme.border_focused)
                .title(format!(" {} ", pane.kind().title()))
                .title_style(ctx.theme.border_focused.bold())
        } else {
            Block::default()
                .borders(Borders::ALL)
                .border_set(HIDDEN_BORDER)
                .title(format!(" {} ", pane.kind().title()))
                .title_style(ctx.theme.help)
        };

        let inner = block.inner(slot.area);
        frame.render_widget(block, slot.area);
        pane.render(frame, inner, slot.focused, ctx.theme);
    }
}

fn render_status_bar<P: Pane>(frame: &mut Frame, area: Rect, ctx: &RenderContext<P>) {
    let widget = StatusBarWidget { selected_file: ctx.selected_file, message: ctx.status, theme: ctx.theme };
    widget.render(frame, area);
}
