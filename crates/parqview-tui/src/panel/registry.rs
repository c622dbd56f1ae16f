use std::collections::BTreeMap;

use super::types::{PanelId, PanelKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: PanelId,
    pub position: Position,
    pub kind: PanelKind,
}

/// Panels in insertion order. Fixed once built; ids are assigned from 1.
#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
}

impl PanelRegistry {
    pub fn new(layout: impl IntoIterator<Item = (Position, PanelKind)>) -> Self {
        let panels = layout
            .into_iter()
            .zip(1..)
            .map(|((position, kind), id)| Panel { id, position, kind })
            .collect();
        Self { panels }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// First panel of the given kind, in registry order.
    pub fn find_kind(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    pub(crate) fn at(&self, position: Position) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(move |p| p.position == position)
    }

    /// Panels grouped by row, rows ascending. Within a row, panels keep
    /// registry order.
    pub fn rows(&self) -> Vec<(i32, Vec<&Panel>)> {
        let mut grouped: BTreeMap<i32, Vec<&Panel>> = BTreeMap::new();
        for panel in &self.panels {
            grouped.entry(panel.position.row).or_default().push(panel);
        }
        grouped.into_iter().collect()
    }
}
