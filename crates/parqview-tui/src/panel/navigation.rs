use super::registry::PanelRegistry;
use super::types::{Direction, PanelId};

/// Given the current panel and every registered panel, find the panel focus
/// should move to in `direction`.
///
/// Algorithm:
/// 1. Skip panels sitting on the current panel's coordinates (any identity)
/// 2. Keep panels strictly on the requested side, comparing only the axis the
///    direction moves along
/// 3. Pick the smallest Manhattan distance; ties go to registry order
/// 4. With no candidate, stay on the current panel
///
/// An id that is not registered resolves to itself.
pub fn resolve_next(registry: &PanelRegistry, current: PanelId, direction: Direction) -> PanelId {
    let Some(origin) = registry.get(current).map(|p| p.position) else {
        tracing::warn!("Focus resolution from unregistered panel {current}");
        return current;
    };

    let shadowed = registry.at(origin).count().saturating_sub(1);
    if shadowed > 0 {
        tracing::trace!("{shadowed} panel(s) share {origin} with the focused panel and are skipped");
    }

    let mut best: Option<(PanelId, u64)> = None;
    for panel in registry.iter() {
        if panel.position == origin || !direction.admits(origin, panel.position) {
            continue;
        }
        let distance = origin.manhattan_distance(panel.position);
        // Strict comparison keeps the earliest panel on ties.
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((panel.id, distance)),
        }
    }

    match best {
        Some((id, distance)) => {
            tracing::debug!("Focus {direction:?} from {origin}: panel {id} at distance {distance}");
            id
        }
        None => {
            tracing::debug!("Focus {direction:?} from {origin}: no candidate, staying on panel {current}");
            current
        }
    }
}
