//! Dock layout: map canvas with list/detail sidebar and console.

use egui_dock::{DockState, NodeIndex};

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Map,
    Shops,
    Details,
    Console,
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelId::Map => write!(f, "Map"),
            PanelId::Shops => write!(f, "Coffee Shops"),
            PanelId::Details => write!(f, "Details"),
            PanelId::Console => write!(f, "Console"),
        }
    }
}

/// Create the initial dock layout.
///
/// ```text
/// ┌──────────────────────────┬────────────────┐
/// │                          │  Coffee Shops  │
/// │           Map            ├────────────────┤
/// │                          │  Details       │
/// ├──────────────────────────┴────────────────┤
/// │                 Console                   │
/// └───────────────────────────────────────────┘
/// ```
pub fn create_dock_state() -> DockState<PanelId> {
    // Start with the map as the main surface
    let mut dock_state = DockState::new(vec![PanelId::Map]);

    // Split: main area (top) and console (bottom), 82% / 18%
    let [top, _bottom] = dock_state.main_surface_mut().split_below(
        NodeIndex::root(),
        0.82,
        vec![PanelId::Console],
    );

    // Split top area: map (left 66%) and sidebar (34%)
    let [_map, sidebar] =
        dock_state
            .main_surface_mut()
            .split_right(top, 0.66, vec![PanelId::Shops]);

    // Split sidebar: shop list (top) and details (bottom)
    let [_list, _details] =
        dock_state
            .main_surface_mut()
            .split_below(sidebar, 0.55, vec![PanelId::Details]);

    dock_state
}
