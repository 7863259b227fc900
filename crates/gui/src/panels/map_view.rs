//! Map panel: OpenStreetMap basemap with one marker per coffee shop.
//!
//! Tile fetching, panning, zooming and projection are delegated to walkers;
//! this module draws the markers, hit-tests clicks, and anchors the popup
//! of the focused marker.

use egui::{Align2, Color32, FontId, Pos2, Stroke, Ui};
use walkers::sources::OpenStreetMap;
use walkers::{HttpTiles, Map, MapMemory, Plugin, Position, Projector, lon_lat};

use brewmap_core::Directory;

use crate::panels::details;
use crate::state::{LoadState, Session};

/// Initial camera: central Los Angeles.
const LA_CENTER: (f64, f64) = (34.0522, -118.2437);
/// City-wide framing at startup.
const CITY_ZOOM: f64 = 11.0;
/// Close-up framing when a shop is focused.
const FOCUS_ZOOM: f64 = 15.0;

const MARKER_RADIUS: f32 = 11.0;
const ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Persistent map state (survives between frames).
///
/// Created only after the directory has loaded; a failed load leaves the
/// map uninitialised for the rest of the session.
pub struct MapViewState {
    tiles: HttpTiles,
    memory: MapMemory,
    home: Position,
    /// Index of the marker whose popup is open.
    open_popup: Option<usize>,
}

impl MapViewState {
    /// Create the map centred on the city-wide Los Angeles framing.
    pub fn new(ctx: &egui::Context) -> Self {
        let (lat, lon) = LA_CENTER;
        let mut memory = MapMemory::default();
        let _ = memory.set_zoom(CITY_ZOOM);
        Self {
            tiles: HttpTiles::new(OpenStreetMap, ctx.clone()),
            memory,
            home: lon_lat(lon, lat),
            open_popup: None,
        }
    }

    /// Re-centre on one shop at close zoom and open its popup.
    ///
    /// A shop without a usable coordinate still claims the popup slot but
    /// moves no camera (its popup has no marker to anchor to, so nothing
    /// shows until a located shop is focused).
    pub fn focus(&mut self, directory: &Directory, index: usize) {
        if let Some((lat, lng)) = directory.get(index).and_then(|shop| shop.coordinate()) {
            self.memory.center_at(lon_lat(lng, lat));
            let _ = self.memory.set_zoom(FOCUS_ZOOM);
        }
        self.open_popup = Some(index);
    }

    /// Return the camera to the initial framing. The open popup follows
    /// the selection, not the camera, so it stays.
    pub fn reset(&mut self) {
        self.memory.center_at(self.home);
        let _ = self.memory.set_zoom(CITY_ZOOM);
    }
}

/// Marker coordinate slots, positionally aligned with the directory.
///
/// Slot `i` belongs to shop `i`; a shop whose lat/lng does not parse keeps
/// its slot as `None` so indices stay aligned across all views.
pub(crate) fn marker_positions(directory: &Directory) -> Vec<Option<(f64, f64)>> {
    directory.iter().map(|shop| shop.coordinate()).collect()
}

/// Plugin that draws the shop markers over the basemap tiles and reports
/// the marker under a click.
struct ShopMarkers<'a> {
    directory: &'a Directory,
    selected: Option<usize>,
    open_popup: Option<usize>,
    clicked: &'a mut Option<usize>,
}

impl<'a> Plugin for ShopMarkers<'a> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &egui::Response,
        projector: &Projector,
    ) {
        let hover_pos = ui.input(|i| i.pointer.hover_pos());
        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        for (index, slot) in marker_positions(self.directory).into_iter().enumerate() {
            let Some((lat, lng)) = slot else { continue };

            let projected = projector.project(lon_lat(lng, lat));
            let pos = egui::pos2(projected.x, projected.y);
            if !response.rect.contains(pos) {
                continue;
            }

            let hovered = hover_pos.is_some_and(|p| p.distance(pos) <= MARKER_RADIUS);
            let radius = if hovered {
                MARKER_RADIUS * 1.2
            } else {
                MARKER_RADIUS
            };
            let fill = if self.selected == Some(index) {
                Color32::from_rgb(246, 196, 69)
            } else {
                Color32::from_rgb(250, 248, 240)
            };

            let painter = ui.painter();
            painter.circle_filled(pos, radius, fill);
            painter.circle_stroke(pos, radius, Stroke::new(1.5, Color32::from_rgb(92, 60, 30)));
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                "☕",
                FontId::proportional(radius * 1.3),
                Color32::from_rgb(60, 40, 20),
            );

            if click_pos.is_some_and(|p| p.distance(pos) <= radius) {
                *self.clicked = Some(index);
            }

            if self.open_popup == Some(index) {
                show_popup(ui, index, pos, self.directory);
            }
        }
    }
}

/// The popup mirrors the detail panel for the same shop.
fn show_popup(ui: &Ui, index: usize, marker: Pos2, directory: &Directory) {
    let Some(shop) = directory.get(index) else {
        return;
    };

    egui::Area::new(egui::Id::new(("shop_popup", index)))
        .order(egui::Order::Foreground)
        .fixed_pos(marker + egui::vec2(MARKER_RADIUS + 6.0, -MARKER_RADIUS))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(260.0);
                details::popup_content(ui, shop);
            });
        });
}

/// Show the map panel. Returns the index of a clicked marker, if any.
pub fn show_map_view(
    ui: &mut Ui,
    state: Option<&mut MapViewState>,
    session: &Session,
) -> Option<usize> {
    let Some(state) = state else {
        let text = match session.load_state() {
            LoadState::Failed(_) => "Coffee shop data unavailable. Map disabled.",
            _ => "Loading map...",
        };
        ui.centered_and_justified(|ui| {
            ui.label(text);
        });
        return None;
    };

    let Some(directory) = session.directory() else {
        return None;
    };

    let mut clicked = None;
    let map = Map::new(Some(&mut state.tiles), &mut state.memory, state.home).with_plugin(
        ShopMarkers {
            directory,
            selected: session.selected(),
            open_popup: state.open_popup,
            clicked: &mut clicked,
        },
    );
    ui.add(map);

    // Tile attribution, drawn over the map's bottom-left corner.
    let rect = ui.max_rect();
    ui.painter().text(
        rect.left_bottom() + egui::vec2(6.0, -6.0),
        Align2::LEFT_BOTTOM,
        ATTRIBUTION,
        FontId::proportional(10.0),
        Color32::from_gray(90),
    );

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_marker_slot_per_shop() {
        let directory = Directory::from_text(
            "name,lat,lng\nDinosaur Coffee,34.0945,-118.2814\nMaru Coffee,34.0330,-118.2326",
        );
        let slots = marker_positions(&directory);
        assert_eq!(slots.len(), directory.len());
        assert_eq!(slots[0], Some((34.0945, -118.2814)));
        assert_eq!(slots[1], Some((34.0330, -118.2326)));
    }

    #[test]
    fn test_malformed_coordinate_keeps_its_slot() {
        let directory = Directory::from_text(
            "name,lat,lng\nDinosaur Coffee,34.0945,-118.2814\nNowhere,not-a-number,-118.0\nMaru Coffee,34.0330,-118.2326",
        );
        let slots = marker_positions(&directory);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[1], None);
        // Index alignment survives the skipped marker.
        assert_eq!(slots[2], Some((34.0330, -118.2326)));
    }
}
