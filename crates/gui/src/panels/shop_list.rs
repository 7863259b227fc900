//! Shop list panel: one selectable entry per coffee shop.

use egui::{Color32, RichText, Sense, Ui};

use brewmap_core::CoffeeShop;

use crate::state::{LoadState, Session};

/// Actions returned from the shop list panel.
pub enum ShopListAction {
    /// Select the shop at this index.
    Select(usize),
    /// No action.
    None,
}

/// The text of one list entry: name, address, rating, specialty.
pub(crate) fn entry_lines(shop: &CoffeeShop) -> [String; 4] {
    [
        shop.name.clone(),
        shop.address.clone(),
        format!("★ {}", shop.rating),
        shop.specialty.clone(),
    ]
}

/// Show the shop list panel.
///
/// While the directory is loading this shows a placeholder; after a failed
/// load it shows the single terminal error entry and nothing else.
pub fn show_shop_list(ui: &mut Ui, session: &Session) -> ShopListAction {
    let mut action = ShopListAction::None;

    match session.load_state() {
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading coffee shops...");
            });
            return action;
        }
        LoadState::Failed(message) => {
            ui.label(RichText::new(message).color(Color32::from_rgb(220, 60, 60)));
            return action;
        }
        LoadState::Ready => {}
    }

    let Some(directory) = session.directory() else {
        return action;
    };

    ui.label(format!("{} coffee shops", directory.len()));
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, shop) in directory.iter().enumerate() {
                let is_selected = session.selected() == Some(index);
                let [name, address, rating, specialty] = entry_lines(shop);

                let fill = if is_selected {
                    Color32::from_rgb(56, 46, 33)
                } else {
                    Color32::from_rgb(32, 32, 36)
                };
                let inner = egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(RichText::new(name).strong());
                    ui.label(address);
                    ui.label(RichText::new(rating).color(Color32::from_rgb(246, 196, 69)));
                    ui.label(specialty);
                });

                if inner.response.interact(Sense::click()).clicked() {
                    action = ShopListAction::Select(index);
                }
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewmap_core::Directory;

    #[test]
    fn test_entry_lines() {
        let directory = Directory::from_text(
            "name,address,rating,specialty\nDinosaur Coffee,4334 W Sunset Blvd,4.4,Pour over",
        );
        let lines = entry_lines(directory.get(0).unwrap());
        assert_eq!(
            lines,
            [
                "Dinosaur Coffee".to_string(),
                "4334 W Sunset Blvd".to_string(),
                "★ 4.4".to_string(),
                "Pour over".to_string(),
            ]
        );
    }

    #[test]
    fn test_one_entry_per_shop() {
        let directory =
            Directory::from_text("name\nDinosaur Coffee\nMaru Coffee\nDemitasse");
        let entries: Vec<[String; 4]> = directory.iter().map(entry_lines).collect();
        assert_eq!(entries.len(), directory.len());
        assert_eq!(entries[2][0], "Demitasse");
    }
}
