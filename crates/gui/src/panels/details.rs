//! Detail panel: the full field set of the selected shop.

use egui::{Color32, RichText, Ui};

use brewmap_core::CoffeeShop;

use crate::state::Session;

/// Labeled fields shown for one shop, in display order.
///
/// Both the detail panel and the map popup render from this list, so the
/// two surfaces always agree on content.
pub(crate) fn detail_fields(shop: &CoffeeShop) -> Vec<(&'static str, &str)> {
    vec![
        ("Address", shop.address.as_str()),
        ("Phone", shop.phone.as_str()),
        ("Rating", shop.rating.as_str()),
        ("Specialty", shop.specialty.as_str()),
        ("Hours", shop.hours.as_str()),
    ]
}

/// Render one shop's labeled fields plus the outbound Yelp link.
fn field_rows(ui: &mut Ui, shop: &CoffeeShop) {
    for (label, value) in detail_fields(shop) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{label}:")).strong());
            if label == "Rating" {
                ui.label(
                    RichText::new(format!("★ {value}"))
                        .color(Color32::from_rgb(246, 196, 69)),
                );
            } else {
                ui.label(if value.is_empty() { "-" } else { value });
            }
        });
    }

    if !shop.yelp_url.is_empty() {
        ui.hyperlink_to("View on Yelp", &shop.yelp_url);
    }
}

/// Compact rendering for a map marker popup: name line plus the same
/// fields as the detail panel.
pub(crate) fn popup_content(ui: &mut Ui, shop: &CoffeeShop) {
    ui.label(RichText::new(&shop.name).strong());
    field_rows(ui, shop);
}

/// Show the detail panel for the current selection.
pub fn show_details(ui: &mut Ui, session: &Session) {
    let Some(shop) = session.selected_shop() else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a coffee shop to see details.");
        });
        return;
    };

    ui.heading(&shop.name);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            field_rows(ui, shop);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_fields_cover_all_record_fields() {
        let shop = CoffeeShop {
            name: "Demitasse".to_string(),
            address: "135 S San Pedro St".to_string(),
            phone: "(213) 613-9300".to_string(),
            rating: "4.5".to_string(),
            specialty: "Kyoto-style cold brew".to_string(),
            hours: "7am-4pm".to_string(),
            yelp_url: "https://example.com/demitasse".to_string(),
            lat: "34.0489".to_string(),
            lng: "-118.2407".to_string(),
        };

        let fields = detail_fields(&shop);
        let labels: Vec<&str> = fields.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["Address", "Phone", "Rating", "Specialty", "Hours"]
        );
        assert_eq!(fields[1].1, "(213) 613-9300");
        assert_eq!(fields[4].1, "7am-4pm");
    }

    #[test]
    fn test_detail_fields_on_sparse_record() {
        let shop = CoffeeShop::default();
        for (_, value) in detail_fields(&shop) {
            assert_eq!(value, "");
        }
    }
}
