//! Menu bar: File, View, Help.

use egui::Ui;

/// Actions triggered by menu items.
pub enum MenuAction {
    /// Return the map camera to the initial city-wide framing.
    ResetView,
    Exit,
    About,
    None,
}

/// Show the main menu bar. Returns the action triggered (if any).
pub fn show_menu_bar(ui: &mut Ui) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Exit").clicked() {
                action = MenuAction::Exit;
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            if ui.button("Reset Map View").clicked() {
                action = MenuAction::ResetView;
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About BrewMap").clicked() {
                action = MenuAction::About;
                ui.close_menu();
            }
        });
    });

    action
}
