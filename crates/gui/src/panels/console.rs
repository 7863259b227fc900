//! Console panel: timestamped application activity.

use egui::{Color32, RichText, ScrollArea, Ui};

use crate::state::{LogEntry, LogLevel};

fn level_style(level: LogLevel) -> (&'static str, Color32) {
    match level {
        LogLevel::Info => ("[INFO]", Color32::from_rgb(150, 180, 220)),
        LogLevel::Warning => ("[WARN]", Color32::from_rgb(230, 180, 50)),
        LogLevel::Error => ("[ERROR]", Color32::from_rgb(220, 60, 60)),
        LogLevel::Success => ("[OK]", Color32::from_rgb(60, 200, 80)),
    }
}

/// Wall-clock HH:MM:SS for a log entry.
fn clock(entry: &LogEntry) -> String {
    let since_epoch = entry
        .timestamp
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = since_epoch.as_secs() % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Show the console panel.
pub fn show_console(ui: &mut Ui, logs: &[LogEntry]) {
    ui.horizontal(|ui| {
        ui.heading("Console");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} messages", logs.len()));
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in logs {
                let (prefix, color) = level_style(entry.level);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(clock(entry)).weak().monospace());
                    ui.label(RichText::new(prefix).color(color).monospace());
                    ui.label(&entry.message);
                });
            }
        });
}
