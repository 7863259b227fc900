//! Main application: BrewMapApp implements eframe::App.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use egui_dock::{DockArea, DockState, Style, TabViewer};

use crate::dock::{create_dock_state, PanelId};
use crate::io;
use crate::menu::{show_menu_bar, MenuAction};
use crate::panels::console::show_console;
use crate::panels::details::show_details;
use crate::panels::map_view::{show_map_view, MapViewState};
use crate::panels::shop_list::{show_shop_list, ShopListAction};
use crate::state::{AppMessage, LoadState, LogEntry, Session};

/// The main application state.
pub struct BrewMapApp {
    /// Dock state for panel layout.
    dock_state: DockState<PanelId>,

    /// Message channel from the loader thread.
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,

    /// Load state, directory, and selection.
    session: Session,

    /// Console log entries.
    logs: Vec<LogEntry>,

    /// Map state, created once the directory has loaded. Stays `None`
    /// for the whole session when the load fails.
    map_view: Option<MapViewState>,

    /// Show about dialog.
    show_about: bool,
}

impl BrewMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let (tx, rx) = crossbeam_channel::unbounded();

        let mut app = Self {
            dock_state: create_dock_state(),
            tx,
            rx,
            session: Session::new(),
            logs: Vec::new(),
            map_view: None,
            show_about: false,
        };

        app.logs.push(LogEntry::info("BrewMap started"));

        // The sole automatic entry point: fetch the directory once.
        io::load_directory(PathBuf::from(io::DATA_FILE), app.tx.clone());

        app
    }

    /// Process pending messages from the loader thread.
    fn process_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::DirectoryLoaded { path, directory } => {
                    tracing::info!(
                        "loaded {} coffee shops from {}",
                        directory.len(),
                        path.display()
                    );
                    self.session.install(directory);
                    self.map_view = Some(MapViewState::new(ctx));
                }

                AppMessage::LoadFailed { path, message } => {
                    tracing::error!("failed to load {}: {}", path.display(), message);
                    self.logs.push(LogEntry::error(message.clone()));
                    self.session.fail(message);
                }

                AppMessage::Log(entry) => {
                    self.logs.push(entry);
                }
            }
        }
    }

    /// The selection coordinator: one call moves the list highlight, the
    /// detail panel content, and the map camera/popup together. List and
    /// detail panels read the session on the same frame; the map is the
    /// only view with its own state to update.
    fn select_shop(&mut self, index: usize) {
        if !self.session.select(index) {
            return;
        }
        if let (Some(map), Some(directory)) = (self.map_view.as_mut(), self.session.directory())
        {
            map.focus(directory, index);
        }
    }
}

impl eframe::App for BrewMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages(ctx);

        // Keep painting while the loader thread is still running, so its
        // completion message is picked up without waiting for input.
        if *self.session.load_state() == LoadState::Loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            match show_menu_bar(ui) {
                MenuAction::ResetView => {
                    if let Some(map) = self.map_view.as_mut() {
                        map.reset();
                    } else {
                        self.logs
                            .push(LogEntry::warning("Map is not initialised"));
                    }
                }
                MenuAction::Exit => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                MenuAction::About => {
                    self.show_about = true;
                }
                MenuAction::None => {}
            }
        });

        // About dialog
        if self.show_about {
            egui::Window::new("About BrewMap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading("BrewMap");
                    ui.label("Los Angeles coffee shop map");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        // Main dock area
        let mut tab_viewer = BrewMapTabViewer {
            session: &self.session,
            logs: &self.logs,
            map_view: &mut self.map_view,
            selection_request: None,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        // Extract results before dropping the borrow
        let selection_request = tab_viewer.selection_request.take();
        drop(tab_viewer);

        if let Some(index) = selection_request {
            self.select_shop(index);
        }
    }
}

/// TabViewer implementation for egui_dock.
struct BrewMapTabViewer<'a> {
    session: &'a Session,
    logs: &'a [LogEntry],
    map_view: &'a mut Option<MapViewState>,
    /// Set when a list row or a map marker was clicked this frame.
    selection_request: Option<usize>,
}

impl TabViewer for BrewMapTabViewer<'_> {
    type Tab = PanelId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelId::Map => {
                if let Some(index) = show_map_view(ui, self.map_view.as_mut(), self.session) {
                    self.selection_request = Some(index);
                }
            }

            PanelId::Shops => {
                if let ShopListAction::Select(index) = show_shop_list(ui, self.session) {
                    self.selection_request = Some(index);
                }
            }

            PanelId::Details => {
                show_details(ui, self.session);
            }

            PanelId::Console => {
                show_console(ui, self.logs);
            }
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false // Panels cannot be closed
    }
}
