use eframe::egui;
use log::debug;

use crate::assets::{AudioAsset, get_audio_asset, get_audio_assets};
use crate::config::{APP_VERSION, PlayerConfig};
use crate::session::SessionState;
use crate::{console_info, console_log};

use super::components::{render_asset_list, render_build_footer};

pub struct AppState {
    config: PlayerConfig,
    assets: &'static [AudioAsset],
    session: SessionState,
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_panel(ctx);
        self.render_bottom_panel(ctx);
        self.render_central_panel(ctx);
    }
}

impl AppState {
    pub fn new(config: PlayerConfig) -> Self {
        debug!("Initializing GUI state...");
        let assets = get_audio_assets();
        let mut session = SessionState::from_assets(assets);
        for &id in &config.autoplay {
            session.toggle(id);
            console_info!("Autoplay", get_audio_asset(id).name);
        }
        debug!("Loaded {} audio assets", assets.len());

        Self {
            config,
            assets,
            session,
        }
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} {APP_VERSION}", self.config.title));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let playing = self.session.playing_count();
                    if playing > 0 {
                        ui.colored_label(egui::Color32::GREEN, format!("{playing} playing"));
                    } else {
                        ui.colored_label(egui::Color32::GRAY, "Paused");
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_enabled_ui(self.session.playing_count() > 0, |ui| {
                    if ui.button("⏸ Pause all").clicked() {
                        self.session.pause_all();
                        console_log!("Paused all sounds");
                    }
                });
                ui.separator();
                render_build_footer(ui);
            });
            ui.add_space(8.0);
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    if let Some(id) = render_asset_list(ui, self.assets, &self.session) {
                        let state = self.session.toggle(id);
                        let asset = get_audio_asset(id);
                        console_info!(asset.name, format!("{state:?}"));
                    }
                });
        });
    }
}
