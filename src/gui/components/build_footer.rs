use eframe::egui;

use crate::build_info;
use crate::config::APP_VERSION;

pub fn render_build_footer(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.weak(APP_VERSION);
        ui.separator();

        match build_info::commit_url() {
            Some(url) => {
                ui.hyperlink_to(build_info::commit_hash_short(), url);
            }
            None => {
                ui.weak(build_info::commit_hash_short());
            }
        }

        ui.separator();
        ui.weak(build_info::commit_date());
    });
}
