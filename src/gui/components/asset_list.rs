use eframe::egui;

use crate::assets::{AudioAsset, AudioAssetId, PlaybackState};
use crate::session::SessionState;

/// Draws one row per asset. Returns the asset whose button was clicked, if any.
pub fn render_asset_list(
    ui: &mut egui::Ui,
    assets: &[AudioAsset],
    session: &SessionState,
) -> Option<AudioAssetId> {
    let mut clicked = None;

    egui::Grid::new("asset_grid")
        .num_columns(3)
        .spacing([20.0, 12.0])
        .show(ui, |ui| {
            for asset in assets {
                if render_asset_row(ui, asset, session.state(asset.id)) {
                    clicked = Some(asset.id);
                }
                ui.end_row();
            }
        });

    clicked
}

fn render_asset_row(ui: &mut egui::Ui, asset: &AudioAsset, state: PlaybackState) -> bool {
    ui.label(egui::RichText::new(asset.icons.glyph).size(28.0))
        .on_hover_text(asset.icons.svg_url);

    ui.vertical(|ui| {
        ui.strong(asset.name);
        let variants = asset.files.len();
        ui.weak(if variants == 1 {
            "1 variant".to_string()
        } else {
            format!("{variants} variants")
        })
        .on_hover_text(
            asset
                .files
                .iter()
                .map(|file| format!("{} ({})", file.url, file.mime_type()))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    });

    let label = match state {
        PlaybackState::Paused => "▶ Play",
        PlaybackState::Playing => "⏸ Pause",
    };
    let button = egui::Button::new(label).selected(state.is_playing());
    ui.add(button).clicked()
}
