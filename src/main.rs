mod assets;
mod build_info;
mod config;
mod console;
mod gui;
mod session;

use anyhow::Context;
use log::{debug, info};

use crate::config::PlayerConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting up...");
    info!(
        "Build {} ({}) from {}",
        build_info::commit_hash_short(),
        build_info::commit_date(),
        build_info::repo_url()
    );

    let config = PlayerConfig::from_env()?;
    debug!("Player config: {config:?}");
    console::init(config.mode);

    assets::verify_catalog().context("Audio catalog is inconsistent")?;
    console_debug!("Catalog ready with", assets::get_audio_assets().len(), "sounds");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.as_str()),
        ..Default::default()
    };

    debug!("Launching GUI...");
    eframe::run_native(
        "Ambience sound board",
        options,
        Box::new(move |_cc| Ok(Box::new(gui::AppState::new(config)))),
    )
    .map_err(|err| anyhow::anyhow!("GUI exited with an error: {err}"))?;

    info!("Clean shutdown complete");
    Ok(())
}
