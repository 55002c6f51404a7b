mod app;
mod classifier;
mod config;
mod forms;
mod profile;
mod records;
mod ui;

use app::PerceptronApp;
use config::AppConfig;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(e) => return Err(e),
        },
    };
    log::info!(
        "Starting with profile {}, learning rate {}, {} iterations",
        config.profile,
        config.params.learning_rate(),
        config.params.iterations()
    );

    let title = config.profile.title();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        title,
        native_options,
        Box::new(|_cc| Ok(Box::new(PerceptronApp::new(config)))),
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
