mod app;
mod components;
mod screens;
mod theme;
mod utils;

use autobuild_app_core::AutoBuildApplication;
use autobuild_config::APP_NAME;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 700.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let mut core = AutoBuildApplication::new();
            if let Err(e) = core.load_initial_state() {
                tracing::error!("Failed to load state: {e:#}");
                core.recheck_dependencies();
            }

            Ok(Box::new(app::AutoBuildUiApp::new(core)))
        }),
    )
}
