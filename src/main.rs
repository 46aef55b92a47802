mod app;
mod prefs;
mod store;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Org Top Bar",
        native_options,
        Box::new(|_cc| Box::new(app::AppState::default())),
    )
}
