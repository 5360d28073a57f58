#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use hackboard::config::Config;
use hackboard::{HackathonStore, JsonStore};
use iced::Theme;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::load();
    config.validate()?;
    info!("Reading hackathons from {}", config.data_dir.display());
    let store: Arc<dyn HackathonStore> = Arc::new(JsonStore::new(config.data_dir.clone()));

    iced::application(
        move || app::init(config.clone(), store.clone()),
        app::update,
        app::view,
    )
    .title("Hackboard")
    .subscription(app::subscription)
    .theme(|_: &app::State| Theme::Dark)
    .window_size((1000.0, 820.0))
    .run()?;

    Ok(())
}
