use std::sync::Arc;

use anyhow::{Context, Result};

use missionctl::config::Config;
use missionctl::data::MockDataSource;
use missionctl::{logger, theme, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `--init-config` writes a commented default config and exits
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging).context("Failed to initialize logging")?;

    let theme = theme::load();
    let source = Arc::new(MockDataSource::from_fixtures().context("Failed to load embedded fixtures")?);

    ui::run_app(config, theme, source).await
}
