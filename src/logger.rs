//! File logging setup
//!
//! The TUI owns stdout, so log output goes to a file under the local data
//! directory. Call sites use the `log` macros; this module wires the global
//! dispatcher from the `[logging]` config section.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Path of the log file, `<data_local_dir>/missionctl/missionctl.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?
        .join("missionctl");
    Ok(dir.join("missionctl.log"))
}

/// Install the global logger according to config.
///
/// With logging disabled this installs nothing, so the `log` macros are
/// no-ops. Errors here are config or filesystem problems and abort startup.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging initialized at level {}", level);
    Ok(())
}

fn parse_level(level: &str) -> Result<log::LevelFilter> {
    match level {
        "error" => Ok(log::LevelFilter::Error),
        "warn" => Ok(log::LevelFilter::Warn),
        "info" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        other => anyhow::bail!("Unknown log level '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_level("trace").unwrap(), log::LevelFilter::Trace);
        assert!(parse_level("chatty").is_err());
    }

    #[test]
    fn test_log_file_path_ends_with_app_dir() {
        let path = log_file_path().unwrap();
        assert!(path.ends_with("missionctl/missionctl.log"));
    }
}
