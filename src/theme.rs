//! Color theme handling
//!
//! A single dark/light flag, toggled from the command palette and persisted
//! to a one-key state file so the choice survives restarts. Everything else
//! about the palette derives from the flag at render time.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Accent color for highlights and the active-column header.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        }
    }

    /// Border color for unfocused panels.
    pub fn border(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    /// Color for secondary text (timestamps, hints, skeletons).
    pub fn dim(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }
}

/// On-disk shape of the state file. One key, nothing else is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct ThemeState {
    theme: Theme,
}

/// Path of the theme state file, `<data_dir>/missionctl/theme.toml`.
pub fn state_file_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
        .join("missionctl");
    Ok(dir.join("theme.toml"))
}

/// Load the persisted theme, falling back to the default when the state
/// file is missing or unreadable. A bad state file is never fatal.
pub fn load() -> Theme {
    match state_file_path() {
        Ok(path) => load_from(&path),
        Err(_) => Theme::default(),
    }
}

/// Load the theme from a specific state file.
pub fn load_from<P: AsRef<Path>>(path: P) -> Theme {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Theme::default();
    };
    toml::from_str::<ThemeState>(&content).map(|s| s.theme).unwrap_or_default()
}

/// Persist the theme to the default state file.
pub fn store(theme: Theme) -> Result<()> {
    store_to(theme, state_file_path()?)
}

/// Persist the theme to a specific state file.
pub fn store_to<P: AsRef<Path>>(theme: Theme, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
    }
    let content = toml::to_string(&ThemeState { theme }).context("Failed to serialize theme state")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write theme state: {}", path.as_ref().display()))?;
    Ok(())
}
