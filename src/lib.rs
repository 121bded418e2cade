//! missionctl - a terminal mission-control dashboard for agent teams.
//!
//! Five read-only views (dashboard, task board, agent roster, documents,
//! activity feed) over an in-memory mock data source, a modal task
//! inspector, and a keyboard-driven command palette, rendered with
//! Ratatui.
//!
//! # Modules
//!
//! * [`commands`] - static command registry behind the palette
//! * [`config`] - TOML configuration handling
//! * [`data`] - record types and the data source seam
//! * [`icons`] - icon themes for the TUI glyphs
//! * [`theme`] - the persisted dark/light flag
//! * [`ui`] - terminal user interface components
//! * [`utils`] - date/time helpers

/// Static command registry for the command palette
pub mod commands;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Domain records, the data source trait, and the in-memory mock
pub mod data;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Color theme flag and its persistence
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use config::Config;
pub use data::{DataSource, MockDataSource};
pub use theme::Theme;
