//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application chrome
pub const APP_TITLE: &str = "Mission Control";

// Panel titles
pub const TITLE_ACTIVITY: &str = "Activity Feed";
pub const TITLE_AGENTS: &str = "Agents";
pub const TITLE_DOCUMENTS: &str = "Documents";
pub const TITLE_TASK_BOARD: &str = "Task Board";
pub const TITLE_NAVIGATION: &str = "Navigation";
pub const TITLE_COMMAND_PALETTE: &str = "Command Palette";
pub const TITLE_HELP: &str = "Keyboard Shortcuts";

// Empty-state messages (a loaded panel with zero records)
pub const EMPTY_ACTIVITY: &str = "No activity yet";
pub const EMPTY_AGENTS: &str = "No agents registered";
pub const EMPTY_DOCUMENTS: &str = "No documents";
pub const EMPTY_COLUMN: &str = "No tasks";
pub const EMPTY_COMMANDS: &str = "No matching commands";

// Error-state messages
pub const ERROR_RETRY_HINT: &str = "press 'r' to retry";

// Status-bar messages
pub const STATUS_RELOADING: &str = "Reloading all panels";
pub const STATUS_THEME_DARK: &str = "Theme set to dark";
pub const STATUS_THEME_LIGHT: &str = "Theme set to light";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Skeleton row counts while a panel is loading
pub const SKELETON_ROWS_ACTIVITY: usize = 5;
pub const SKELETON_ROWS_AGENTS: usize = 4;
pub const SKELETON_ROWS_DOCUMENTS: usize = 3;
pub const SKELETON_ROWS_PER_COLUMN: usize = 2;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Rows a board card occupies, fixed so pointer hit-testing stays exact
pub const BOARD_CARD_HEIGHT: u16 = 3;
/// How long a transient status-bar message stays visible
pub const STATUS_MESSAGE_TTL_MS: u64 = 2_500;
