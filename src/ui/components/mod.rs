//! Reusable UI components

pub mod activity_feed;
pub mod agent_roster;
pub mod command_palette;
pub mod document_panel;
pub mod help_overlay;
pub mod panel;
pub mod sidebar;
pub mod status_bar;
pub mod task_board;
pub mod task_detail;

pub use activity_feed::ActivityFeed;
pub use agent_roster::AgentRoster;
pub use command_palette::CommandPalette;
pub use document_panel::DocumentPanel;
pub use help_overlay::HelpOverlay;
pub use panel::LoadPhase;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use task_board::TaskBoard;
pub use task_detail::TaskDetail;
