//! UI module for missionctl
//!
//! All rendering, layout, and interaction handling lives here.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::AppShell;
pub use layout::LayoutManager;
pub use renderer::run_app;
