//! Core UI building blocks.
//!
//! - [`actions`] - the action enum every component speaks
//! - [`component`] - the base component trait
//! - [`event_handler`] - crossterm event pump with a tick fallback
//! - [`jobs`] - background job runner for delayed loads and updates

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod jobs;

pub use actions::{Action, PanelKind, PanelPayload, View};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use jobs::{JobId, JobRunner};
