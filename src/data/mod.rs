//! Data access layer.
//!
//! This module defines the seam between the UI and wherever records come
//! from, along with the domain record types and error handling. The only
//! implementation in-tree is the in-memory mock, but the interface is shaped
//! the way a remote backend would be so one can slot in later.

use async_trait::async_trait;

pub mod mock;
pub mod records;

pub use mock::MockDataSource;
pub use records::{
    Activity, Agent, AgentStatus, Comment, DocKind, Document, Priority, Task, TaskStatus, BOARD_STATUSES,
};

/// Common error types for data source operations.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Data source error: {0}")]
    Other(String),
}

/// Arguments for updating a task. Every field is optional; absent fields
/// are left untouched, and timestamps are never bumped here (the caller's
/// in-place patch and the stored record must stay identical).
#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
}

impl TaskPatch {
    /// Patch containing only a status change, the one the inspector emits.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Apply this patch to a task in place.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assigned_to) = &self.assigned_to {
            task.assigned_to = Some(assigned_to.clone());
        }
    }
}

/// Source trait every record provider must implement.
///
/// Fetches return snapshots; mutating a returned vector never affects the
/// store. `update_task` is the only write the dashboard performs.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, DataError>;
    async fn fetch_agents(&self) -> Result<Vec<Agent>, DataError>;
    async fn fetch_activity(&self) -> Result<Vec<Activity>, DataError>;
    async fn fetch_documents(&self) -> Result<Vec<Document>, DataError>;

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, DataError>;
}
