//! Domain records served by the data source.
//!
//! Field names serialize in camelCase so the embedded fixtures read the way
//! the upstream API shapes them. Enums carry an `Unknown` catch-all variant:
//! an unrecognized string in a fixture degrades to a default style (or, for
//! task status, to no board column) instead of failing the whole load.

use serde::{Deserialize, Serialize};

/// Workflow state of a task. Each known value maps to one board column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Inbox,
    Assigned,
    InProgress,
    Review,
    Done,
    Blocked,
    /// Unrecognized status string. A task in this state belongs to no column.
    #[serde(other)]
    Unknown,
}

/// The six board columns in display order.
pub const BOARD_STATUSES: [TaskStatus; 6] = [
    TaskStatus::Inbox,
    TaskStatus::Assigned,
    TaskStatus::InProgress,
    TaskStatus::Review,
    TaskStatus::Done,
    TaskStatus::Blocked,
];

impl TaskStatus {
    /// Column header / selector label.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Inbox => "Inbox",
            TaskStatus::Assigned => "Assigned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Unknown => "Unknown",
        }
    }

    /// The next known status in column order, wrapping at the end.
    /// `Unknown` enters the cycle at `Inbox`.
    #[must_use]
    pub fn next(self) -> Self {
        let i = BOARD_STATUSES.iter().position(|s| *s == self);
        match i {
            Some(i) => BOARD_STATUSES[(i + 1) % BOARD_STATUSES.len()],
            None => TaskStatus::Inbox,
        }
    }

    /// The previous known status in column order, wrapping at the start.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = BOARD_STATUSES.iter().position(|s| *s == self);
        match i {
            Some(0) | None => BOARD_STATUSES[BOARD_STATUSES.len() - 1],
            Some(i) => BOARD_STATUSES[i - 1],
        }
    }
}

/// Urgency marker shown on cards and in the task inspector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Unknown => "medium",
        }
    }
}

/// A unit of work on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

/// Availability of an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Idle,
    Active,
    Blocked,
    /// Styled like `Idle` wherever a badge is drawn.
    #[serde(other)]
    Unknown,
}

impl AgentStatus {
    /// Badge text, uppercased the way the roster renders it.
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Idle => "IDLE",
            AgentStatus::Active => "ACTIVE",
            AgentStatus::Blocked => "BLOCKED",
            AgentStatus::Unknown => "IDLE",
        }
    }
}

/// A member of the agent team.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub current_task: Option<String>,
    pub tasks_completed: u32,
}

/// One line in the activity feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub message: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

/// Category of a document, driving its icon and badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Spec,
    Api,
    Design,
    Notes,
    Guide,
    /// Styled like `Notes` wherever a badge is drawn.
    #[serde(other)]
    Unknown,
}

impl DocKind {
    /// Badge text, e.g. "SPEC".
    pub fn label(self) -> &'static str {
        match self {
            DocKind::Spec => "SPEC",
            DocKind::Api => "API",
            DocKind::Design => "DESIGN",
            DocKind::Notes => "NOTES",
            DocKind::Guide => "GUIDE",
            DocKind::Unknown => "NOTES",
        }
    }
}

/// An entry in the document list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocKind,
    pub description: String,
    /// Already human-readable, e.g. "2 hours ago".
    pub updated: String,
    pub author: String,
}

/// A comment in the task inspector's thread. Never persisted; the thread
/// lives only as long as the inspector is bound to a task.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub text: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}
