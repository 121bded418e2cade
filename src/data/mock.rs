//! In-memory data source backed by embedded fixtures.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde::Deserialize;

use super::records::{Activity, Agent, Document, Priority, Task, TaskStatus};
use super::{DataError, DataSource, TaskPatch};
use crate::utils::datetime;

const TASKS_JSON: &str = include_str!("seed/tasks.json");
const AGENTS_JSON: &str = include_str!("seed/agents.json");
const ACTIVITY_JSON: &str = include_str!("seed/activity.json");
const DOCUMENTS_JSON: &str = include_str!("seed/documents.json");

/// Fixture shape of a task. Timestamps are stamped at load time so records
/// always look freshly created.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedTask {
    id: String,
    title: String,
    description: String,
    status: TaskStatus,
    priority: Priority,
    #[serde(default)]
    assigned_to: Option<String>,
}

/// Fixture shape of an activity entry. Ages are stored relative and turned
/// into absolute timestamps at load time, keeping the feed's recency
/// plausible no matter when the app starts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedActivity {
    id: String,
    message: String,
    minutes_ago: i64,
}

/// Data source holding every collection in memory.
///
/// Fetches clone the stored records. `update_task` patches the store in
/// place, so a later reload observes the change.
pub struct MockDataSource {
    tasks: Mutex<Vec<Task>>,
    agents: Mutex<Vec<Agent>>,
    activity: Mutex<Vec<Activity>>,
    documents: Mutex<Vec<Document>>,
}

impl MockDataSource {
    /// Build the source from the embedded fixtures. A malformed fixture is
    /// a packaging bug and surfaces as `InvalidData` at startup.
    pub fn from_fixtures() -> Result<Self, DataError> {
        let now = datetime::now_ms();

        let seed_tasks: Vec<SeedTask> =
            serde_json::from_str(TASKS_JSON).map_err(|e| DataError::InvalidData(format!("tasks fixture: {}", e)))?;
        let tasks = seed_tasks
            .into_iter()
            .map(|seed| Task {
                id: seed.id,
                title: seed.title,
                description: seed.description,
                status: seed.status,
                priority: seed.priority,
                assigned_to: seed.assigned_to,
                created_at: now,
                updated_at: now,
            })
            .collect();

        let agents: Vec<Agent> =
            serde_json::from_str(AGENTS_JSON).map_err(|e| DataError::InvalidData(format!("agents fixture: {}", e)))?;

        let seed_activity: Vec<SeedActivity> = serde_json::from_str(ACTIVITY_JSON)
            .map_err(|e| DataError::InvalidData(format!("activity fixture: {}", e)))?;
        let activity = seed_activity
            .into_iter()
            .map(|seed| Activity {
                id: seed.id,
                message: seed.message,
                timestamp: now - seed.minutes_ago * 60_000,
            })
            .collect();

        let documents: Vec<Document> = serde_json::from_str(DOCUMENTS_JSON)
            .map_err(|e| DataError::InvalidData(format!("documents fixture: {}", e)))?;

        Ok(Self {
            tasks: Mutex::new(tasks),
            agents: Mutex::new(agents),
            activity: Mutex::new(activity),
            documents: Mutex::new(documents),
        })
    }

    fn locked<'a, T>(store: &'a Mutex<Vec<T>>, name: &str) -> Result<MutexGuard<'a, Vec<T>>, DataError> {
        store.lock().map_err(|_| DataError::Other(format!("{} store poisoned", name)))
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, DataError> {
        Ok(Self::locked(&self.tasks, "task")?.clone())
    }

    async fn fetch_agents(&self) -> Result<Vec<Agent>, DataError> {
        Ok(Self::locked(&self.agents, "agent")?.clone())
    }

    async fn fetch_activity(&self) -> Result<Vec<Activity>, DataError> {
        Ok(Self::locked(&self.activity, "activity")?.clone())
    }

    async fn fetch_documents(&self) -> Result<Vec<Document>, DataError> {
        Ok(Self::locked(&self.documents, "document")?.clone())
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, DataError> {
        let mut tasks = Self::locked(&self.tasks, "task")?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DataError::NotFound(format!("task {}", id)))?;
        patch.apply_to(task);
        Ok(task.clone())
    }
}
