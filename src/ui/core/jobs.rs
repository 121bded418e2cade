use super::actions::{Action, PanelKind, PanelPayload};
use crate::data::{DataSource, TaskPatch};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<()>,
}

/// Runs background work off the UI loop and reports back over an unbounded
/// action channel that the loop drains every tick.
///
/// Panel loads sleep for the configured delay before fetching, which is what
/// keeps skeleton states visible and retries honest. At most one load is
/// outstanding per panel; spawning another replaces it. Dropping the runner
/// aborts everything still in flight, so no delayed fetch can fire into a
/// torn-down UI.
pub struct JobRunner {
    jobs: HashMap<JobId, BackgroundJob>,
    panel_jobs: HashMap<PanelKind, JobId>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl JobRunner {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                panel_jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a delayed fetch for one panel.
    pub fn spawn_panel_load(&mut self, source: Arc<dyn DataSource>, kind: PanelKind, delay: Duration) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        // A new load for a panel replaces the outstanding one
        if let Some(old_id) = self.panel_jobs.insert(kind, job_id) {
            if let Some(old_job) = self.jobs.remove(&old_id) {
                old_job.handle.abort();
            }
        }

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let result = match kind {
                PanelKind::Tasks => source.fetch_tasks().await.map(PanelPayload::Tasks),
                PanelKind::Agents => source.fetch_agents().await.map(PanelPayload::Agents),
                PanelKind::Activity => source.fetch_activity().await.map(PanelPayload::Activity),
                PanelKind::Documents => source.fetch_documents().await.map(PanelPayload::Documents),
            }
            .map_err(|e| e.to_string());

            let _ = action_sender.send(Action::PanelLoaded { kind, result });
        });

        log::debug!("spawned load job {} for {:?} panel", job_id, kind);
        self.jobs.insert(job_id, BackgroundJob { id: job_id, handle });
        job_id
    }

    /// Push a task patch to the data source in the background.
    ///
    /// The UI has already applied the patch in place; a store failure does
    /// not roll it back, it is only logged.
    pub fn spawn_task_update(&mut self, source: Arc<dyn DataSource>, id: String, patch: TaskPatch) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let handle = tokio::spawn(async move {
            if let Err(e) = source.update_task(&id, patch).await {
                log::warn!("failed to store update for task {}: {}", id, e);
            }
        });

        self.jobs.insert(job_id, BackgroundJob { id: job_id, handle });
        job_id
    }

    /// Drop handles of jobs that have finished.
    pub fn sweep_finished(&mut self) {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for job_id in finished {
            self.jobs.remove(&job_id);
            self.panel_jobs.retain(|_, id| *id != job_id);
        }
    }

    /// Cancel all running jobs
    pub fn abort_all(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
        self.panel_jobs.clear();
    }

    /// Get the number of active jobs
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Drop for JobRunner {
    fn drop(&mut self) {
        // Cancel all jobs when the runner is dropped
        self.abort_all();
    }
}
