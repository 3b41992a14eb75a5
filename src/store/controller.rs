use super::delete::ConfirmedDelete;
use super::error::StoreError;
use super::seed;
use crate::remote::{Health, NewTask, RemoteError, TaskId, TaskPatch, TaskService};
use crate::state::{SessionToken, Severity, State, Submission};
use log::*;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

const TITLE_REQUIRED: &str = "Title is required";

/// Single source of truth for the authoritative task list and entry point
/// for every mutation.
///
/// The state lock is only taken around synchronous reads and writes, never
/// across a request, so operations started from separate tasks overlap
/// freely and the last reload to land wins.
///
#[derive(Clone)]
pub struct TaskStore {
    remote: TaskService,
    state: Arc<Mutex<State>>,
}

impl TaskStore {
    /// Return new instance using the given service client and shared state.
    ///
    pub fn new(remote: TaskService, state: Arc<Mutex<State>>) -> Self {
        TaskStore { remote, state }
    }

    pub fn state(&self) -> &Arc<Mutex<State>> {
        &self.state
    }

    /// Fetch the full collection and replace the authoritative list with it.
    /// On failure the previous list is kept and the user is told.
    ///
    pub async fn refresh(&self) -> Result<(), StoreError> {
        match self.tracked(self.remote.tasks()).await {
            Ok(tasks) => {
                info!("Loaded {} tasks.", tasks.len());
                self.state.lock().await.set_tasks(tasks);
                Ok(())
            }
            Err(source) => {
                let error = StoreError::RemoteFetch {
                    what: "tasks",
                    source,
                };
                error!("{}", error);
                self.notify(error.to_string(), Severity::Error).await;
                Err(error)
            }
        }
    }

    /// Fetch the aggregate counters. Failures are logged only; stats never
    /// block task visibility.
    ///
    pub async fn refresh_stats(&self) -> Result<(), StoreError> {
        match self.tracked(self.remote.stats()).await {
            Ok(stats) => {
                self.state.lock().await.set_stats(stats);
                Ok(())
            }
            Err(source) => {
                let error = StoreError::RemoteFetch {
                    what: "stats",
                    source,
                };
                warn!("{}", error);
                Err(error)
            }
        }
    }

    /// Validate and create a task, then reload.
    ///
    pub async fn create(&self, input: NewTask) -> Result<(), StoreError> {
        if input.title.trim().is_empty() {
            return self.reject(TITLE_REQUIRED).await;
        }
        info!("Creating task '{}'...", input.title);
        let result = self.tracked(self.remote.create_task(&input)).await;
        self.settle("create", result.map(|task| debug!("Service assigned id {}", task.id)))
            .await?;
        self.notify("Task created", Severity::Success).await;
        Ok(())
    }

    /// Send a partial update for a task, then reload.
    ///
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<(), StoreError> {
        if patch
            .title
            .as_deref()
            .map_or(false, |title| title.trim().is_empty())
        {
            return self.reject(TITLE_REQUIRED).await;
        }
        info!("Updating task {}...", id);
        let result = self.tracked(self.remote.update_task(id, &patch)).await;
        self.settle("update", result.map(|_| ())).await?;
        self.notify("Task updated", Severity::Success).await;
        Ok(())
    }

    /// Delete a task the user has confirmed, then reload.
    ///
    pub async fn remove(&self, confirmed: ConfirmedDelete) -> Result<(), StoreError> {
        let id = confirmed.id();
        info!("Deleting task {}...", id);
        let result = self.tracked(self.remote.delete_task(id)).await;
        self.settle("delete", result).await?;
        self.notify("Task deleted", Severity::Success).await;
        Ok(())
    }

    /// Flip a task's completion flag based on the cached value. Unknown ids
    /// are ignored since the cached list may be stale.
    ///
    pub async fn toggle(&self, id: TaskId) -> Result<(), StoreError> {
        let completed = {
            let state = self.state.lock().await;
            state.find_task(id).map(|task| task.completed)
        };
        match completed {
            Some(completed) => self.update(id, TaskPatch::completed(!completed)).await,
            None => {
                debug!("Ignoring toggle for task {} missing from the local list", id);
                Ok(())
            }
        }
    }

    /// Route an editor submission and close the editor once it succeeds.
    ///
    pub async fn submit(
        &self,
        token: SessionToken,
        submission: Submission,
    ) -> Result<(), StoreError> {
        match submission {
            Submission::Create(input) => self.create(input).await?,
            Submission::Update(id, patch) => self.update(id, patch).await?,
        }
        self.state.lock().await.editor_mut().close_if(token);
        Ok(())
    }

    /// Create the starter tasks when the authoritative list is empty.
    ///
    pub async fn seed_if_empty(&self) -> Result<(), StoreError> {
        if !self.state.lock().await.tasks().is_empty() {
            return Ok(());
        }
        info!("No tasks found, creating starter tasks...");
        for task in seed::tasks() {
            self.create(task).await?;
        }
        Ok(())
    }

    /// Check that the service is reachable.
    ///
    pub async fn health(&self) -> Result<Health, StoreError> {
        match self.tracked(self.remote.health()).await {
            Ok(health) => {
                if health.is_healthy() {
                    info!("Task service at {} is healthy.", self.remote.base_url());
                } else {
                    warn!("Task service reports status '{}'", health.status);
                }
                Ok(health)
            }
            Err(source) => {
                warn!("Task service at {} unreachable: {}", self.remote.base_url(), source);
                self.notify("Task service unreachable", Severity::Error).await;
                Err(StoreError::RemoteFetch {
                    what: "service health",
                    source,
                })
            }
        }
    }

    /// Finish a mutation: report a failure, or reload tasks then stats.
    ///
    async fn settle(&self, action: &'static str, result: Result<(), RemoteError>) -> Result<(), StoreError> {
        if let Err(source) = result {
            let error = StoreError::RemoteMutation { action, source };
            error!("{}", error);
            self.notify(error.to_string(), Severity::Error).await;
            return Err(error);
        }
        self.refresh().await?;
        // Stats failures are already logged and must not fail the mutation.
        let _ = self.refresh_stats().await;
        Ok(())
    }

    async fn reject<T>(&self, message: &str) -> Result<T, StoreError> {
        warn!("Rejected task input: {}", message);
        self.notify(message, Severity::Error).await;
        Err(StoreError::Validation(message.to_string()))
    }

    async fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.state.lock().await.notify(message, severity);
    }

    /// Await a request while it counts towards the loading indicator.
    ///
    async fn tracked<T>(&self, request: impl Future<Output = T>) -> T {
        self.state.lock().await.begin_request();
        let output = request.await;
        self.state.lock().await.end_request();
        output
    }
}
