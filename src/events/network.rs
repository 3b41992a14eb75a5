use crate::remote::TaskId;
use crate::state::{SessionToken, Submission};
use crate::store::{ConfirmedDelete, StoreError, TaskStore};
use log::*;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Initial health check, list and stats load, and optional seeding.
    Load,
    Refresh,
    Submit {
        token: SessionToken,
        submission: Submission,
    },
    Toggle { id: TaskId },
    Delete(ConfirmedDelete),
}

/// Specify struct for dispatching network events to the task store.
///
#[derive(Clone)]
pub struct Handler {
    store: TaskStore,
    seed_on_empty: bool,
}

impl Handler {
    /// Return new instance wrapping the task store.
    ///
    pub fn new(store: TaskStore, seed_on_empty: bool) -> Self {
        Handler {
            store,
            seed_on_empty,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&self, event: Event) -> Result<(), StoreError> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Load => self.load().await?,
            Event::Refresh => {
                self.store.refresh().await?;
                self.store.refresh_stats().await?;
            }
            Event::Submit { token, submission } => self.store.submit(token, submission).await?,
            Event::Toggle { id } => self.store.toggle(id).await?,
            Event::Delete(confirmed) => self.store.remove(confirmed).await?,
        }
        Ok(())
    }

    /// Prepare initial application data.
    ///
    async fn load(&self) -> Result<(), StoreError> {
        info!("Preparing initial application data...");
        // An unhealthy service still gets a list request so the user sees
        // the concrete failure.
        if let Err(e) = self.store.health().await {
            debug!("Continuing after failed health check: {}", e);
        }
        self.store.refresh().await?;
        if let Err(e) = self.store.refresh_stats().await {
            debug!("Continuing without stats: {}", e);
        }
        if self.seed_on_empty {
            self.store.seed_if_empty().await?;
        }
        info!("Loaded initial application data.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{Priority, Task, TaskService};
    use crate::state::State;
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn handler(server: &MockServer, seed_on_empty: bool) -> Handler {
        let store = TaskStore::new(
            TaskService::new(&server.base_url()),
            Arc::new(Mutex::new(State::default())),
        );
        Handler::new(store, seed_on_empty)
    }

    async fn mock_read_endpoints(server: &MockServer, tasks: serde_json::Value) {
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/health");
                then.status(200).json_body(json!({ "status": "healthy" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/tasks");
                then.status(200).json_body(tasks);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/stats");
                then.status(200)
                    .json_body(json!({ "total": 0, "completed": 0, "pending": 0, "high_priority": 0 }));
            })
            .await;
    }

    #[tokio::test]
    async fn load_without_seeding_skips_create() {
        let server = MockServer::start_async().await;
        mock_read_endpoints(&server, json!([])).await;
        let post = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/tasks");
                then.status(200);
            })
            .await;

        let handler = handler(&server, false);
        handler.handle(Event::Load).await.unwrap();
        post.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn load_seeds_empty_collection() {
        let server = MockServer::start_async().await;
        let seeded = Task {
            id: TaskId(1),
            title: "Seed".to_string(),
            description: None,
            priority: Priority::High,
            completed: false,
            created_at: "2024-03-01T10:00:00".to_string(),
            updated_at: None,
        };
        mock_read_endpoints(&server, json!([])).await;
        let post = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/tasks");
                then.status(200).json_body(json!(seeded));
            })
            .await;

        let handler = handler(&server, true);
        handler.handle(Event::Load).await.unwrap();
        post.assert_hits_async(3).await;
    }

    #[tokio::test]
    async fn refresh_event_reloads_list_and_stats() {
        let server = MockServer::start_async().await;
        mock_read_endpoints(&server, json!([])).await;

        let handler = handler(&server, false);
        handler.handle(Event::Refresh).await.unwrap();
        let state = handler.store.state().lock().await;
        assert!(state.stats().is_some());
    }
}
