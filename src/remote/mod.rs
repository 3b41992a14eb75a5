//! Task service integration.
//!
//! This module talks to the remote task service over HTTP and converts its
//! JSON payloads into explicitly-defined types.

mod client;
mod error;
mod resource;

pub use error::RemoteError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;

/// Responsible for asynchronous interaction with the task service.
///
/// Cloning is cheap and clones share the underlying connection pool.
///
#[derive(Clone)]
pub struct TaskService {
    client: Client,
}

impl TaskService {
    /// Returns a new instance for the service at the given base URL.
    ///
    pub fn new(base_url: &str) -> TaskService {
        debug!("Initializing task service client for {}...", base_url);
        TaskService {
            client: Client::new(base_url),
        }
    }

    /// Returns the base URL requests are sent to.
    ///
    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }

    /// Returns the full task collection in service order.
    ///
    pub async fn tasks(&self) -> Result<Vec<Task>, RemoteError> {
        debug!("Requesting task collection...");
        let tasks: Vec<Task> = self.client.get("tasks").await?;
        debug!("Retrieved {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Returns the aggregate counters.
    ///
    pub async fn stats(&self) -> Result<TaskStats, RemoteError> {
        debug!("Requesting task stats...");
        self.client.get("stats").await
    }

    /// Returns the service health report.
    ///
    pub async fn health(&self) -> Result<Health, RemoteError> {
        debug!("Requesting service health...");
        self.client.get("health").await
    }

    /// Create a task and return it as stored by the service.
    ///
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, RemoteError> {
        debug!("Creating task '{}'...", task.title);
        self.client.send(Method::POST, "tasks", task).await
    }

    /// Apply a partial update to a task.
    ///
    pub async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, RemoteError> {
        debug!("Updating task {}...", id);
        self.client
            .send(Method::PUT, &format!("tasks/{}", id), patch)
            .await
    }

    /// Delete a task.
    ///
    pub async fn delete_task(&self, id: TaskId) -> Result<(), RemoteError> {
        debug!("Deleting task {}...", id);
        self.client
            .execute(Method::DELETE, &format!("tasks/{}", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn tasks_success() -> anyhow::Result<()> {
        let tasks: [Task; 2] = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/tasks");
                then.status(200).json_body(json!(tasks));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let received = service.tasks().await?;
        mock.assert_async().await;
        assert_eq!(received, tasks.to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn stats_success() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/stats");
                then.status(200)
                    .json_body(json!({ "total": 4, "completed": 2, "pending": 2, "high_priority": 2 }));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let stats = service.stats().await?;
        mock.assert_async().await;
        assert_eq!(
            stats,
            TaskStats {
                total: 4,
                completed: 2,
                pending: 2,
                high_priority: 2
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_task_posts_body() -> anyhow::Result<()> {
        let mut created: Task = Faker.fake();
        created.title = "Write docs".to_string();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/tasks").json_body(json!({
                    "title": "Write docs",
                    "description": "in english",
                    "priority": "high"
                }));
                then.status(200).json_body(json!(created));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let task = service
            .create_task(&NewTask {
                title: "Write docs".to_string(),
                description: Some("in english".to_string()),
                priority: Priority::High,
            })
            .await?;
        mock.assert_async().await;
        assert_eq!(task.title, "Write docs");
        Ok(())
    }

    #[tokio::test]
    async fn update_task_puts_partial_body() -> anyhow::Result<()> {
        let mut updated: Task = Faker.fake();
        updated.id = TaskId(42);
        updated.completed = true;

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/api/tasks/42")
                    .json_body(json!({ "completed": true }));
                then.status(200).json_body(json!(updated));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        let task = service
            .update_task(TaskId(42), &TaskPatch::completed(true))
            .await?;
        mock.assert_async().await;
        assert!(task.completed);
        Ok(())
    }

    #[tokio::test]
    async fn delete_task_success() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/api/tasks/3");
                then.status(200)
                    .json_body(json!({ "message": "Task deleted successfully" }));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        service.delete_task(TaskId(3)).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_task_fails() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/api/tasks/999");
                then.status(404).json_body(json!({ "detail": "Task not found" }));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        assert!(service.delete_task(TaskId(999)).await.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn health_success() -> anyhow::Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/health");
                then.status(200)
                    .json_body(json!({ "status": "healthy", "timestamp": "2024-03-01T10:00:00Z" }));
            })
            .await;

        let service = TaskService::new(&server.base_url());
        assert!(service.health().await?.is_healthy());
        Ok(())
    }
}
