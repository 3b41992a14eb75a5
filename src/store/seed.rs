use crate::remote::{NewTask, Priority};

/// Starter tasks created when the service holds no tasks on first load.
///
pub fn tasks() -> Vec<NewTask> {
    vec![
        NewTask {
            title: "Set up the CI pipeline".to_string(),
            description: Some("Build, lint and test on every push".to_string()),
            priority: Priority::High,
        },
        NewTask {
            title: "Write deployment docs".to_string(),
            description: Some("Document the release checklist".to_string()),
            priority: Priority::Medium,
        },
        NewTask {
            title: "Tidy up monitoring dashboards".to_string(),
            description: None,
            priority: Priority::Low,
        },
    ]
}
