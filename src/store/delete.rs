//! Delete confirmation gate.
//!
//! A task can only be removed with a [`ConfirmedDelete`], and the only way to
//! get one is to answer yes to a [`PendingDelete`].

use crate::remote::{Task, TaskId};

/// A delete awaiting the user's yes/no answer.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    id: TaskId,
    title: String,
}

impl PendingDelete {
    pub fn new(task: &Task) -> Self {
        PendingDelete {
            id: task.id,
            title: task.title.clone(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The user answered yes.
    ///
    pub fn confirm(self) -> ConfirmedDelete {
        ConfirmedDelete { id: self.id }
    }
}

/// Proof that the user confirmed deleting a task.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: TaskId,
}

impl ConfirmedDelete {
    pub fn id(&self) -> TaskId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn test_confirm_keeps_id() {
        let task: Task = Faker.fake();
        let pending = PendingDelete::new(&task);
        assert_eq!(pending.title(), task.title);
        assert_eq!(pending.confirm().id(), task.id);
    }
}
