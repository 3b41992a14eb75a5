//! Derivation of the visible task subset.
//!
//! The filter engine is a pure function of the authoritative task list and
//! the current [`FilterState`]. Predicates combine conjunctively and an unset
//! predicate imposes no constraint, so the result is always an
//! order-preserving subset of the input.

use crate::remote::{Priority, Task};
use std::fmt;

/// Completion status predicate.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    Completed,
    Pending,
}

impl StatusFilter {
    fn matches(self, completed: bool) -> bool {
        match self {
            StatusFilter::Completed => completed,
            StatusFilter::Pending => !completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        })
    }
}

/// The three independent narrowing predicates.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: Option<StatusFilter>,
    pub priority: Option<Priority>,
    pub search: String,
}

impl FilterState {
    /// Return true if no predicate is set.
    ///
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.search.is_empty()
    }

    /// Cycle the status predicate: none, pending, completed, none.
    ///
    pub fn cycle_status(&mut self) -> &mut Self {
        self.status = match self.status {
            None => Some(StatusFilter::Pending),
            Some(StatusFilter::Pending) => Some(StatusFilter::Completed),
            Some(StatusFilter::Completed) => None,
        };
        self
    }

    /// Cycle the priority predicate: none, low, medium, high, none.
    ///
    pub fn cycle_priority(&mut self) -> &mut Self {
        self.priority = match self.priority {
            None => Some(Priority::Low),
            Some(Priority::High) => None,
            Some(priority) => Some(priority.next()),
        };
        self
    }

    /// Return true if the task satisfies every set predicate.
    ///
    pub fn matches(&self, task: &Task) -> bool {
        matches_status(task, self.status)
            && matches_priority(task, self.priority)
            && matches_search(task, &self.search)
    }
}

pub fn matches_status(task: &Task, status: Option<StatusFilter>) -> bool {
    status.map_or(true, |status| status.matches(task.completed))
}

pub fn matches_priority(task: &Task, priority: Option<Priority>) -> bool {
    priority.map_or(true, |priority| task.priority == priority)
}

/// Case-insensitive substring match over title and, when present,
/// description. An empty term matches everything.
///
pub fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    task.title.to_lowercase().contains(&term)
        || task
            .description
            .as_deref()
            .map_or(false, |description| description.to_lowercase().contains(&term))
}

/// Return the tasks satisfying all predicates, in their original order.
///
pub fn apply<'a>(tasks: &'a [Task], filter: &FilterState) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
