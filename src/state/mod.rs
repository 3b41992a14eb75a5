//! Application state management module.
//!
//! This module contains the process-local state shared between the task
//! store and the user interface:
//! - Main `State` struct holding the authoritative task list and filters
//! - Editor session state machine and its form
//! - Transient notifications
//! - Navigation types

mod editor;
mod navigation;
mod notification;

pub use editor::{EditorSession, FormField, Session, SessionToken, Submission, TaskForm};
pub use navigation::Focus;
pub use notification::{Notification, Notifications, Severity, DEFAULT_TTL};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
