//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: task service interactions dispatched by action and task id
//! - Terminal events: user input and terminal interactions

pub mod network;
pub mod terminal;
