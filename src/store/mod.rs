//! Task store controller.
//!
//! The store owns every mutation of the authoritative task list. Each
//! successful mutation is followed by a full reload of tasks and stats from
//! the service; the local list is never patched in place.

mod controller;
mod delete;
mod error;
mod seed;

pub use controller::TaskStore;
pub use delete::{ConfirmedDelete, PendingDelete};
pub use error::StoreError;
