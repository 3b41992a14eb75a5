//! Terminal client for a REST task service.
//!
//! Tasks are cached locally, narrowed through status, priority and search
//! filters, and edited through a modal form. Every mutation is followed by a
//! full reload so the cached list always mirrors the service.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod remote;
pub mod state;
pub mod store;
pub mod ui;
