//! Transient user notifications.
//!
//! Notifications are a display sink: the core pushes messages here and the
//! UI shows the newest live one until it expires.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default time a notification stays visible.
///
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Upper bound on retained notifications.
///
const CAPACITY: usize = 16;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    raised_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

/// Queue of notifications with auto-dismiss after a fixed interval.
///
#[derive(Debug)]
pub struct Notifications {
    entries: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications::new(DEFAULT_TTL)
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Notifications {
            entries: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }

    fn push_at(&mut self, message: impl Into<String>, severity: Severity, raised_at: Instant) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            message: message.into(),
            severity,
            raised_at,
        });
    }

    /// Drop every notification older than the configured interval.
    ///
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries.retain(|n| !n.is_expired(now, ttl));
    }

    /// Return the newest notification that has not yet expired.
    ///
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.entries
            .back()
            .filter(|n| !n.is_expired(now, self.ttl))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_newest() {
        let mut notifications = Notifications::default();
        notifications.push("first", Severity::Success);
        notifications.push("second", Severity::Error);
        let current = notifications.current(Instant::now()).unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn test_auto_dismiss_after_interval() {
        let mut notifications = Notifications::default();
        let start = Instant::now();
        notifications.push_at("saved", Severity::Success, start);
        assert!(notifications.current(start + Duration::from_secs(2)).is_some());
        assert!(notifications.current(start + DEFAULT_TTL).is_none());

        notifications.prune(start + DEFAULT_TTL);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut notifications = Notifications::new(Duration::from_secs(60));
        for i in 0..(CAPACITY + 4) {
            notifications.push(format!("n{}", i), Severity::Success);
        }
        assert_eq!(notifications.len(), CAPACITY);
        assert_eq!(notifications.iter().next().unwrap().message, "n4");
    }
}
