// Narration - human-readable lines emitted by every component

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;

/// Notifications a narrator keeps before dropping the oldest
pub const DEFAULT_RETENTION: usize = 1000;

/// Severity of a narrated line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Which component produced a narrated line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    Command,
    Remote,
    State,
    Iterator,
    Composite,
    Decorator,
    Facade,
    Strategy,
    Observer,
    Template,
    Proxy,
    Generic,
}

/// Notification with timestamp and metadata
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub category: NotificationCategory,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl Notification {
    /// Creates a notification stamped with the current local time
    pub fn new(level: NotificationLevel, category: NotificationCategory, message: String) -> Self {
        Self {
            level,
            category,
            message,
            timestamp: Local::now(),
        }
    }

    pub fn info(category: NotificationCategory, message: String) -> Self {
        Self::new(NotificationLevel::Info, category, message)
    }

    pub fn warning(category: NotificationCategory, message: String) -> Self {
        Self::new(NotificationLevel::Warning, category, message)
    }

    pub fn error(category: NotificationCategory, message: String) -> Self {
        Self::new(NotificationLevel::Error, category, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Owned sink for notifications
///
/// Every component owns one. It records recent notifications so callers and
/// tests can inspect exactly what happened, and optionally echoes each message
/// to stdout as it arrives. At most `retention` entries are kept; long-running
/// components drop their oldest lines first.
#[derive(Debug, Clone)]
pub struct Narrator {
    category: NotificationCategory,
    echo: bool,
    retention: usize,
    entries: VecDeque<Notification>,
}

impl Narrator {
    /// Narrator that prints every message as it is recorded
    pub fn new(category: NotificationCategory) -> Self {
        Self::with_echo(category, true)
    }

    /// Narrator that only records
    pub fn silent(category: NotificationCategory) -> Self {
        Self::with_echo(category, false)
    }

    pub fn with_echo(category: NotificationCategory, echo: bool) -> Self {
        Self {
            category,
            echo,
            retention: DEFAULT_RETENTION,
            entries: VecDeque::new(),
        }
    }

    /// Keep at most `limit` entries (0 keeps nothing, echo still works)
    pub fn with_retention(mut self, limit: usize) -> Self {
        self.retention = limit;
        self.trim();
        self
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    fn trim(&mut self) {
        while self.entries.len() > self.retention {
            self.entries.pop_front();
        }
    }

    pub fn category(&self) -> NotificationCategory {
        self.category
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::info(self.category, message.into()));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Notification::warning(self.category, message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(self.category, message.into()));
    }

    pub fn push(&mut self, notification: Notification) {
        if self.echo {
            println!("{}", notification.message);
        }
        self.entries.push_back(notification);
        self.trim();
    }

    /// Retained notifications, oldest first
    pub fn entries(&self) -> vec_deque::Iter<'_, Notification> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages recorded so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|n| n.message.clone()).collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.entries.back().map(|n| n.message.as_str())
    }

    /// Number of recorded warnings and errors
    pub fn problem_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|n| n.level != NotificationLevel::Info)
            .count()
    }

    /// Removes and returns everything recorded so far
    pub fn drain(&mut self) -> Vec<Notification> {
        self.entries.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let notif = Notification::error(NotificationCategory::Command, "Test error".to_string());

        assert_eq!(notif.level, NotificationLevel::Error);
        assert_eq!(notif.category, NotificationCategory::Command);
        assert_eq!(notif.message, "Test error");
        assert_eq!(notif.to_string(), "Test error");
    }

    #[test]
    fn test_notification_helpers() {
        let info = Notification::info(NotificationCategory::State, "Info".to_string());
        let warning = Notification::warning(NotificationCategory::Iterator, "Warning".to_string());
        let error = Notification::error(NotificationCategory::Generic, "Error".to_string());

        assert_eq!(info.level, NotificationLevel::Info);
        assert_eq!(warning.level, NotificationLevel::Warning);
        assert_eq!(error.level, NotificationLevel::Error);
    }

    #[test]
    fn test_narrator_records_in_order() {
        let mut narrator = Narrator::silent(NotificationCategory::State);
        narrator.info("first");
        narrator.warning("second");

        assert_eq!(narrator.messages(), vec!["first", "second"]);
        assert_eq!(narrator.last_message(), Some("second"));
        assert_eq!(narrator.problem_count(), 1);
        assert!(narrator
            .entries()
            .all(|n| n.category == NotificationCategory::State));
    }

    #[test]
    fn test_narrator_drain() {
        let mut narrator = Narrator::silent(NotificationCategory::Generic);
        narrator.info("a");
        narrator.info("b");

        let drained = narrator.drain();
        assert_eq!(drained.len(), 2);
        assert!(narrator.is_empty());
        assert_eq!(narrator.last_message(), None);
    }

    #[test]
    fn test_retention_drops_oldest() {
        let mut narrator = Narrator::silent(NotificationCategory::State).with_retention(3);
        for i in 0..10 {
            narrator.info(format!("line {}", i));
        }

        assert_eq!(narrator.entries().len(), 3);
        assert_eq!(narrator.messages(), vec!["line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_default_retention_is_bounded() {
        let mut narrator = Narrator::silent(NotificationCategory::Generic);
        for _ in 0..DEFAULT_RETENTION + 50 {
            narrator.info("tick");
        }
        assert_eq!(narrator.entries().len(), DEFAULT_RETENTION);
    }
}
