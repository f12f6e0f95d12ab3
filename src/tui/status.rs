//! Status message management for the TUI.

use std::time::{Duration, Instant};

/// Manages temporary status messages with optional auto-clear.
///
/// Status messages notify users of actions briefly
/// (e.g., "Exported to arc_portfolio_20250115_141200.csv").
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    /// The current message (if any)
    message: Option<String>,
    /// When the message was set (for auto-clear)
    set_at: Option<Instant>,
    /// Auto-clear duration (None = no auto-clear)
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    /// Create a new status message manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    /// Set a status message.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    /// Clear the status message.
    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Get the current message (checking auto-clear if configured).
    pub fn message(&mut self) -> Option<&str> {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.message = None;
                self.set_at = None;
            }
        }
        self.message.as_deref()
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Check if there's an active message.
    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();

        assert!(!status.has_message());
        assert!(status.peek().is_none());

        status.set("Test message");
        assert!(status.has_message());
        assert_eq!(status.peek(), Some("Test message"));

        status.clear();
        assert!(!status.has_message());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(50));

        status.set("Auto clear message");
        assert!(status.message().is_some());

        thread::sleep(Duration::from_millis(60));
        assert!(status.message().is_none());
    }

    #[test]
    fn test_status_message_no_auto_clear_default() {
        let mut status = StatusMessage::new();

        status.set("No auto clear");
        thread::sleep(Duration::from_millis(10));
        assert!(status.message().is_some());
    }
}
