//! Warning channel: fire-and-forget notices that expire on their own.
//!
//! Time is always passed in by the caller, so expiry is deterministic under
//! test and the queue never reads a clock itself.

use std::time::{Duration, Instant};

/// Receiver of user-facing warnings.
pub trait WarningSink {
    /// Show `message` for `duration`.
    fn add_warning(&mut self, message: &str, duration: Duration, now: Instant);
}

/// A warning and the instant it stops being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Text shown to the user.
    pub message: String,
    /// When the warning expires.
    pub expires_at: Instant,
}

impl Warning {
    /// Whether the warning is still shown at `now`.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Warnings in arrival order.
#[derive(Debug, Clone, Default)]
pub struct WarningQueue {
    warnings: Vec<Warning>,
}

impl WarningQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings still shown at `now`, oldest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.is_active(now))
    }

    /// Drop every warning expired at `now`; returns how many were dropped.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.warnings.len();
        self.warnings.retain(|w| w.is_active(now));
        let pruned = before - self.warnings.len();
        if pruned > 0 {
            tracing::trace!(pruned, "Expired warnings removed");
        }
        pruned
    }

    /// Number of stored warnings, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether the queue holds no warnings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl WarningSink for WarningQueue {
    fn add_warning(&mut self, message: &str, duration: Duration, now: Instant) {
        tracing::trace!(message, duration_ms = duration.as_millis() as u64, "Warning added");
        self.warnings.push(Warning {
            message: message.to_string(),
            expires_at: now + duration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_expires() {
        let now = Instant::now();
        let mut queue = WarningQueue::new();
        queue.add_warning("too long", Duration::from_millis(5000), now);

        assert_eq!(queue.active(now).count(), 1);
        assert_eq!(queue.active(now + Duration::from_millis(4999)).count(), 1);
        assert_eq!(queue.active(now + Duration::from_millis(5000)).count(), 0);
    }

    #[test]
    fn test_prune_keeps_live_warnings() {
        let now = Instant::now();
        let mut queue = WarningQueue::new();
        queue.add_warning("short", Duration::from_millis(100), now);
        queue.add_warning("long", Duration::from_secs(10), now);

        let pruned = queue.prune(now + Duration::from_secs(1));
        assert_eq!(pruned, 1);
        assert_eq!(queue.len(), 1);
        let live: Vec<_> = queue.active(now).map(|w| w.message.as_str()).collect();
        assert_eq!(live, vec!["long"]);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = WarningQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.prune(Instant::now()), 0);
    }
}
