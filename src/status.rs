//! Status/UI boundary.
//!
//! The core only ever writes here: short human-readable messages with a
//! severity, published when gestures are handled or initialization
//! succeeds/fails. The banner keeps the latest message visible for a fixed
//! delay and then auto-dismisses.

use std::sync::{Arc, Mutex};

use web_time::{Duration, Instant};

/// Message severity for the status boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine information.
    Info,
    /// An action completed.
    Success,
    /// Something needs attention but nothing failed fatally.
    Warning,
}

/// One-way sink for status messages.
pub trait StatusSink {
    /// Publish a message. The sink owns presentation and dismissal.
    fn publish(&mut self, message: &str, severity: Severity);
}

/// Sink that forwards to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn publish(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info | Severity::Success => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
        }
    }
}

/// Retains the latest status message and auto-dismisses it after a fixed
/// delay.
#[derive(Debug)]
pub struct StatusBanner {
    current: Option<(String, Severity, Instant)>,
    dismiss_after: Duration,
}

impl StatusBanner {
    /// Banner that dismisses messages after `dismiss_after`.
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            dismiss_after,
        }
    }

    /// Show a message, replacing whatever is currently visible.
    pub fn show(&mut self, message: &str, severity: Severity, now: Instant) {
        self.current = Some((message.to_owned(), severity, now));
    }

    /// The visible message at `now`, if it has not been dismissed yet.
    #[must_use]
    pub fn active(&self, now: Instant) -> Option<(&str, Severity)> {
        self.current.as_ref().and_then(|(message, severity, shown)| {
            if now.saturating_duration_since(*shown) < self.dismiss_after {
                Some((message.as_str(), *severity))
            } else {
                None
            }
        })
    }
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

/// Clonable sink that logs and also records into a shared [`StatusBanner`],
/// so the frame loop can surface the latest message while the engine keeps
/// its own handle.
#[derive(Clone)]
pub struct SharedStatus {
    banner: Arc<Mutex<StatusBanner>>,
}

impl SharedStatus {
    /// Shared banner with the given dismissal delay.
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            banner: Arc::new(Mutex::new(StatusBanner::new(dismiss_after))),
        }
    }

    /// The visible message at `now`, if any.
    #[must_use]
    pub fn active(&self, now: Instant) -> Option<(String, Severity)> {
        let banner = self.banner.lock().ok()?;
        banner
            .active(now)
            .map(|(message, severity)| (message.to_owned(), severity))
    }
}

impl Default for SharedStatus {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl StatusSink for SharedStatus {
    fn publish(&mut self, message: &str, severity: Severity) {
        LogStatus.publish(message, severity);
        if let Ok(mut banner) = self.banner.lock() {
            banner.show(message, severity, Instant::now());
        }
    }
}
