//! Notification state: one active alert at a time.

use std::sync::RwLock;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Whether the alert is currently visible.
    pub open: bool,
    /// Severity shown to the user.
    pub kind: AlertKind,
    /// Single-line message body.
    pub message: String,
    /// Optional heading.
    pub title: Option<String>,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            open: false,
            kind: AlertKind::default(),
            message: String::new(),
            title: None,
        }
    }
}

/// Thread-safe holder for the active notification.
///
/// At most one alert is visible per holder; each `show_*` call replaces the
/// previous one (last call wins). [`close`](AlertCenter::close) only flips
/// `open` off, keeping the last kind/message/title readable so a dismissal
/// animation can still render them. All operations are synchronous and
/// idempotent under repeated identical calls.
#[derive(Debug, Default)]
pub struct AlertCenter {
    alert: RwLock<Alert>,
}

impl AlertCenter {
    /// Create a holder with no visible alert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification.
    pub fn show_success(&self, message: impl Into<String>, title: Option<String>) {
        self.show(AlertKind::Success, message.into(), title);
    }

    /// Show an error notification.
    pub fn show_error(&self, message: impl Into<String>, title: Option<String>) {
        self.show(AlertKind::Error, message.into(), title);
    }

    /// Show a warning notification.
    pub fn show_warning(&self, message: impl Into<String>, title: Option<String>) {
        self.show(AlertKind::Warning, message.into(), title);
    }

    /// Show an informational notification.
    pub fn show_info(&self, message: impl Into<String>, title: Option<String>) {
        self.show(AlertKind::Info, message.into(), title);
    }

    /// Hide the alert, preserving its last contents.
    pub fn close(&self) {
        if let Ok(mut alert) = self.alert.write() {
            alert.open = false;
        }
    }

    /// Whether an alert is currently visible.
    pub fn is_open(&self) -> bool {
        self.alert.read().map(|a| a.open).unwrap_or(false)
    }

    /// Snapshot of the current alert.
    pub fn current(&self) -> Alert {
        self.alert
            .read()
            .map(|a| a.clone())
            .unwrap_or_default()
    }

    fn show(&self, kind: AlertKind, message: String, title: Option<String>) {
        if let Ok(mut alert) = self.alert.write() {
            *alert = Alert {
                open: true,
                kind,
                message,
                title,
            };
        }
    }
}
