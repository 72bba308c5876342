//! Single-slot notification channel.
//!
//! Only the most recent message is visible. Issuing a new one replaces whatever is shown,
//! nothing is ever queued. Regular messages auto-dismiss after [`AUTO_HIDE_DURATION`], loading
//! messages stay until closed.

use std::time::Duration;

/// How long a non-persistent message stays visible.
pub const AUTO_HIDE_DURATION: Duration = Duration::from_secs(3);

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

/// Identifies one issued message, so a dismiss timer can tell whether its message is still
/// the one on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
    persist: bool,
    loading: bool,
    ticket: Ticket,
}

impl Notification {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// `None` for messages that persist until closed.
    pub fn auto_hide(&self) -> Option<Duration> {
        if self.persist {
            None
        } else {
            Some(AUTO_HIDE_DURATION)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notifications {
    current: Option<Notification>,
    issued: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on screen, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Ticket {
        self.show(message.into(), severity, false, false)
    }

    /// Like [`Notifications::notify`] but without auto-dismiss.
    pub fn notify_persistent(&mut self, message: impl Into<String>, severity: Severity) -> Ticket {
        self.show(message.into(), severity, true, false)
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> Ticket {
        self.notify(message, Severity::Success)
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> Ticket {
        self.notify(message, Severity::Error)
    }

    pub fn notify_info(&mut self, message: impl Into<String>) -> Ticket {
        self.notify(message, Severity::Info)
    }

    pub fn notify_warning(&mut self, message: impl Into<String>) -> Ticket {
        self.notify(message, Severity::Warning)
    }

    /// Shows an info-level message with a spinner that stays until closed.
    pub fn notify_loading(&mut self, message: Option<&str>) -> Ticket {
        let message = message.unwrap_or(DEFAULT_LOADING_MESSAGE).to_string();
        self.show(message, Severity::Info, true, true)
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Closes the message identified by `ticket` if it is still on screen and not persistent.
    ///
    /// Returns whether anything was closed.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|current| current.ticket == ticket && !current.persist);
        if expired {
            self.current = None;
        }
        expired
    }

    fn show(&mut self, message: String, severity: Severity, persist: bool, loading: bool) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.current = Some(Notification {
            message,
            severity,
            persist,
            loading,
            ticket,
        });
        ticket
    }
}

/// Anything that can display the outcome of a user action.
pub trait NotificationSink {
    fn notify(&mut self, message: &str, severity: Severity);

    fn notify_loading(&mut self, message: &str);

    fn close(&mut self);

    fn notify_success(&mut self, message: &str) {
        NotificationSink::notify(self, message, Severity::Success);
    }

    fn notify_error(&mut self, message: &str) {
        NotificationSink::notify(self, message, Severity::Error);
    }
}

impl NotificationSink for Notifications {
    fn notify(&mut self, message: &str, severity: Severity) {
        Notifications::notify(self, message, severity);
    }

    fn notify_loading(&mut self, message: &str) {
        Notifications::notify_loading(self, Some(message));
    }

    fn close(&mut self) {
        Notifications::close(self);
    }
}
