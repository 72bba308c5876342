//! Signal-backed handle to the notification channel.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use notes_core::{Notification, NotificationSink, Notifications, Severity, Ticket};

/// Copyable handle to the single notification slot of the page.
///
/// Components receive it as a property; there is no global lookup.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    notifications: Signal<Notifications>,
}

/// Creates the notification channel for the component tree below the caller.
pub fn use_notifier() -> Notifier {
    Notifier {
        notifications: use_signal(Notifications::new),
    }
}

impl Notifier {
    /// Snapshot of the message on screen, subscribing the caller to changes.
    pub fn current(&self) -> Option<Notification> {
        self.notifications.read().current().cloned()
    }

    /// Closes the message behind `ticket` once its auto-hide delay has passed, unless it has
    /// been replaced in the meantime.
    fn schedule_dismiss(&self, ticket: Ticket) {
        let delay = self
            .notifications
            .peek()
            .current()
            .and_then(|notification| notification.auto_hide());
        let Some(delay) = delay else {
            return;
        };

        let mut notifications = self.notifications;
        spawn(async move {
            TimeoutFuture::new(delay.as_millis() as u32).await;
            if notifications.write().expire(ticket) {
                tracing::debug!("Notification {:?} dismissed", ticket);
            }
        });
    }
}

impl NotificationSink for Notifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        let ticket = self.notifications.write().notify(message, severity);
        self.schedule_dismiss(ticket);
    }

    fn notify_loading(&mut self, message: &str) {
        self.notifications.write().notify_loading(Some(message));
    }

    fn close(&mut self) {
        self.notifications.write().close();
    }
}
