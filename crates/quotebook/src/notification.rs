//! Single-slot notification surface
//!
//! Reports the outcome of favorite toggles to the user. There is one slot:
//! a new notification replaces whatever was showing.

use crate::config::messages;
use crate::favorites::ToggleOutcome;

/// Intent of a notification, for presentation styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral information
    Info,
    /// An operation succeeded
    Success,
    /// The user asked for something that could not be done
    Warning,
}

/// A user-facing message and whether it is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub active: bool,
}

/// Holds at most one notification
#[derive(Debug, Default)]
pub struct NotificationChannel {
    current: Option<Notification>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text`, replacing any notification not yet acknowledged
    pub fn notify(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.current = Some(Notification {
            kind,
            text: text.into(),
            active: true,
        });
    }

    /// Hide the current notification. The text is kept but never reported
    /// while inactive.
    pub fn clear(&mut self) {
        if let Some(n) = self.current.as_mut() {
            n.active = false;
        }
    }

    /// The notification to display, if one is active
    pub fn active(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.active)
    }

    pub fn is_active(&self) -> bool {
        self.active().is_some()
    }

    /// Publish the message for a toggle outcome
    ///
    /// Outcomes without a message clear the channel instead.
    pub fn report(&mut self, outcome: ToggleOutcome, notify_on_remove: bool) {
        match outcome_message(outcome, notify_on_remove) {
            Some((kind, text)) => self.notify(kind, text),
            None => self.clear(),
        }
    }
}

/// Message shown for a toggle outcome, if any
pub fn outcome_message(
    outcome: ToggleOutcome,
    notify_on_remove: bool,
) -> Option<(NotificationKind, &'static str)> {
    match outcome {
        ToggleOutcome::Added => Some((NotificationKind::Success, messages::ADDED)),
        ToggleOutcome::CapacityReached => {
            Some((NotificationKind::Warning, messages::CAPACITY_REACHED))
        }
        ToggleOutcome::Removed if notify_on_remove => {
            Some((NotificationKind::Info, messages::REMOVED))
        }
        ToggleOutcome::Removed => None,
    }
}
