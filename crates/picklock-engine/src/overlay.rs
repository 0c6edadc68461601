//! Feedback panel: the presentation-side holder for the latest
//! [`FeedbackEvent`].
//!
//! At most one event is visible at a time. Non-assist events carry an
//! auto-dismiss deadline; assist events persist until the player
//! dismisses them. Showing a new event replaces the current one and
//! drops its pending deadline with it, so a stale timer can never clear
//! a newer message.
//!
//! The deadline is an [`Instant`] checked on [`FeedbackPanel::update`]
//! rather than a background task; callers drive `update()` from their
//! render or event loop.
//!
//! # Examples
//!
//! ```
//! use picklock_core::FeedbackEvent;
//! use picklock_engine::FeedbackPanel;
//!
//! let mut panel = FeedbackPanel::new();
//! panel.show(FeedbackEvent::hint("Turn clockwise."));
//! assert!(panel.current().is_some());
//!
//! // Assist guidance persists until dismissed.
//! panel.show(FeedbackEvent::assist("Add 5 to the click position."));
//! panel.update();
//! assert!(panel.current().is_some());
//! panel.dismiss();
//! assert!(panel.current().is_none());
//! ```

use picklock_core::FeedbackEvent;
use std::time::Instant;

/// The active feedback event plus its dismissal deadline.
#[derive(Debug, Clone)]
struct ActiveEvent {
    event: FeedbackEvent,

    /// When the event expires on its own. `None` for assist events.
    deadline: Option<Instant>,
}

/// Single-slot feedback display with auto-dismissal.
#[derive(Debug, Clone, Default)]
pub struct FeedbackPanel {
    active: Option<ActiveEvent>,
}

impl FeedbackPanel {
    /// Create an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an event, replacing whatever is currently visible.
    ///
    /// The replaced event's deadline is cancelled along with it.
    pub fn show(&mut self, event: FeedbackEvent) {
        let deadline = event.kind.auto_dismiss().map(|d| Instant::now() + d);
        self.active = Some(ActiveEvent { event, deadline });
    }

    /// Show a sequence of events in order.
    ///
    /// Each replaces the previous; the last one wins the slot. The
    /// engine's confirm outcomes emit ordered event lists with exactly
    /// these semantics.
    pub fn show_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = FeedbackEvent>,
    {
        for event in events {
            self.show(event);
        }
    }

    /// Expire the active event if its deadline has passed.
    pub fn update(&mut self) {
        if let Some(active) = &self.active
            && let Some(deadline) = active.deadline
            && Instant::now() >= deadline
        {
            self.active = None;
        }
    }

    /// Player-initiated dismissal of whatever is visible.
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// The currently visible event, if any.
    #[must_use]
    pub fn current(&self) -> Option<&FeedbackEvent> {
        self.active.as_ref().map(|a| &a.event)
    }

    /// Whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklock_core::FeedbackKind;
    use std::thread;
    use std::time::Duration;

    fn expire(panel: &mut FeedbackPanel) {
        // Rewind the deadline instead of sleeping out the full 2.5s.
        if let Some(active) = &mut panel.active {
            active.deadline = active.deadline.map(|_| Instant::now());
        }
        thread::sleep(Duration::from_millis(1));
        panel.update();
    }

    #[test]
    fn test_new_panel_is_empty() {
        let panel = FeedbackPanel::new();
        assert!(panel.is_empty());
        assert!(panel.current().is_none());
    }

    #[test]
    fn test_non_assist_event_expires() {
        let mut panel = FeedbackPanel::new();
        panel.show(FeedbackEvent::hint("Turn clockwise."));
        assert!(!panel.is_empty());

        expire(&mut panel);
        assert!(panel.is_empty());
    }

    #[test]
    fn test_assist_event_never_expires() {
        let mut panel = FeedbackPanel::new();
        panel.show(FeedbackEvent::assist("guidance"));

        thread::sleep(Duration::from_millis(5));
        panel.update();
        assert_eq!(panel.current().map(|e| e.kind), Some(FeedbackKind::Assist));
    }

    #[test]
    fn test_update_before_deadline_keeps_event() {
        let mut panel = FeedbackPanel::new();
        panel.show(FeedbackEvent::info("ok"));
        panel.update();
        assert!(!panel.is_empty());
    }

    #[test]
    fn test_show_replaces_and_cancels_deadline() {
        let mut panel = FeedbackPanel::new();
        panel.show(FeedbackEvent::hint("old"));

        // Force the old deadline due, then replace before updating.
        if let Some(active) = &mut panel.active {
            active.deadline = Some(Instant::now());
        }
        panel.show(FeedbackEvent::assist("new"));
        thread::sleep(Duration::from_millis(1));
        panel.update();

        // The stale deadline must not clear the newer message.
        assert_eq!(panel.current().map(|e| e.text.as_str()), Some("new"));
    }

    #[test]
    fn test_dismiss_clears_assist() {
        let mut panel = FeedbackPanel::new();
        panel.show(FeedbackEvent::assist("guidance"));
        panel.dismiss();
        assert!(panel.is_empty());
    }

    #[test]
    fn test_show_all_last_event_wins() {
        let mut panel = FeedbackPanel::new();
        panel.show_all([
            FeedbackEvent::info("Add 5 to the click position."),
            FeedbackEvent::assist("Second number: unwind first."),
        ]);
        assert_eq!(panel.current().map(|e| e.kind), Some(FeedbackKind::Assist));
    }
}
