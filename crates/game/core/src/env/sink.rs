//! Notification sinks.
//!
//! The core never prints. Operations hand their [`CombatEvent`] to whatever
//! sink the caller injected: [`NullSink`] for silent runs, [`RecordingSink`]
//! for assertions, or a logging adapter provided by an outer layer.

use crate::event::CombatEvent;

/// Consumer of notifications produced by entity operations.
pub trait NotificationSink {
    fn notify(&mut self, event: CombatEvent);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, event: CombatEvent) {
        (**self).notify(event);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, event: CombatEvent) {
        (**self).notify(event);
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _event: CombatEvent) {}
}

/// Keeps every notification in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<CombatEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Rendered lines, one per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn last(&self) -> Option<&CombatEvent> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn take(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.notify(CombatEvent::Died { name: "a".into() });
        sink.notify(CombatEvent::Died { name: "b".into() });

        assert_eq!(sink.lines(), vec!["a has died!", "b has died!"]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn sinks_work_through_mutable_references() {
        fn announce(mut sink: impl NotificationSink) {
            sink.notify(CombatEvent::Died { name: "x".into() });
        }

        let mut sink = RecordingSink::new();
        announce(&mut sink);
        announce(&mut sink);
        assert_eq!(sink.events().len(), 2);
    }
}
