//! Notification sink backed by `tracing`.

use skirmish_core::{CombatEvent, NotificationSink};
use tracing::{info, warn};

/// Emits every notification as a `tracing` event under `skirmish::combat`.
///
/// Deaths are logged at `WARN`, everything else at `INFO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, event: CombatEvent) {
        if event.is_death() {
            warn!(target: "skirmish::combat", subject = event.subject(), "{event}");
        } else {
            info!(target: "skirmish::combat", subject = event.subject(), "{event}");
        }
    }
}
