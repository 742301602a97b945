use std::time::Duration;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::models::{ActionItem, Priority};

/// A reminder hand-off for the external notification collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderRequest {
    /// Identifier for the hand-off, so the collaborator can dedupe
    pub id: Uuid,
    /// The task text to remind about
    pub task: String,
    /// How long after the analysis the reminder should fire
    pub delay: Duration,
}

/// Reminder delay by priority.
pub fn reminder_delay(priority: Priority) -> Duration {
    let hours = match priority {
        Priority::Urgent => 1,
        Priority::High => 4,
        Priority::Medium => 24,
        Priority::Low => 72,
    };
    Duration::from_secs(hours * 3600)
}

/// Derive one reminder request per action item.
pub fn derive_reminders(action_items: &[ActionItem]) -> Vec<ReminderRequest> {
    action_items
        .iter()
        .map(|item| ReminderRequest {
            id: Uuid::new_v4(),
            task: item.task.clone(),
            delay: reminder_delay(item.priority),
        })
        .collect()
}

/// Destination for reminder requests. Delivery is fire-and-forget: an
/// implementation must swallow its own failures; nothing propagates back
/// into the analysis result.
pub trait ReminderSink: Send + Sync {
    fn deliver(&self, request: &ReminderRequest);
}

/// Sink that records the hand-off in the log, with the wall-clock fire
/// time for operators reading it.
#[derive(Debug, Default)]
pub struct LogReminderSink;

impl ReminderSink for LogReminderSink {
    fn deliver(&self, request: &ReminderRequest) {
        let fire_at = chrono::Duration::from_std(request.delay)
            .ok()
            .map(|delay| Utc::now() + delay);

        match fire_at {
            Some(at) => info!(
                id = %request.id,
                task = %request.task,
                fire_at = %at.to_rfc3339(),
                "reminder request handed off"
            ),
            None => info!(
                id = %request.id,
                task = %request.task,
                "reminder request handed off"
            ),
        }
    }
}
