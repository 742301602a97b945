use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::{analyze_local, analyze_speaking_patterns, generate_title};
use crate::models::{ActionItem, AnalysisConfig, AnalysisResult, Priority, SourceTier};
use crate::reminders::{ReminderRequest, ReminderSink, derive_reminders};
use crate::remote::RemoteClient;

/// The outcome of one `analyze` call: the result plus the reminder
/// requests derived from its action items.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub result: AnalysisResult,
    pub reminders: Vec<ReminderRequest>,
}

/// Which tier the selection policy picked for this call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Local,
    Remote,
    Mock,
}

/// Tiered analysis front door.
///
/// Selection precedence is fixed: Local when enabled (terminal, no
/// failure mode), else Remote when enabled with a credential, else Mock.
/// Every remote error falls back down the chain, never up, so `analyze`
/// cannot fail.
pub struct Orchestrator {
    remote: RemoteClient,
    reminder_sink: Option<Arc<dyn ReminderSink>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            remote: RemoteClient::new(),
            reminder_sink: None,
        }
    }

    /// Attach a destination for reminder hand-offs.
    pub fn with_reminder_sink(mut self, sink: Arc<dyn ReminderSink>) -> Self {
        self.reminder_sink = Some(sink);
        self
    }

    /// Analyze a transcript. Never fails; the worst case is a Mock result.
    ///
    /// `duration_hint_ms` may be 0 when the audio duration is unknown.
    pub async fn analyze(
        &self,
        transcript: &str,
        duration_hint_ms: i64,
        config: &AnalysisConfig,
    ) -> Analysis {
        let result = match select_tier(config) {
            Selection::Local => {
                info!("running local analysis tier");
                analyze_local(transcript, duration_hint_ms).result
            }
            Selection::Remote => {
                info!(provider = ?config.remote_provider, "running remote analysis tier");
                let attempt = self
                    .remote
                    .analyze(
                        transcript,
                        duration_hint_ms,
                        config.remote_provider,
                        config.credential.as_deref().unwrap_or_default(),
                        config.request_timeout,
                    )
                    .await;

                match attempt {
                    Ok(result) => result,
                    Err(error) => {
                        warn!(%error, "remote tier failed, falling back");
                        fallback_result(transcript, duration_hint_ms, config)
                    }
                }
            }
            Selection::Mock => {
                info!("no analysis tier configured, returning mock result");
                mock_result(transcript, duration_hint_ms)
            }
        };

        let reminders = derive_reminders(&result.action_items);
        self.hand_off_reminders(&reminders);

        Analysis { result, reminders }
    }

    /// Fire-and-forget delivery to the notification collaborator. The
    /// caller is never blocked on delivery and failures stay inside the
    /// sink.
    fn hand_off_reminders(&self, reminders: &[ReminderRequest]) {
        let Some(sink) = &self.reminder_sink else {
            return;
        };
        if reminders.is_empty() {
            return;
        }

        let sink = Arc::clone(sink);
        let batch = reminders.to_vec();
        tokio::spawn(async move {
            for request in &batch {
                sink.deliver(request);
            }
        });
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed selection precedence, evaluated once per call.
///
/// A remote configuration without a credential means the remote tier is
/// unavailable, not an error; no network call is attempted.
fn select_tier(config: &AnalysisConfig) -> Selection {
    if config.local_enabled {
        Selection::Local
    } else if config.remote_available() {
        Selection::Remote
    } else {
        Selection::Mock
    }
}

/// Where a failed remote attempt lands: Local when enabled, else Mock.
fn fallback_result(transcript: &str, duration_hint_ms: i64, config: &AnalysisConfig) -> AnalysisResult {
    if config.local_enabled {
        analyze_local(transcript, duration_hint_ms).result
    } else {
        mock_result(transcript, duration_hint_ms)
    }
}

/// Static exemplar result for when no real tier is configured or
/// reachable. Title and speaking patterns still reflect the caller's
/// transcript; everything else is fixed. Cannot fail.
fn mock_result(transcript: &str, duration_hint_ms: i64) -> AnalysisResult {
    AnalysisResult {
        title: generate_title(transcript),
        summary: "This is a mock AI-generated summary of the voice recording. The speaker \
                  discussed various topics including project updates, meeting schedules, and \
                  action items."
            .to_string(),
        keywords: vec![
            "project".to_string(),
            "meeting".to_string(),
            "deadline".to_string(),
            "client".to_string(),
            "team".to_string(),
            "documentation".to_string(),
        ],
        action_items: vec![
            ActionItem::new(
                "Follow up with team about project deadline",
                Priority::Medium,
                "Work",
            ),
            ActionItem::new(
                "Schedule meeting with client for next week",
                Priority::Medium,
                "Work",
            ),
            ActionItem::new(
                "Review and update project documentation",
                Priority::Low,
                "Work",
            ),
        ],
        sentiment: "neutral".to_string(),
        topics: vec![
            "Project Management".to_string(),
            "Team Coordination".to_string(),
            "Client Relations".to_string(),
        ],
        insights: "The recording shows good organizational planning with clear action items \
                   and follow-up tasks."
            .to_string(),
        speaking_patterns: Some(analyze_speaking_patterns(transcript, duration_hint_ms)),
        source_tier: SourceTier::Mock,
    }
}
