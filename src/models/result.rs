use serde::{Deserialize, Serialize};

/// Which backend actually produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTier {
    /// Rule-based analysis, no network
    Local,
    /// Cloud text-understanding provider
    Remote,
    /// Static placeholder when no real tier is configured or reachable
    Mock,
}

/// Priority assigned to an extracted action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A task extracted from the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// The task text, taken from the original-case transcript
    pub task: String,
    /// Assigned priority
    pub priority: Priority,
    /// Category label (Work, Personal, Health, Shopping, General, ...)
    pub category: String,
    /// Due date if one was mentioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl ActionItem {
    pub fn new(task: impl Into<String>, priority: Priority, category: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            priority,
            category: category.into(),
            due_date: None,
        }
    }
}

/// Speech-delivery metrics derived from the transcript and a duration hint.
///
/// Pause figures are an approximation from sentence structure, not a
/// measurement of audio silence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakingPatterns {
    /// Words per minute, 0 when the duration is unknown
    pub words_per_minute: u32,
    /// Estimated pauses (sentence boundaries)
    pub pause_count: u32,
    /// Estimated average pause length in milliseconds
    pub average_pause_ms: f64,
    /// Total speaking time in milliseconds
    pub total_speaking_time_ms: i64,
    /// Delivery confidence label derived from the pace
    pub confidence_label: String,
}

/// Structured analysis of one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short display title
    pub title: String,
    /// Extractive summary
    pub summary: String,
    /// Ranked keywords, deduplicated, at most 8, never empty
    pub keywords: Vec<String>,
    /// Extracted tasks, at most 3
    pub action_items: Vec<ActionItem>,
    /// Overall sentiment: "positive", "negative", or "neutral"
    pub sentiment: String,
    /// Matched topic categories, never empty
    pub topics: Vec<String>,
    /// Free-form observations (remote tiers only; empty otherwise)
    #[serde(default)]
    pub insights: String,
    /// Delivery metrics, present when a transcript was analyzed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaking_patterns: Option<SpeakingPatterns>,
    /// Which tier produced this result
    pub source_tier: SourceTier,
}

impl AnalysisResult {
    /// Maximum keywords retained per analysis.
    pub const MAX_KEYWORDS: usize = 8;
    /// Maximum action items retained per analysis.
    pub const MAX_ACTION_ITEMS: usize = 3;

    /// Enforce the keyword and action-item caps in place.
    pub fn truncate_to_caps(&mut self) {
        self.keywords.truncate(Self::MAX_KEYWORDS);
        self.action_items.truncate(Self::MAX_ACTION_ITEMS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = AnalysisResult {
            title: "Meeting Notes".to_string(),
            summary: "Discussed the launch.".to_string(),
            keywords: vec!["meeting".to_string(), "launch".to_string()],
            action_items: vec![ActionItem::new("call John", Priority::High, "Work")],
            sentiment: "neutral".to_string(),
            topics: vec!["Work".to_string()],
            insights: String::new(),
            speaking_patterns: None,
            source_tier: SourceTier::Local,
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
        assert_eq!(parsed.source_tier, SourceTier::Local);
    }

    #[test]
    fn test_truncate_to_caps() {
        let mut result = AnalysisResult {
            title: String::new(),
            summary: String::new(),
            keywords: (0..12).map(|i| format!("k{i}")).collect(),
            action_items: (0..5)
                .map(|i| ActionItem::new(format!("t{i}"), Priority::Low, "General"))
                .collect(),
            sentiment: "neutral".to_string(),
            topics: vec!["General".to_string()],
            insights: String::new(),
            speaking_patterns: None,
            source_tier: SourceTier::Mock,
        };

        result.truncate_to_caps();
        assert_eq!(result.keywords.len(), AnalysisResult::MAX_KEYWORDS);
        assert_eq!(result.action_items.len(), AnalysisResult::MAX_ACTION_ITEMS);
    }
}
