pub mod actions;
pub mod classify;
pub mod entities;
pub mod keywords;
pub mod naming;
pub mod normalize;
pub mod speaking;
pub mod summarize;

pub use actions::*;
pub use classify::*;
pub use entities::*;
pub use keywords::*;
pub use naming::*;
pub use normalize::*;
pub use speaking::*;
pub use summarize::*;

use crate::models::{AnalysisResult, SourceTier, SummaryConfig};

/// Rule-based analysis of one transcript, with the extras the local tier
/// can produce beyond the common result shape.
#[derive(Debug, Clone)]
pub struct LocalAnalysis {
    /// The common result, tagged `SourceTier::Local`
    pub result: AnalysisResult,
    /// Named entities found by the heuristics
    pub entities: ExtractedEntities,
    /// Sentences after normalization
    pub sentences: Vec<String>,
    /// Filtered token count
    pub word_count: usize,
    /// Estimated reading time in minutes, at least 1
    pub reading_time_min: u32,
}

/// Run the full rule-based pipeline.
///
/// Pure function of its inputs: no I/O, no clock, no failure mode.
/// Calling it twice with the same arguments yields identical results.
pub fn analyze_local(transcript: &str, duration_ms: i64) -> LocalAnalysis {
    analyze_local_with(transcript, duration_ms, &SummaryConfig::default())
}

/// [`analyze_local`] with explicit summary tunables.
pub fn analyze_local_with(
    transcript: &str,
    duration_ms: i64,
    summary_config: &SummaryConfig,
) -> LocalAnalysis {
    let sentences = normalize::sentences(transcript);
    let token_count = normalize::tokens(transcript).len();

    let keywords = extract_keywords(transcript);
    let action_items = extract_action_items(transcript);
    let sentiment = classify_sentiment(transcript).to_string();
    let topics = classify_topics(&keywords);
    let summary = summarize(transcript, &keywords, SummaryMode::Standard, summary_config);
    let title = generate_title(transcript);
    let speaking_patterns = analyze_speaking_patterns(transcript, duration_ms);
    let entities = extract_entities(transcript);

    let result = AnalysisResult {
        title,
        summary,
        keywords,
        action_items,
        sentiment,
        topics,
        insights: String::new(),
        speaking_patterns: Some(speaking_patterns),
        source_tier: SourceTier::Local,
    };

    LocalAnalysis {
        result,
        entities,
        sentences,
        word_count: token_count,
        reading_time_min: reading_time_minutes(token_count),
    }
}

/// Reading time at an assumed 200 words per minute, never below 1 minute.
fn reading_time_minutes(word_count: usize) -> u32 {
    ((word_count / 200) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    const REFERENCE: &str =
        "I need to call John about the meeting tomorrow and don't forget to buy milk.";

    #[test]
    fn test_reference_transcript_end_to_end() {
        let analysis = analyze_local(REFERENCE, 15_000);
        let result = &analysis.result;

        assert_eq!(result.source_tier, SourceTier::Local);
        assert!(result.keywords.contains(&"call".to_string()));
        assert!(result.keywords.contains(&"meeting".to_string()));
        assert!(result.keywords.contains(&"buy".to_string()));
        assert!(result.action_items.iter().any(|i| i.priority == Priority::High));
        assert!(result.action_items.iter().any(|i| i.priority == Priority::Medium));
        assert!(result.topics.contains(&"Work".to_string()));
        assert!(result.speaking_patterns.is_some());
    }

    #[test]
    fn test_empty_transcript_degrades_cleanly() {
        let analysis = analyze_local("", 0);
        let result = &analysis.result;

        assert_eq!(result.keywords, vec!["Voice note"]);
        assert!(result.action_items.is_empty());
        assert_eq!(result.summary, "No content to summarize");
        assert_eq!(result.sentiment, "neutral");
        assert_eq!(result.topics, vec!["General"]);

        let patterns = result.speaking_patterns.as_ref().unwrap();
        assert_eq!(patterns.words_per_minute, 0);
        assert_eq!(patterns.confidence_label, "Low (Slow/hesitant)");
    }

    #[test]
    fn test_local_tier_is_idempotent() {
        let first = analyze_local(REFERENCE, 42_000);
        let second = analyze_local(REFERENCE, 42_000);
        assert_eq!(first.result, second.result);

        let a = serde_json::to_vec(&first.result).unwrap();
        let b = serde_json::to_vec(&second.result).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyword_and_action_caps_hold() {
        let busy = "Urgent meeting about the project deadline. Must call the client, \
                    email the team, schedule a review, buy coffee, visit the bank, \
                    finish the report, and prepare the deck before Friday.";
        let analysis = analyze_local(busy, 120_000);

        assert!(!analysis.result.keywords.is_empty());
        assert!(analysis.result.keywords.len() <= 8);
        assert!(analysis.result.action_items.len() <= 3);
    }

    #[test]
    fn test_reading_time_floor() {
        let analysis = analyze_local("just a few words here", 0);
        assert_eq!(analysis.reading_time_min, 1);
    }
}
