use serde_json::Value;

use crate::analysis::{analyze_speaking_patterns, category_for_text, generate_title, priority_for_text};
use crate::models::{ActionItem, AnalysisResult, ProviderError, SourceTier};

/// The parsed fields of a provider's analysis document.
///
/// Missing fields default rather than failing the call; only a response
/// with no parseable JSON document at all is malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderAnalysis {
    pub summary: String,
    pub action_items: Vec<String>,
    pub keywords: Vec<String>,
    pub sentiment: String,
    pub topics: Vec<String>,
    pub insights: String,
}

/// Extract and parse the JSON document embedded in a provider reply.
///
/// Providers sometimes wrap the document in prose; the substring between
/// the first `{` and the last `}` is what gets parsed.
pub fn parse_provider_reply(content: &str) -> Result<ProviderAnalysis, ProviderError> {
    let start = content.find('{');
    let end = content.rfind('}');

    let document = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => {
            return Err(ProviderError::Malformed(
                "no JSON object in response".to_string(),
            ));
        }
    };

    let value: Value = serde_json::from_str(document)
        .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;

    Ok(ProviderAnalysis {
        summary: string_field(&value, "summary", "Summary not available"),
        action_items: string_list(&value, "action_items"),
        keywords: string_list(&value, "keywords"),
        sentiment: string_field(&value, "sentiment", "neutral"),
        topics: string_list(&value, "topics"),
        insights: string_field(&value, "insights", ""),
    })
}

/// Map a parsed provider document into the common result shape.
///
/// Title and speaking patterns are always computed locally; remote
/// action-item strings get priority and category from their own text.
/// The keyword and action-item caps are enforced here.
pub fn into_result(
    analysis: ProviderAnalysis,
    transcript: &str,
    duration_ms: i64,
) -> AnalysisResult {
    let action_items: Vec<ActionItem> = analysis
        .action_items
        .into_iter()
        .map(|task| {
            let priority = priority_for_text(&task);
            let category = category_for_text(&task);
            ActionItem::new(task, priority, category)
        })
        .collect();

    let mut keywords = Vec::new();
    for keyword in analysis.keywords {
        if !keywords
            .iter()
            .any(|existing: &String| existing.eq_ignore_ascii_case(&keyword))
        {
            keywords.push(keyword);
        }
    }
    if keywords.is_empty() {
        keywords.push("Voice note".to_string());
    }

    let topics = if analysis.topics.is_empty() {
        vec!["General".to_string()]
    } else {
        analysis.topics
    };

    let mut result = AnalysisResult {
        title: generate_title(transcript),
        summary: analysis.summary,
        keywords,
        action_items,
        sentiment: analysis.sentiment,
        topics,
        insights: analysis.insights,
        speaking_patterns: Some(analyze_speaking_patterns(transcript, duration_ms)),
        source_tier: SourceTier::Remote,
    };
    result.truncate_to_caps();
    result
}

fn string_field(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
