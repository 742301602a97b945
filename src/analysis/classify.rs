use crate::analysis::normalize::tokens;
use crate::lexicon;

/// Classify overall sentiment by counting lexicon membership.
///
/// Ties, including the zero-zero case, resolve to "neutral".
pub fn classify_sentiment(transcript: &str) -> &'static str {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in tokens(transcript) {
        if lexicon::POSITIVE_WORDS.contains(&token.as_str()) {
            positive += 1;
        } else if lexicon::NEGATIVE_WORDS.contains(&token.as_str()) {
            negative += 1;
        }
    }

    if positive > negative {
        "positive"
    } else if negative > positive {
        "negative"
    } else {
        "neutral"
    }
}

/// Classify topics by overlap between extracted keywords and the fixed
/// category sets. Any category with at least one overlap is included;
/// no match at all yields ["General"].
pub fn classify_topics(keywords: &[String]) -> Vec<String> {
    let topics: Vec<String> = lexicon::TOPIC_CATEGORIES
        .iter()
        .filter(|(_, members)| {
            keywords
                .iter()
                .any(|keyword| members.contains(&keyword.to_lowercase().as_str()))
        })
        .map(|(topic, _)| topic.to_string())
        .collect();

    if topics.is_empty() {
        vec!["General".to_string()]
    } else {
        topics
    }
}
