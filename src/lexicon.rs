//! Fixed word tables shared by every extraction and classification strategy.
//!
//! All rule tables live here so the strategies read one source of truth.
//! Bump [`VERSION`] whenever a table changes; results produced by different
//! lexicon versions are not comparable.

use crate::models::Priority;

/// Lexicon revision. Recorded so cached analyses can be invalidated when
/// the tables change.
pub const VERSION: u32 = 1;

/// Stop words excluded from keyword frequency counts.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their", "am",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "shall",
];

/// Words too generic to be useful keywords even though they are not stop words.
pub const COMMON_WORDS: &[&str] = &[
    "said", "says", "going", "really", "think", "know", "like", "just", "want", "need", "make",
    "take", "come", "good", "great", "nice", "thing", "things", "stuff", "something", "anything",
    "everything",
];

/// Contextual keywords: (canonical keyword, trigger substrings).
///
/// Evaluated in declared order against the lowercased transcript; each
/// canonical keyword is emitted at most once.
pub const CONTEXTUAL_KEYWORDS: &[(&str, &[&str])] = &[
    ("meeting", &["meeting", "conference", "call"]),
    ("project", &["project", "deadline"]),
    ("team", &["team"]),
    ("shopping", &["shopping", "buy", "groceries"]),
    ("appointment", &["appointment", "doctor", "dentist"]),
    ("today", &["today"]),
    ("tomorrow", &["tomorrow"]),
    ("weekend", &["weekend"]),
];

/// Action verbs: (canonical verb, trigger phrases).
pub const ACTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("call", &["call", "phone", "ring"]),
    ("email", &["email", "send", "message"]),
    ("buy", &["buy", "purchase", "get"]),
    ("schedule", &["schedule", "book", "arrange"]),
    ("visit", &["visit", "go to", "stop by"]),
    ("finish", &["finish", "complete", "done"]),
    ("prepare", &["prepare", "get ready", "set up"]),
    ("review", &["review", "check", "look at"]),
];

/// Gazetteer of common names, places, and items matched as substrings.
pub const GAZETTEER: &[&str] = &[
    "john", "sarah", "mike", "lisa", "david", "anna", "chris", "maria", "milk", "bread", "eggs",
    "coffee", "groceries", "medicine", "bank", "store", "office", "home", "hospital", "school",
    "morning", "afternoon", "evening", "lunch", "dinner",
];

/// First names recognized by the person-entity heuristic.
pub const COMMON_FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Mike", "Sarah", "David", "Lisa", "Chris", "Anna", "Mark", "Emma", "Paul",
    "Maria", "James", "Linda", "Robert", "Susan",
];

/// Honorifics that mark the following capitalized word as a person.
pub const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "dr", "prof"];

/// Prepositions that mark the following capitalized word as a location.
pub const LOCATIVE_PREPOSITIONS: &[&str] = &["in", "at", "from", "to"];

/// Corporate suffixes that mark a capitalized word as an organization.
pub const CORPORATE_SUFFIXES: &[&str] = &["Corp", "Inc", "LLC"];

/// Positive sentiment words.
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "happy",
    "pleased", "satisfied", "successful", "positive", "love", "like", "enjoy", "excited",
    "thrilled", "delighted", "perfect", "brilliant",
];

/// Negative sentiment words.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disappointing", "frustrated", "angry", "upset",
    "sad", "worried", "concerned", "problem", "issue", "difficult", "challenging", "failed",
    "wrong", "hate", "dislike",
];

/// Topic categories: (topic name, member keywords).
pub const TOPIC_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Work",
        &["meeting", "project", "deadline", "task", "work", "office", "team", "client", "business"],
    ),
    (
        "Personal",
        &["family", "home", "personal", "friend", "weekend", "vacation", "hobby"],
    ),
    (
        "Health",
        &["doctor", "appointment", "health", "exercise", "medicine", "hospital", "diet"],
    ),
    (
        "Finance",
        &["money", "budget", "cost", "price", "payment", "bank", "investment", "expense"],
    ),
    (
        "Technology",
        &["app", "software", "computer", "phone", "internet", "website", "digital", "tech"],
    ),
    (
        "Education",
        &["learn", "study", "course", "school", "university", "training", "education"],
    ),
];

/// Action-item triggers: (trigger phrase, priority), evaluated in declared
/// order against the lowercased transcript.
///
/// The hardest triggers come first so that truncating the extracted list
/// keeps the highest-priority items.
pub const ACTION_TRIGGERS: &[(&str, Priority)] = &[
    ("urgent", Priority::Urgent),
    ("asap", Priority::Urgent),
    ("must", Priority::High),
    ("have to", Priority::High),
    ("don't forget", Priority::High),
    ("deadline", Priority::High),
    ("due", Priority::High),
    ("need to", Priority::Medium),
    ("should", Priority::Medium),
    ("remember to", Priority::Medium),
    ("schedule", Priority::Medium),
    ("call", Priority::Medium),
    ("email", Priority::Medium),
    ("meeting", Priority::Medium),
    ("follow up", Priority::Medium),
];

/// Category cues: (category name, cue substrings), evaluated in order with
/// "General" as the fallback.
pub const CATEGORY_CUES: &[(&str, &[&str])] = &[
    ("Work", &["work", "office", "meeting"]),
    ("Personal", &["personal", "family"]),
    ("Health", &["health", "doctor"]),
    ("Shopping", &["shopping", "buy"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase_where_matched_lowercased() {
        for word in STOP_WORDS.iter().chain(COMMON_WORDS).chain(GAZETTEER) {
            assert_eq!(*word, word.to_lowercase(), "{word} must be lowercase");
        }
        for (canonical, triggers) in CONTEXTUAL_KEYWORDS.iter().chain(ACTION_KEYWORDS) {
            assert_eq!(*canonical, canonical.to_lowercase());
            for trigger in *triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }

    #[test]
    fn test_no_overlap_between_sentiment_sets() {
        for word in POSITIVE_WORDS {
            assert!(!NEGATIVE_WORDS.contains(word), "{word} in both sets");
        }
    }
}
