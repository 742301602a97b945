use crate::lexicon;
use crate::models::{ActionItem, Priority};

/// Characters of context captured before a trigger match.
const CONTEXT_BEFORE: usize = 20;
/// Characters of context captured after the end of a trigger match.
const CONTEXT_AFTER: usize = 40;

/// Extract up to 3 action items from a transcript.
///
/// Triggers are evaluated in the order declared in the lexicon, hardest
/// first, so truncation keeps the highest-priority items. The task text is
/// a context window around the first occurrence of each trigger, taken
/// from the original-case transcript. Always terminates with a list, even
/// for empty or punctuation-only input.
pub fn extract_action_items(transcript: &str) -> Vec<ActionItem> {
    let lower = transcript.to_lowercase();
    let category = categorize_transcript(&lower);

    let mut items: Vec<ActionItem> = Vec::new();
    for &(trigger, priority) in lexicon::ACTION_TRIGGERS {
        if let Some(index) = find_ignore_ascii_case(transcript, trigger) {
            let task = context_window(transcript, index, trigger.len());
            items.push(ActionItem::new(task, priority, category));
        }
    }

    if items.is_empty() {
        if let Some(fallback) = fallback_item(&lower) {
            items.push(fallback);
        }
    }

    items.truncate(3);
    items
}

/// Priority for an action item produced by a remote provider, inferred
/// from the item's own text.
pub fn priority_for_text(task: &str) -> Priority {
    let lower = task.to_lowercase();
    if lower.contains("urgent") || lower.contains("asap") {
        Priority::Urgent
    } else if lower.contains("important") || lower.contains("must") {
        Priority::High
    } else if lower.contains("should") || lower.contains("need") {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Category for an action item produced by a remote provider, inferred
/// from the item's own text via the shared cue table.
pub fn category_for_text(task: &str) -> &'static str {
    categorize_transcript(&task.to_lowercase())
}

/// First category whose cue appears in the lowercased text; "General"
/// otherwise.
fn categorize_transcript(lower: &str) -> &'static str {
    lexicon::CATEGORY_CUES
        .iter()
        .find(|(_, cues)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(category, _)| *category)
        .unwrap_or("General")
}

/// Coarse content cues used when no trigger matched.
fn fallback_item(lower: &str) -> Option<ActionItem> {
    if lower.contains("meeting") {
        Some(ActionItem::new(
            "Follow up on meeting discussion",
            Priority::Medium,
            "Work",
        ))
    } else if lower.contains("idea") {
        Some(ActionItem::new(
            "Develop the ideas mentioned",
            Priority::Low,
            "Ideas",
        ))
    } else if lower.contains("project") {
        Some(ActionItem::new(
            "Continue project work",
            Priority::Medium,
            "Work",
        ))
    } else {
        None
    }
}

/// Byte index of the first case-insensitive occurrence of `needle`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Slice a trimmed context window around a match, clamped to the string
/// bounds and to char boundaries.
fn context_window(transcript: &str, match_start: usize, trigger_len: usize) -> String {
    let start = floor_boundary(transcript, match_start.saturating_sub(CONTEXT_BEFORE));
    let end = ceil_boundary(
        transcript,
        (match_start + trigger_len + CONTEXT_AFTER).min(transcript.len()),
    );
    transcript[start..end].trim().to_string()
}

fn floor_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_transcript_priorities() {
        let transcript =
            "I need to call John about the meeting tomorrow and don't forget to buy milk.";
        let items = extract_action_items(transcript);

        assert!(items.len() <= 3);
        assert!(items.iter().any(|i| i.priority == Priority::High));
        assert!(items.iter().any(|i| i.priority == Priority::Medium));
        // Hardest trigger ("don't forget") is evaluated first.
        assert_eq!(items[0].priority, Priority::High);
        assert!(items[0].task.contains("forget"));
    }

    #[test]
    fn test_context_window_clamps_to_bounds() {
        let items = extract_action_items("must go");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "must go");
        assert_eq!(items[0].priority, Priority::High);
    }

    #[test]
    fn test_context_window_shape() {
        let transcript = "A very long preamble sentence goes here and then I must finish the \
                          quarterly report before Thursday evening at the office";
        let items = extract_action_items(transcript);
        let task = &items[0].task;
        assert!(task.contains("must finish the quarterly report"));
        // 20 before + trigger + 40 after keeps the window tight.
        assert!(task.len() <= "must".len() + 20 + 40);
    }

    #[test]
    fn test_empty_and_punctuation_only_terminate() {
        assert!(extract_action_items("").is_empty());
        assert!(extract_action_items("...!?").is_empty());
    }

    #[test]
    fn test_fallback_synthesizes_single_generic_item() {
        let items = extract_action_items("Great brainstorm, one idea stood out");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "Develop the ideas mentioned");
        assert_eq!(items[0].priority, Priority::Low);
        assert_eq!(items[0].category, "Ideas");
    }

    #[test]
    fn test_category_from_whole_transcript() {
        let items = extract_action_items("I have to buy bread for the week");
        assert_eq!(items[0].category, "Shopping");
    }

    #[test]
    fn test_urgent_survives_truncation() {
        // More than three triggers match; urgent must still be retained.
        let transcript = "This is urgent, we must call the client, schedule a review, \
                          and email the team about the meeting";
        let items = extract_action_items(transcript);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].priority, Priority::Urgent);
    }

    #[test]
    fn test_multibyte_context_does_not_panic() {
        let transcript = "Café noté — don't forget the crème brûlée order";
        let items = extract_action_items(transcript);
        assert!(items[0].task.contains("forget"));
    }

    #[test]
    fn test_priority_for_text() {
        assert_eq!(priority_for_text("Reply ASAP to vendor"), Priority::Urgent);
        assert_eq!(priority_for_text("This is important"), Priority::High);
        assert_eq!(priority_for_text("We should regroup"), Priority::Medium);
        assert_eq!(priority_for_text("Water the plants"), Priority::Low);
    }

    #[test]
    fn test_category_for_text() {
        assert_eq!(category_for_text("Email the office manager"), "Work");
        assert_eq!(category_for_text("Buy new running shoes"), "Shopping");
        assert_eq!(category_for_text("Water the plants"), "General");
    }
}
