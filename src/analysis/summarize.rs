use crate::analysis::normalize::sentences;
use crate::models::SummaryConfig;

/// Summary returned for blank input.
pub const EMPTY_SUMMARY: &str = "No content to summarize";

/// How a summary should be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Up to two sentences, original order
    Standard,
    /// A single line targeting the configured character cap
    OneLiner,
}

/// Produce an extractive summary of the transcript.
///
/// Scoring uses the top 5 of the supplied keywords. Summaries are composed
/// of original sentences; nothing is paraphrased.
pub fn summarize(
    transcript: &str,
    keywords: &[String],
    mode: SummaryMode,
    config: &SummaryConfig,
) -> String {
    match mode {
        SummaryMode::Standard => summarize_standard(transcript, keywords),
        SummaryMode::OneLiner => summarize_one_liner(transcript, keywords, config),
    }
}

fn summarize_standard(transcript: &str, keywords: &[String]) -> String {
    let sentences = sentences(transcript);
    if sentences.is_empty() {
        return if transcript.trim().is_empty() {
            EMPTY_SUMMARY.to_string()
        } else {
            transcript.to_string()
        };
    }

    let scores: Vec<usize> = sentences
        .iter()
        .map(|sentence| keyword_hits(sentence, keywords))
        .collect();

    if scores.iter().all(|&score| score == 0) {
        return sentences[0].clone();
    }

    // Top two by score, then restored to original order.
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]).then(a.cmp(&b)));
    let mut selected: Vec<usize> = ranked.into_iter().take(2).collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn summarize_one_liner(transcript: &str, keywords: &[String], config: &SummaryConfig) -> String {
    let max = config.one_liner_max_chars;
    let sentences = sentences(transcript);

    if let Some(first) = sentences.first() {
        if first.chars().count() <= max {
            return first.clone();
        }

        // Keyword presence plus a bonus for already fitting the cap.
        let best = sentences
            .iter()
            .enumerate()
            .max_by(|(ai, a), (bi, b)| {
                let score_a = one_liner_score(a, keywords, max);
                let score_b = one_liner_score(b, keywords, max);
                score_a.cmp(&score_b).then(bi.cmp(ai))
            })
            .map(|(_, sentence)| sentence.clone())
            .unwrap_or_default();

        if best.chars().count() <= max {
            return best;
        }
        return truncate_with_ellipsis(&best, max);
    }

    let top: Vec<&str> = keywords.iter().take(3).map(String::as_str).collect();
    if !top.is_empty() {
        return truncate_with_ellipsis(&format!("Note about {}", top.join(", ")), max);
    }

    truncate_with_ellipsis(transcript.trim(), max)
}

/// Title derived from transcript length and coarse content cues.
pub fn generate_title(transcript: &str) -> String {
    let word_count = transcript.split_whitespace().count();
    let lower = transcript.to_lowercase();

    let title = if word_count < 10 {
        "Quick Note"
    } else if word_count < 30 {
        "Voice Memo"
    } else if lower.contains("meeting") {
        "Meeting Notes"
    } else if lower.contains("idea") {
        "Ideas & Thoughts"
    } else if lower.contains("task") {
        "Task Notes"
    } else if lower.contains("reminder") {
        "Reminders"
    } else {
        "Voice Recording"
    };
    title.to_string()
}

fn keyword_hits(sentence: &str, keywords: &[String]) -> usize {
    let lower = sentence.to_lowercase();
    keywords
        .iter()
        .take(5)
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .count()
}

fn one_liner_score(sentence: &str, keywords: &[String], max: usize) -> usize {
    let length_bonus = usize::from(sentence.chars().count() <= max);
    keyword_hits(sentence, keywords) + length_bonus
}

fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let truncated: String = text.chars().take(keep).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_standard_selects_keyword_rich_sentences_in_order() {
        let transcript = "The weather was fine. We planned the project deadline with the team. \
                          Lunch was pleasant. The project review is scheduled for Friday.";
        let keywords = kw(&["project", "deadline", "team", "review"]);
        let summary = summarize(transcript, &keywords, SummaryMode::Standard, &SummaryConfig::default());

        assert_eq!(
            summary,
            "We planned the project deadline with the team The project review is scheduled for Friday"
        );
    }

    #[test]
    fn test_standard_zero_scores_fall_back_to_first_sentence() {
        let transcript = "First thought here. Second thought there.";
        let summary = summarize(transcript, &kw(&["unrelated"]), SummaryMode::Standard, &SummaryConfig::default());
        assert_eq!(summary, "First thought here");
    }

    #[test]
    fn test_standard_blank_input() {
        let config = SummaryConfig::default();
        assert_eq!(summarize("", &[], SummaryMode::Standard, &config), EMPTY_SUMMARY);
        assert_eq!(summarize("   ", &[], SummaryMode::Standard, &config), EMPTY_SUMMARY);
    }

    #[test]
    fn test_standard_sentenceless_input_returns_transcript() {
        let config = SummaryConfig::default();
        assert_eq!(summarize("Ok. No.", &[], SummaryMode::Standard, &config), "Ok. No.");
    }

    #[test]
    fn test_one_liner_prefers_short_first_sentence() {
        let transcript = "Call the vendor today. Then a much longer second sentence follows here.";
        let summary = summarize(transcript, &kw(&["vendor"]), SummaryMode::OneLiner, &SummaryConfig::default());
        assert_eq!(summary, "Call the vendor today");
    }

    #[test]
    fn test_one_liner_truncates_to_cap() {
        let long = "word ".repeat(40);
        let transcript = format!("{long}{long}");
        let config = SummaryConfig::default();
        let summary = summarize(&transcript, &[], SummaryMode::OneLiner, &config);

        assert!(summary.chars().count() <= config.one_liner_max_chars);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_one_liner_cap_is_configurable() {
        let config = SummaryConfig {
            one_liner_max_chars: 20,
        };
        let summary = summarize(
            "This sentence is definitely longer than twenty characters.",
            &[],
            SummaryMode::OneLiner,
            &config,
        );
        assert_eq!(summary.chars().count(), 20);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_one_liner_keyword_fallback_without_sentences() {
        let summary = summarize(
            "",
            &kw(&["meeting", "call", "milk"]),
            SummaryMode::OneLiner,
            &SummaryConfig::default(),
        );
        assert_eq!(summary, "Note about meeting, call, milk");
    }

    #[test]
    fn test_title_buckets() {
        assert_eq!(generate_title("short note"), "Quick Note");
        let medium = "one two three four five six seven eight nine ten eleven twelve";
        assert_eq!(generate_title(medium), "Voice Memo");
        let long = "word ".repeat(30) + "meeting soon";
        assert_eq!(generate_title(&long), "Meeting Notes");
        let plain = "word ".repeat(35);
        assert_eq!(generate_title(&plain), "Voice Recording");
    }
}
