use crate::analysis::normalize::{raw_words, sentences};
use crate::models::SpeakingPatterns;

/// Derive delivery metrics from the transcript and a duration hint.
///
/// Word counting here is raw whitespace splitting, not the filtered token
/// stream, because pace counts every spoken word. Pause figures estimate
/// from sentence boundaries; they are not audio measurements. A duration
/// of 0 means unknown and yields 0 words per minute.
pub fn analyze_speaking_patterns(transcript: &str, duration_ms: i64) -> SpeakingPatterns {
    let word_count = raw_words(transcript).len();
    let sentence_count = sentences(transcript).len();

    let duration_minutes = duration_ms as f64 / 60_000.0;
    let words_per_minute = if duration_minutes > 0.0 {
        (word_count as f64 / duration_minutes).round() as u32
    } else {
        0
    };

    let pause_count = sentence_count.saturating_sub(1) as u32;
    let average_pause_ms = if pause_count > 0 {
        duration_ms as f64 * 0.1 / pause_count as f64
    } else {
        0.0
    };

    SpeakingPatterns {
        words_per_minute,
        pause_count,
        average_pause_ms,
        total_speaking_time_ms: duration_ms.max(0),
        confidence_label: confidence_label(words_per_minute).to_string(),
    }
}

/// Four-bucket step function over the speaking pace.
fn confidence_label(words_per_minute: u32) -> &'static str {
    if words_per_minute > 180 {
        "High (Fast speaker)"
    } else if words_per_minute > 120 {
        "Medium (Normal pace)"
    } else if words_per_minute > 80 {
        "Medium (Thoughtful pace)"
    } else {
        "Low (Slow/hesitant)"
    }
}
