use chrono::{DateTime, Local};

use crate::lexicon;

/// How note names are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPattern {
    /// Detect the content type and name accordingly
    Smart,
    /// Date and time only
    DateTime,
    /// "Prefix 001" style
    Sequential,
}

/// Naming preferences.
#[derive(Debug, Clone)]
pub struct NamingConfig {
    pub pattern: NamingPattern,
    pub include_date: bool,
    pub include_time: bool,
    pub date_format: String,
    pub time_format: String,
    pub sequential_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            pattern: NamingPattern::Smart,
            include_date: true,
            include_time: true,
            date_format: "%b %d, %Y".to_string(),
            time_format: "%H:%M".to_string(),
            sequential_prefix: "Recording".to_string(),
        }
    }
}

/// Generate a display name for a note.
///
/// `now` is a parameter so callers control the clock and the function
/// stays deterministic.
pub fn generate_note_name(
    transcript: &str,
    note_number: u32,
    now: DateTime<Local>,
    config: &NamingConfig,
) -> String {
    match config.pattern {
        NamingPattern::Smart => smart_name(transcript, now, config),
        NamingPattern::DateTime => date_time_name(now, config),
        NamingPattern::Sequential => {
            format!("{} {:03}", config.sequential_prefix, note_number)
        }
    }
}

fn smart_name(transcript: &str, now: DateTime<Local>, config: &NamingConfig) -> String {
    if transcript.trim().is_empty() {
        return date_time_name(now, config);
    }

    let lower = transcript.to_lowercase();
    let short_date = now.format("%b %d");
    let time = now.format(&config.time_format);

    if lower.contains("meeting") || lower.contains("call") {
        let participants = extract_participants(transcript);
        return if participants.is_empty() {
            format!("Meeting - {short_date}")
        } else {
            format!("Meeting with {participants} - {short_date}")
        };
    }
    if lower.contains("idea") || lower.contains("brainstorm") {
        return format!("Ideas - {time}");
    }
    if lower.contains("task") || lower.contains("todo") || lower.contains("need to") {
        return format!("Tasks - {short_date}");
    }
    if lower.contains("project") {
        return match extract_project_name(transcript) {
            Some(name) => format!("Project: {name}"),
            None => format!("Project Discussion - {short_date}"),
        };
    }
    if lower.contains("today")
        || lower.contains("yesterday")
        || lower.contains("feeling")
        || lower.contains("personal")
    {
        return format!("Personal Note - {short_date}");
    }
    if lower.contains("buy") || lower.contains("shopping") || lower.contains("grocery") {
        return format!("Shopping List - {short_date}");
    }

    let topic = extract_key_topic(transcript);
    if topic.is_empty() {
        date_time_name(now, config)
    } else {
        format!("{topic} - {time}")
    }
}

fn date_time_name(now: DateTime<Local>, config: &NamingConfig) -> String {
    let mut parts = Vec::new();
    if config.include_date {
        parts.push(now.format(&config.date_format).to_string());
    }
    if config.include_time {
        parts.push(now.format(&config.time_format).to_string());
    }

    if parts.is_empty() {
        "Voice Recording".to_string()
    } else {
        format!("Recording {}", parts.join(" "))
    }
}

/// Capitalized words following "with" or "and", at most two.
fn extract_participants(transcript: &str) -> String {
    let words: Vec<&str> = transcript.split_whitespace().collect();
    let mut participants = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let connector = word.to_lowercase();
        if (connector == "with" || connector == "and") && i + 1 < words.len() {
            let next = words[i + 1].trim_matches(['.', ',', '!', '?']);
            if next.len() > 2 && next.starts_with(|c: char| c.is_uppercase()) {
                participants.push(next.to_string());
            }
        }
    }

    participants.truncate(2);
    participants.join(" & ")
}

/// The word following "project", capitalized.
fn extract_project_name(transcript: &str) -> Option<String> {
    let words: Vec<&str> = transcript.split_whitespace().collect();

    for (i, word) in words.iter().enumerate() {
        if word.to_lowercase() == "project" && i + 1 < words.len() {
            let next = words[i + 1].trim_matches(['.', ',', '!', '?']);
            if next.len() > 2 {
                let mut chars = next.chars();
                let capitalized = chars
                    .next()
                    .map(|c| c.to_uppercase().collect::<String>() + chars.as_str())?;
                return Some(capitalized);
            }
        }
    }

    None
}

/// First few meaningful words, capped to a short label.
fn extract_key_topic(transcript: &str) -> String {
    let topic: Vec<&str> = transcript
        .split_whitespace()
        .filter(|word| {
            word.len() > 3 && !lexicon::STOP_WORDS.contains(&word.to_lowercase().as_str())
        })
        .take(3)
        .collect();

    topic.join(" ").chars().take(30).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_meeting_name_with_participants() {
        let name = generate_note_name(
            "Meeting with Sarah and David about the roadmap",
            1,
            fixed_now(),
            &NamingConfig::default(),
        );
        assert_eq!(name, "Meeting with Sarah & David - Mar 14");
    }

    #[test]
    fn test_project_name_extraction() {
        let name = generate_note_name(
            "Notes on project atlas and its milestones",
            1,
            fixed_now(),
            &NamingConfig::default(),
        );
        assert_eq!(name, "Project: Atlas");
    }

    #[test]
    fn test_shopping_detection() {
        let name = generate_note_name(
            "Remember to buy bread and eggs",
            1,
            fixed_now(),
            &NamingConfig::default(),
        );
        assert_eq!(name, "Shopping List - Mar 14");
    }

    #[test]
    fn test_blank_transcript_uses_date_time() {
        let name = generate_note_name("", 1, fixed_now(), &NamingConfig::default());
        assert_eq!(name, "Recording Mar 14, 2024 09:30");
    }

    #[test]
    fn test_sequential_pattern_pads() {
        let config = NamingConfig {
            pattern: NamingPattern::Sequential,
            ..NamingConfig::default()
        };
        assert_eq!(generate_note_name("", 7, fixed_now(), &config), "Recording 007");
    }

    #[test]
    fn test_date_time_pattern_respects_flags() {
        let config = NamingConfig {
            pattern: NamingPattern::DateTime,
            include_time: false,
            ..NamingConfig::default()
        };
        assert_eq!(
            generate_note_name("anything", 1, fixed_now(), &config),
            "Recording Mar 14, 2024"
        );
    }
}
