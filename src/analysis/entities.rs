use serde::Serialize;

use crate::lexicon;

/// Named entities found by the rule-based heuristics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedEntities {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

/// Extract people, organizations, and locations from the transcript.
///
/// Rules, applied to each capitalized word longer than 2 characters:
/// an honorific before it marks a person; a corporate suffix marks an
/// organization; a locative preposition before it marks a location;
/// otherwise it is a person only if it is a known first name.
pub fn extract_entities(transcript: &str) -> ExtractedEntities {
    let words: Vec<&str> = transcript.split_whitespace().collect();

    let mut people = Vec::new();
    let mut organizations = Vec::new();
    let mut locations = Vec::new();

    for (i, raw) in words.iter().enumerate() {
        let word: String = raw.chars().filter(|c| c.is_alphabetic()).collect();
        if word.len() <= 2 || !word.starts_with(|c: char| c.is_uppercase()) {
            continue;
        }

        let context = i
            .checked_sub(1)
            .map(|prev| words[prev].to_lowercase())
            .unwrap_or_default();

        if lexicon::HONORIFICS.contains(&context.trim_end_matches('.')) {
            push_unique(&mut people, word);
        } else if lexicon::CORPORATE_SUFFIXES
            .iter()
            .any(|suffix| word.ends_with(suffix))
        {
            push_unique(&mut organizations, word);
        } else if lexicon::LOCATIVE_PREPOSITIONS.contains(&context.as_str()) {
            push_unique(&mut locations, word);
        } else if lexicon::COMMON_FIRST_NAMES.contains(&word.as_str()) {
            push_unique(&mut people, word);
        }
    }

    ExtractedEntities {
        people,
        organizations,
        locations,
    }
}

/// Capitalized tokens that look like proper nouns: longer than 2
/// characters and not in the stop-word or too-common lists. Order of
/// first occurrence is preserved.
pub fn proper_noun_candidates(transcript: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for raw in transcript.split_whitespace() {
        let word: String = raw.chars().filter(|c| c.is_alphabetic()).collect();
        if word.len() <= 2 || !word.starts_with(|c: char| c.is_uppercase()) {
            continue;
        }
        let lower = word.to_lowercase();
        if lexicon::STOP_WORDS.contains(&lower.as_str())
            || lexicon::COMMON_WORDS.contains(&lower.as_str())
        {
            continue;
        }
        push_unique(&mut candidates, word);
    }

    candidates
}

fn push_unique(list: &mut Vec<String>, word: String) {
    if !list.iter().any(|existing| existing == &word) {
        list.push(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorific_marks_person() {
        let entities = extract_entities("I met Dr. Patel and Mrs Holloway yesterday");
        assert_eq!(entities.people, vec!["Patel", "Holloway"]);
    }

    #[test]
    fn test_corporate_suffix_marks_organization() {
        let entities = extract_entities("The contract with InitechCorp is ready");
        assert_eq!(entities.organizations, vec!["InitechCorp"]);
    }

    #[test]
    fn test_locative_preposition_marks_location() {
        let entities = extract_entities("We flew from Denver to Chicago");
        assert_eq!(entities.locations, vec!["Denver", "Chicago"]);
    }

    #[test]
    fn test_known_first_name_marks_person() {
        let entities = extract_entities("Sarah will review the draft");
        assert_eq!(entities.people, vec!["Sarah"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let entities = extract_entities("John called. John called again.");
        assert_eq!(entities.people, vec!["John"]);
    }

    #[test]
    fn test_proper_noun_candidates_skip_stop_words() {
        // "The" is capitalized but a stop word; "They" likewise
        let candidates = proper_noun_candidates("The report from Acme says They agreed with Marcus");
        assert_eq!(candidates, vec!["Acme", "Marcus"]);
    }
}
