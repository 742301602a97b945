use std::collections::HashMap;

use crate::analysis::entities::proper_noun_candidates;
use crate::analysis::normalize::tokens;
use crate::lexicon;

/// Placeholder emitted when no strategy finds anything; extraction never
/// returns an empty list.
pub const FALLBACK_KEYWORD: &str = "Voice note";

/// Extract up to 8 keywords from a transcript.
///
/// Four strategies run independently and merge in order (contextual,
/// action, entity, frequency), each capped, with case-insensitive
/// deduplication. The merge order is the ranking; no re-sorting happens
/// afterwards.
pub fn extract_keywords(transcript: &str) -> Vec<String> {
    let lower = transcript.to_lowercase();

    let mut merged: Vec<String> = Vec::new();
    extend_deduped(&mut merged, contextual_keywords(&lower), 3);
    extend_deduped(&mut merged, action_keywords(&lower), 2);
    extend_deduped(&mut merged, entity_keywords(transcript, &lower), 3);

    // Frequency only fills in when the targeted strategies left room.
    let remaining = 5usize.saturating_sub(merged.len());
    extend_deduped(&mut merged, frequency_keywords(transcript), remaining);

    merged.truncate(8);
    if merged.is_empty() {
        merged.push(FALLBACK_KEYWORD.to_string());
    }
    merged
}

/// Strategy 1: canonical keywords activated by trigger substrings.
fn contextual_keywords(lower: &str) -> Vec<String> {
    table_matches(lower, lexicon::CONTEXTUAL_KEYWORDS)
}

/// Strategy 2: canonical action verbs activated by trigger phrases.
fn action_keywords(lower: &str) -> Vec<String> {
    table_matches(lower, lexicon::ACTION_KEYWORDS)
}

/// Strategy 3: gazetteer hits plus proper-noun-like capitalized tokens.
fn entity_keywords(transcript: &str, lower: &str) -> Vec<String> {
    let mut found: Vec<String> = lexicon::GAZETTEER
        .iter()
        .filter(|entity| lower.contains(*entity))
        .map(|entity| entity.to_string())
        .collect();
    found.extend(proper_noun_candidates(transcript));
    found
}

/// Strategy 4: token frequency over meaningful words, descending count
/// with ties broken by first occurrence.
fn frequency_keywords(transcript: &str) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, token) in tokens(transcript).into_iter().enumerate() {
        if token.len() <= 3
            || lexicon::STOP_WORDS.contains(&token.as_str())
            || lexicon::COMMON_WORDS.contains(&token.as_str())
        {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    ranked.into_iter().map(|(token, _)| token).collect()
}

fn table_matches(lower: &str, table: &[(&str, &[&str])]) -> Vec<String> {
    table
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|trigger| lower.contains(trigger)))
        .map(|(canonical, _)| canonical.to_string())
        .collect()
}

/// Append candidates to the merge, skipping case-insensitive duplicates,
/// taking at most `cap` new entries.
fn extend_deduped(merged: &mut Vec<String>, candidates: Vec<String>, cap: usize) {
    let mut taken = 0;
    for candidate in candidates {
        if taken == cap {
            break;
        }
        let duplicate = merged
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&candidate));
        if !duplicate {
            merged.push(candidate);
            taken += 1;
        }
    }
}
