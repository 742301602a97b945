use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AnalysisResult;

/// Write the result as pretty-printed JSON.
pub fn write_result_json(result: &AnalysisResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {path:?}"))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write output file: {path:?}"))?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Render the result as human-readable text.
pub fn render_human(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", result.title));
    out.push_str(&format!("{}\n\n", result.summary));

    out.push_str(&format!("Keywords: {}\n", result.keywords.join(", ")));
    out.push_str(&format!("Sentiment: {}\n", result.sentiment));
    out.push_str(&format!("Topics: {}\n", result.topics.join(", ")));

    if !result.action_items.is_empty() {
        out.push_str("\nAction items:\n");
        for item in &result.action_items {
            out.push_str(&format!(
                "  [{:?}] {} ({})\n",
                item.priority, item.task, item.category
            ));
        }
    }

    if !result.insights.is_empty() {
        out.push_str(&format!("\nInsights: {}\n", result.insights));
    }

    if let Some(patterns) = &result.speaking_patterns {
        out.push_str(&format!(
            "\nDelivery: {} wpm, {} pauses, {}\n",
            patterns.words_per_minute, patterns.pause_count, patterns.confidence_label
        ));
    }

    out.push_str(&format!("\nSource: {:?}\n", result.source_tier));
    out
}
