/// System prompt for providers that accept one.
pub const SYSTEM_PROMPT: &str =
    "You are an AI assistant that analyzes voice recordings and provides structured summaries.";

/// Build the analysis prompt for a transcript.
///
/// The response contract is a single JSON object; the adapter tolerates
/// prose around it but not a missing document.
pub fn build_analysis_prompt(transcript: &str) -> String {
    format!(
        r#"Please analyze the following voice recording transcript and provide a structured response in JSON format:

TRANSCRIPT:
"{transcript}"

Please provide your analysis in the following JSON structure:
{{
    "summary": "A concise 2-3 sentence summary of the main content",
    "action_items": ["List of specific action items or tasks mentioned"],
    "keywords": ["Key terms and topics discussed"],
    "sentiment": "positive/negative/neutral",
    "topics": ["Main topics or categories discussed"],
    "insights": "Any notable patterns, insights, or observations"
}}

Focus on being accurate, concise, and extracting actionable information."#
    )
}
