pub mod analysis;
pub mod io;
pub mod lexicon;
pub mod models;
pub mod orchestrator;
pub mod reminders;
pub mod remote;

pub use analysis::{
    LocalAnalysis, NamingConfig, NamingPattern, SummaryMode, analyze_local, analyze_local_with,
    extract_action_items, extract_entities, extract_keywords, generate_note_name, generate_title,
    summarize,
};
pub use io::{read_transcript_file, read_transcript_stdin, render_human, write_result_json};
pub use models::{
    ActionItem, AnalysisConfig, AnalysisResult, Priority, ProviderError, RemoteProvider,
    SourceTier, SpeakingPatterns, SummaryConfig,
};
pub use orchestrator::{Analysis, Orchestrator};
pub use reminders::{LogReminderSink, ReminderRequest, ReminderSink, derive_reminders};
pub use remote::{RemoteClient, build_analysis_prompt, parse_provider_reply};
