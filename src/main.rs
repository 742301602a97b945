use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use notegist::analysis::{NamingConfig, SummaryMode, analyze_local, generate_note_name, summarize};
use notegist::io::{read_transcript_file, read_transcript_stdin, render_human, write_result_json};
use notegist::models::{AnalysisConfig, RemoteProvider, SummaryConfig};
use notegist::reminders::LogReminderSink;
use notegist::Orchestrator;

#[derive(Parser)]
#[command(name = "notegist")]
#[command(author, version, about = "Voice-note transcript analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProviderArg {
    Openai,
    Anthropic,
    Google,
}

impl From<ProviderArg> for RemoteProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => RemoteProvider::OpenAi,
            ProviderArg::Anthropic => RemoteProvider::Anthropic,
            ProviderArg::Google => RemoteProvider::Google,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcript through the tiered orchestrator
    Analyze {
        /// Input transcript file (plain text); stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Audio duration hint in milliseconds (0 = unknown)
        #[arg(long, default_value = "0")]
        duration_ms: i64,

        /// Delegate to a remote provider instead of the local tier
        #[arg(long)]
        remote: bool,

        /// Remote provider to use with --remote
        #[arg(long, value_enum, default_value = "openai")]
        provider: ProviderArg,

        /// Timeout for the remote request in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,

        /// Write the result as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the local rule-based breakdown of a transcript
    Inspect {
        /// Input transcript file (plain text); stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Audio duration hint in milliseconds (0 = unknown)
        #[arg(long, default_value = "0")]
        duration_ms: i64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            duration_ms,
            remote,
            provider,
            timeout_secs,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(input, duration_ms, remote, provider.into(), timeout_secs, output).await
        }
        Commands::Inspect {
            input,
            duration_ms,
            verbose,
        } => {
            setup_logging(verbose);
            inspect(input, duration_ms)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn analyze(
    input: Option<PathBuf>,
    duration_ms: i64,
    remote: bool,
    provider: RemoteProvider,
    timeout_secs: u64,
    output: Option<PathBuf>,
) -> Result<()> {
    let transcript = load_transcript(input)?;
    info!(chars = transcript.len(), "transcript loaded");

    let config = if remote {
        let mut config = AnalysisConfig::remote_from_env(provider);
        config.request_timeout = Duration::from_secs(timeout_secs);
        if config.credential.is_none() {
            info!(
                var = provider.credential_env_var(),
                "no credential in environment; remote tier unavailable"
            );
        }
        config
    } else {
        AnalysisConfig::local()
    };

    let orchestrator = Orchestrator::new().with_reminder_sink(Arc::new(LogReminderSink));
    let analysis = orchestrator.analyze(&transcript, duration_ms, &config).await;

    print!("{}", render_human(&analysis.result));

    if let Some(path) = output {
        write_result_json(&analysis.result, &path)?;
        info!("result written to {:?}", path);
    }

    info!(
        tier = ?analysis.result.source_tier,
        reminders = analysis.reminders.len(),
        "analysis complete"
    );

    Ok(())
}

fn inspect(input: Option<PathBuf>, duration_ms: i64) -> Result<()> {
    let transcript = load_transcript(input)?;
    let analysis = analyze_local(&transcript, duration_ms);
    let result = &analysis.result;

    println!("Transcript Breakdown");
    println!("====================");
    println!("Sentences: {}", analysis.sentences.len());
    println!(
        "Words: {} (~{} min read)",
        analysis.word_count, analysis.reading_time_min
    );
    println!(
        "Suggested name: {}",
        generate_note_name(&transcript, 1, chrono::Local::now(), &NamingConfig::default())
    );
    println!();

    println!("Keywords: {}", result.keywords.join(", "));
    println!("Sentiment: {}", result.sentiment);
    println!("Topics: {}", result.topics.join(", "));
    println!();

    println!("Entities");
    println!("--------");
    println!("People: {}", analysis.entities.people.join(", "));
    println!("Organizations: {}", analysis.entities.organizations.join(", "));
    println!("Locations: {}", analysis.entities.locations.join(", "));
    println!();

    println!("Action Items");
    println!("------------");
    for item in &result.action_items {
        println!("[{:?}] {} ({})", item.priority, item.task, item.category);
    }
    if result.action_items.is_empty() {
        println!("(none)");
    }
    println!();

    println!("Summary: {}", result.summary);
    println!(
        "One-liner: {}",
        summarize(
            &transcript,
            &result.keywords,
            SummaryMode::OneLiner,
            &SummaryConfig::default()
        )
    );

    if let Some(patterns) = &result.speaking_patterns {
        println!();
        println!(
            "Delivery: {} wpm, {} pauses (avg {:.0} ms), {}",
            patterns.words_per_minute,
            patterns.pause_count,
            patterns.average_pause_ms,
            patterns.confidence_label
        );
    }

    Ok(())
}

fn load_transcript(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => read_transcript_file(&path),
        None => read_transcript_stdin(),
    }
}
