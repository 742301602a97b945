use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Remote text-understanding providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteProvider {
    OpenAi,
    Anthropic,
    Google,
}

impl RemoteProvider {
    /// Environment variable holding this provider's API key.
    pub fn credential_env_var(&self) -> &'static str {
        match self {
            RemoteProvider::OpenAi => "OPENAI_API_KEY",
            RemoteProvider::Anthropic => "ANTHROPIC_API_KEY",
            RemoteProvider::Google => "GOOGLE_API_KEY",
        }
    }
}

/// Per-call analysis configuration. Passed explicitly into every call;
/// there is no process-wide provider state.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Run the rule-based tier. When set, no network call is ever made.
    pub local_enabled: bool,
    /// Allow delegation to a remote provider.
    pub remote_enabled: bool,
    /// Which remote provider to use.
    pub remote_provider: RemoteProvider,
    /// Opaque API credential. A missing credential makes the remote tier
    /// unavailable rather than an error.
    pub credential: Option<String>,
    /// Timeout for the single outbound request of a remote attempt.
    pub request_timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            remote_enabled: false,
            remote_provider: RemoteProvider::OpenAi,
            credential: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AnalysisConfig {
    /// Local-only configuration.
    pub fn local() -> Self {
        Self::default()
    }

    /// Remote-first configuration, reading the provider credential from its
    /// environment variable. An unset variable leaves the credential empty,
    /// which the orchestrator treats as the remote tier being unavailable.
    pub fn remote_from_env(provider: RemoteProvider) -> Self {
        let credential = std::env::var(provider.credential_env_var())
            .ok()
            .filter(|key| !key.is_empty());
        Self {
            local_enabled: false,
            remote_enabled: true,
            remote_provider: provider,
            credential,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Whether the remote tier can be attempted at all.
    pub fn remote_available(&self) -> bool {
        self.remote_enabled && self.credential.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Tunables for the extractive summarizer. The one-liner cap is a display
/// contract, not a correctness invariant.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Target length for one-liner summaries in characters
    pub one_liner_max_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            one_liner_max_chars: 80,
        }
    }
}
