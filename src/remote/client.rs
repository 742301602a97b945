use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{AnalysisResult, ProviderError, RemoteProvider};
use crate::remote::prompts::{SYSTEM_PROMPT, build_analysis_prompt};
use crate::remote::response::{into_result, parse_provider_reply};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const GOOGLE_AI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

const OPENAI_MODEL: &str = "gpt-4o-mini";
const ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";

/// Client for the remote analysis providers.
///
/// One network request per call; retry and fallback policy live in the
/// orchestrator, not here.
pub struct RemoteClient {
    client: Client,
}

impl RemoteClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Analyze a transcript with the given provider.
    ///
    /// Transport failures and timeouts classify as `Network`, rejected
    /// credentials as `Auth`, other HTTP failures as `Unknown`, and
    /// responses without a parseable JSON document as `Malformed`.
    pub async fn analyze(
        &self,
        transcript: &str,
        duration_ms: i64,
        provider: RemoteProvider,
        credential: &str,
        timeout: Duration,
    ) -> Result<AnalysisResult, ProviderError> {
        let prompt = build_analysis_prompt(transcript);

        let content = match provider {
            RemoteProvider::OpenAi => self.call_openai(&prompt, credential, timeout).await?,
            RemoteProvider::Anthropic => self.call_anthropic(&prompt, credential, timeout).await?,
            RemoteProvider::Google => self.call_google(&prompt, credential, timeout).await?,
        };

        debug!(reply_len = content.len(), ?provider, "provider reply received");

        let analysis = parse_provider_reply(&content)?;
        Ok(into_result(analysis, transcript, duration_ms))
    }

    async fn call_openai(
        &self,
        prompt: &str,
        credential: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        let request = OpenAiRequest {
            model: OPENAI_MODEL.to_string(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: 1000,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {credential}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let body: OpenAiResponse = check_status(response).await?.json().await.map_err(|e| {
            ProviderError::Malformed(format!("unexpected OpenAI response shape: {e}"))
        })?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Malformed("no choices in OpenAI response".to_string()))
    }

    async fn call_anthropic(
        &self,
        prompt: &str,
        credential: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        let request = AnthropicRequest {
            model: ANTHROPIC_MODEL.to_string(),
            max_tokens: 1000,
            system: Some(SYSTEM_PROMPT.to_string()),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .timeout(timeout)
            .header("x-api-key", credential)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let body: AnthropicResponse = check_status(response).await?.json().await.map_err(|e| {
            ProviderError::Malformed(format!("unexpected Anthropic response shape: {e}"))
        })?;

        body.content
            .into_iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text)
            .ok_or_else(|| ProviderError::Malformed("no text content in Anthropic response".to_string()))
    }

    async fn call_google(
        &self,
        prompt: &str,
        credential: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        let request = GoogleRequest {
            contents: vec![GoogleContent {
                parts: vec![GooglePart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{GOOGLE_AI_URL}?key={credential}"))
            .timeout(timeout)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let body: GoogleResponse = check_status(response).await?.json().await.map_err(|e| {
            ProviderError::Malformed(format!("unexpected Google response shape: {e}"))
        })?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ProviderError::Malformed("no candidates in Google response".to_string()))
    }
}

impl Default for RemoteClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Network(format!("request timed out: {error}"))
    } else {
        ProviderError::Network(format!("transport failure: {error}"))
    }
}

/// Map non-2xx statuses onto the error taxonomy.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let preview: String = body.chars().take(200).collect();
    warn!(status = %status, body = %preview, "provider returned error status");

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Err(ProviderError::Auth(format!("{status}: {preview}")))
    } else {
        Err(ProviderError::Unknown(format!("{status}: {preview}")))
    }
}

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiReplyMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GoogleRequest {
    contents: Vec<GoogleContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GoogleContent {
    parts: Vec<GooglePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GooglePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    candidates: Vec<GoogleCandidate>,
}

#[derive(Debug, Deserialize)]
struct GoogleCandidate {
    content: GoogleContent,
}
