//! Gemini client - implementation of the capability ports over the
//! generative-language REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_base_url("https://generativelanguage.googleapis.com");
//!
//! let client = GeminiClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::adapters::gemini::prompts;
use crate::domain::case::{Case, Difficulty, Suspect};
use crate::domain::foundation::Percentage;
use crate::domain::session::{Message, Sender, Verdict};
use crate::ports::{CaseGenerator, Interrogator, ServiceError, SolutionEvaluator};

/// Reply substituted when the model returns empty interrogation text.
const SILENT_REPLY: &str = "(沉默不语)";

/// Temperature for case authoring (creative).
const CASE_TEMPERATURE: f32 = 0.9;

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// How many trailing ledger messages to send as interrogation context.
    pub history_window: usize,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
            history_window: 8,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the interrogation history window.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Generative-language API client implementing all three capability
/// ports.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Sends a request and extracts the response text.
    async fn generate_content(&self, request: GenerateContentRequest) -> Result<String, ServiceError> {
        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ServiceError::network(format!("Connection failed: {}", e))
                } else {
                    ServiceError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;
        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::parse(e.to_string()))?;
        Ok(body.text())
    }

    /// Maps API error statuses to service errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ServiceError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ServiceError::AuthenticationFailed),
            429 => Err(ServiceError::rate_limited(60)),
            400 => Err(ServiceError::InvalidRequest(error_body)),
            500..=599 => Err(ServiceError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ServiceError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Converts the trailing window of a chat thread to API contents.
    fn history_contents(&self, history: &[Message]) -> Vec<Content> {
        let start = history.len().saturating_sub(self.config.history_window);
        history[start..]
            .iter()
            .filter_map(|msg| {
                let role = match msg.sender() {
                    Sender::Player => "user",
                    Sender::Suspect => "model",
                    Sender::System => return None,
                };
                Some(Content::new(role, msg.content()))
            })
            .collect()
    }
}

#[async_trait]
impl CaseGenerator for GeminiClient {
    async fn generate(&self, difficulty: Difficulty) -> Result<Case, ServiceError> {
        let request = GenerateContentRequest {
            contents: vec![Content::new("user", prompts::case_generation(difficulty))],
            system_instruction: Some(Content::plain(prompts::CASE_WRITER_SYSTEM)),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                temperature: Some(CASE_TEMPERATURE),
            }),
        };

        let text = self.generate_content(request).await?;
        if text.trim().is_empty() {
            return Err(ServiceError::parse("empty case generation response"));
        }

        let draft: CaseDraft =
            serde_json::from_str(&text).map_err(|e| ServiceError::parse(e.to_string()))?;
        Case::new(
            draft.title,
            draft.introduction,
            draft.solution,
            difficulty,
            draft.suspects,
        )
        .map_err(|e| ServiceError::parse(e.to_string()))
    }
}

#[async_trait]
impl Interrogator for GeminiClient {
    async fn interrogate(
        &self,
        case: &Case,
        suspect: &Suspect,
        history: &[Message],
        query: &str,
    ) -> Result<String, ServiceError> {
        // The optimistic append already placed the query at the tail
        // of the history; send it as the final user turn either way.
        let mut contents = self.history_contents(history);
        if contents.last().map(|c| c.role.as_deref()) != Some(Some("user")) {
            contents.push(Content::new("user", query));
        }

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::plain(prompts::interrogation_system(case, suspect))),
            generation_config: None,
        };

        let text = self.generate_content(request).await?;
        if text.trim().is_empty() {
            Ok(SILENT_REPLY.to_string())
        } else {
            Ok(text)
        }
    }
}

#[async_trait]
impl SolutionEvaluator for GeminiClient {
    async fn evaluate(&self, case: &Case, statement: &str) -> Result<Verdict, ServiceError> {
        let request = GenerateContentRequest {
            contents: vec![Content::new("user", prompts::evaluation(case, statement))],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                temperature: None,
            }),
        };

        let text = self.generate_content(request).await?;
        let draft: VerdictDraft =
            serde_json::from_str(&text).map_err(|e| ServiceError::parse(e.to_string()))?;

        let score = Percentage::new(draft.percentage.clamp(0.0, 100.0).round() as u8);
        // Correctness is derived from the score, not trusted from the model
        Ok(Verdict::from_score(score, draft.feedback))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn new(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Case JSON as authored by the model (difficulty is attached locally).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaseDraft {
    title: String,
    introduction: String,
    solution: String,
    suspects: Vec<Suspect>,
}

/// Verdict JSON as returned by the model.
#[derive(Debug, Deserialize)]
struct VerdictDraft {
    #[serde(default)]
    #[allow(dead_code)]
    correct: bool,
    percentage: f64,
    feedback: String,
}
