//! Chat completion backend: the trait, the HTTP client, and a scripted
//! double for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{LlmConfig, NetworkConfig};
use crate::error::{ForgeyardError, Result};

/// Helper to create a network error.
fn net_err(msg: String) -> ForgeyardError {
    ForgeyardError::Network {
        message: msg,
        cause: None,
    }
}

/// A chat completion backend.
///
/// The production implementation is [`ChatClient`]; tests inject a
/// [`ScriptedBackend`] with canned replies.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Run one completion with a system instruction and a user message and
    /// return the assistant's raw text reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

/// Response from `POST /v1/chat/completions`, reduced to what we read.
#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

/// HTTP client for an OpenAI-compatible chat completion service.
pub struct ChatClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl ChatClient {
    /// Create a new client from the given configuration.
    pub fn new(mut config: LlmConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .expect("failed to build reqwest client");

        Self { config, client }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        debug!("Requesting chat completion from {}", url);

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "user",
                    content: user,
                },
                ChatMessage {
                    role: "system",
                    content: system,
                },
            ],
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        // `?` maps timeouts to `ForgeyardError::Timeout` via the From impl.
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            return Err(net_err(format!("Chat API returned {}: {}", status, body)));
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| net_err(format!("Failed to parse chat completion response: {}", e)))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| net_err("Chat API returned no choices".to_string()))
    }
}

/// Scripted backend that hands out canned replies in order.
///
/// Not cfg-gated so downstream crates can drive it from their own tests.
/// Runs out of replies with a network error, which surfaces in callers the
/// same way a dead service would.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies),
            calls: AtomicUsize::new(0),
        }
    }

    /// Convenience constructor for the single-reply case.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::new(vec![reply.into()])
    }

    /// Number of completions served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut replies = self.replies.lock().expect("scripted replies mutex poisoned");
        if replies.is_empty() {
            return Err(net_err("scripted backend ran out of replies".to_string()));
        }
        Ok(replies.remove(0))
    }
}

/// Pull the first JSON object out of a reply that may wrap it in prose or a
/// code fence. Returns the slice from the first `{` to the last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}
