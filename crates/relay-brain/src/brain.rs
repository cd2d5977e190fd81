//! RelayBrain implementation.

use brain_core::{
    async_trait, hash_prompt, Brain, BrainError, ChatMessage, CompletionRequest, ModelReply,
};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, RelayRequest, RelayResponse};
use crate::config::RelayBrainConfig;

/// Structured `action` value asking the caller to show live data instead.
pub(crate) const PREFER_DATA_ACTION: &str = "fetch_from_api";

/// Inline marker older relay deployments put in `content` for the same request.
pub(crate) const LEGACY_PREFER_DATA_TOKEN: &str = "FETCH_FROM_API";

/// A brain that forwards conversations to a hosted completion relay.
///
/// The relay is stateless from our side: every call carries the whole
/// conversation it should answer.
pub struct RelayBrain {
    client: Client,
    config: RelayBrainConfig,
    system_prompt_hash: Option<String>,
}

impl RelayBrain {
    /// Create a new RelayBrain with the given configuration.
    pub fn new(config: RelayBrainConfig) -> Result<Self, BrainError> {
        if config.api_url.trim().is_empty() {
            return Err(BrainError::Configuration(
                "relay API URL is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let system_prompt_hash = config.system_prompt.as_deref().map(hash_prompt);
        if let Some(ref hash) = system_prompt_hash {
            info!("RelayBrain system prompt fingerprint: {}", hash);
        }

        info!(
            "RelayBrain initialized for {} (static key: {}, timeout: {:?})",
            config.api_url,
            config.api_key.is_some(),
            config.timeout
        );

        Ok(Self {
            client,
            config,
            system_prompt_hash,
        })
    }

    /// Create a RelayBrain from environment variables.
    ///
    /// See [`RelayBrainConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(RelayBrainConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &RelayBrainConfig {
        &self.config
    }

    /// Get the system prompt fingerprint, if configured.
    pub fn system_prompt_hash(&self) -> Option<&str> {
        self.system_prompt_hash.as_deref()
    }

    /// Prepend the configured system prompt, if any.
    fn build_messages(&self, conversation: Vec<ChatMessage>) -> Vec<ChatMessage> {
        match self.config.system_prompt {
            Some(ref prompt) => {
                let mut messages = Vec::with_capacity(conversation.len() + 1);
                messages.push(ChatMessage::system(prompt.clone()));
                messages.extend(conversation);
                messages
            }
            None => conversation,
        }
    }

    /// Post the conversation to the relay and parse its response.
    async fn post(
        &self,
        messages: &[ChatMessage],
        api_key: Option<&str>,
    ) -> Result<RelayResponse, BrainError> {
        let mut request = self
            .client
            .post(&self.config.api_url)
            .json(&RelayRequest { messages });

        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        debug!("Sending {} messages to relay", messages.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BrainError::Timeout
            } else {
                BrainError::Network(format!("Failed to send request: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.message().to_string())
                .unwrap_or(error_text);
            return Err(BrainError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                detail
            )));
        }

        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))
    }
}

/// Map a relay response onto the tri-state reply.
pub(crate) fn interpret_response(response: RelayResponse) -> ModelReply {
    let wants_data = response
        .action
        .as_deref()
        .is_some_and(|action| action.eq_ignore_ascii_case(PREFER_DATA_ACTION));

    let content = response.content.unwrap_or_default();

    // The legacy token only counts as the whole reply.
    if wants_data || content.trim() == LEGACY_PREFER_DATA_TOKEN {
        return ModelReply::PreferData;
    }

    if content.trim().is_empty() {
        return ModelReply::NoOpinion;
    }

    ModelReply::Answer(content)
}

#[async_trait]
impl Brain for RelayBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<ModelReply, BrainError> {
        let CompletionRequest { messages, api_key } = request;
        let api_key = api_key.or_else(|| self.config.api_key.clone());

        let messages = self.build_messages(messages);
        let response = self.post(&messages, api_key.as_deref()).await?;
        let reply = interpret_response(response);

        match reply {
            ModelReply::Answer(ref text) => debug!("Relay answered ({} chars)", text.len()),
            ModelReply::PreferData => debug!("Relay asked for live data"),
            ModelReply::NoOpinion => warn!("Relay returned empty content"),
        }

        Ok(reply)
    }

    fn name(&self) -> &str {
        "RelayBrain"
    }
}
