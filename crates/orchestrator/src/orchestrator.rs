//! The answer pipeline.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use brain_core::{Brain, ChatMessage, CompletionRequest, ModelReply};
use explorer_tools::Explorer;
use futures::FutureExt;
use relay_brain::RelayBrain;
use tracing::{debug, error, info, warn};

use crate::config::OrchestratorConfig;
use crate::credentials::{CredentialStore, DatabaseSettings};
use crate::error::OrchestratorError;
use crate::fallback::{canned_response, fallback_delay, DEFAULT_RESPONSE};
use crate::handler::IntentHandler;
use crate::intent::Classification;

/// Reply used when the pipeline itself breaks down.
pub const APOLOGY_RESPONSE: &str = "I apologize, but I'm having trouble processing your request \
right now. Please try asking your blockchain question again.";

/// Prefix of the prompt asking the model to interpret handler data.
pub const ANALYZE_PROMPT_PREFIX: &str = "Analyze this blockchain data and provide insights: ";

/// Answers blockchain questions from explorer data, a model backend, or canned text.
///
/// The flow for the last message of a conversation:
/// 1. Classify it and run the matching intent handler.
/// 2. With handler text, let the model analyze it; keep the raw text if the
///    model declines or fails.
/// 3. Without handler text, ask the model directly. A request for data
///    re-runs the handler; a failure falls back to canned text after a short
///    randomized pause.
pub struct Orchestrator<B: Brain> {
    brain: B,
    handler: IntentHandler,
    credentials: Arc<CredentialStore>,
    config: OrchestratorConfig,
}

impl<B: Brain> Orchestrator<B> {
    pub fn new(
        brain: B,
        explorer: Explorer,
        credentials: Arc<CredentialStore>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            brain,
            handler: IntentHandler::new(Arc::new(explorer)),
            credentials,
            config,
        }
    }

    pub fn brain(&self) -> &B {
        &self.brain
    }

    pub fn explorer(&self) -> &Explorer {
        self.handler.explorer()
    }

    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Answer the last message of `conversation`. Never fails.
    pub async fn answer(&self, conversation: &[ChatMessage]) -> String {
        match AssertUnwindSafe(self.respond(conversation))
            .catch_unwind()
            .await
        {
            Ok(text) => text,
            Err(_) => {
                error!("Answer pipeline panicked");
                APOLOGY_RESPONSE.to_string()
            }
        }
    }

    async fn respond(&self, conversation: &[ChatMessage]) -> String {
        let Some(message) = conversation.last().filter(|m| !m.content.is_empty()) else {
            debug!("Empty conversation, replying with default text");
            return DEFAULT_RESPONSE.to_string();
        };
        let text = message.content.as_str();

        let query = Classification::from_text(text);
        info!(
            "Classified message as {} (hash: {}, address: {})",
            query.intent,
            query.hash.is_some(),
            query.address.is_some()
        );

        let data = self.handler.handle(&query).await;
        if !data.is_empty() {
            return self.analyze(text, data).await;
        }

        match self.complete(vec![ChatMessage::user(text)]).await {
            Some(ModelReply::Answer(answer)) => answer,
            Some(ModelReply::PreferData) => {
                info!("Model asked for explorer data");
                let retry = self.handler.handle(&query).await;
                if retry.is_empty() {
                    canned_response(text).to_string()
                } else {
                    retry
                }
            }
            Some(ModelReply::NoOpinion) | None => self.canned(text).await,
        }
    }

    /// Let the model interpret handler data, keeping the data if it declines.
    async fn analyze(&self, text: &str, data: String) -> String {
        if !self.config.analyze_with_model {
            return data;
        }

        let messages = vec![
            ChatMessage::user(format!("{}{}", ANALYZE_PROMPT_PREFIX, text)),
            ChatMessage::assistant(data.clone()),
        ];

        match self.complete(messages).await {
            Some(ModelReply::Answer(answer)) => answer,
            Some(ModelReply::PreferData) | Some(ModelReply::NoOpinion) | None => data,
        }
    }

    /// Call the model with the stored credential. `None` when the call failed.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Option<ModelReply> {
        let api_key = self.credentials.get().await;
        let request = CompletionRequest::new(messages).with_api_key(api_key);

        match self.brain.complete(request).await {
            Ok(reply) => Some(reply),
            Err(err) => {
                warn!("{} failed: {}", self.brain.name(), err);
                None
            }
        }
    }

    async fn canned(&self, text: &str) -> String {
        let delay = fallback_delay(self.config.fallback_delay_min, self.config.fallback_delay_max);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        canned_response(text).to_string()
    }
}

impl Orchestrator<RelayBrain> {
    /// Build an orchestrator from environment variables.
    ///
    /// Uses `RELAY_*` for the model backend, `EXPLORER_*`/`RISK_*` for the
    /// data sources and `ASSISTANT_*` for the pipeline itself.
    pub async fn from_env() -> Result<Self, OrchestratorError> {
        let config = OrchestratorConfig::from_env();
        if config.fallback_delay_min > config.fallback_delay_max {
            return Err(OrchestratorError::Configuration(
                "ASSISTANT_FALLBACK_DELAY_MIN_MS exceeds ASSISTANT_FALLBACK_DELAY_MAX_MS".to_string(),
            ));
        }

        let brain = RelayBrain::from_env()?;
        let explorer = Explorer::from_env()?;

        let credentials = match &config.database_url {
            Some(url) => CredentialStore::new(Arc::new(DatabaseSettings::connect(url).await?)),
            None => CredentialStore::in_memory(),
        };

        info!(
            "Orchestrator ready ({} networks, model analysis {})",
            explorer.registry().len(),
            if config.analyze_with_model { "on" } else { "off" }
        );

        Ok(Self::new(brain, explorer, Arc::new(credentials), config))
    }
}
