use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::Router;
use brain_core::{Brain, ChatMessage};
use explorer_tools::BlockHeight;
use orchestrator::Orchestrator;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:8787";

struct AppState<B: Brain> {
    assistant: Arc<Orchestrator<B>>,
    api_token: Option<Arc<str>>,
}

impl<B: Brain> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            assistant: Arc::clone(&self.assistant),
            api_token: self.api_token.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRequest {
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct AnswerResponse {
    content: String,
}

#[derive(Debug, Serialize)]
struct BlockHeightsResponse {
    networks: Vec<BlockHeight>,
}

#[derive(Debug, Deserialize)]
struct CredentialRequest {
    api_key: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr = env::var("ASSISTANT_API_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let api_token = env::var("ASSISTANT_API_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty());

    let assistant = Orchestrator::from_env().await?;

    let state = AppState {
        assistant: Arc::new(assistant),
        api_token: api_token.map(Arc::from),
    };

    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| format!("Invalid ASSISTANT_API_ADDR {:?}: {}", addr, e))?;
    info!(%addr, "Assistant API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app<B: Brain + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/answer", post(answer::<B>))
        .route("/v1/block-heights", get(block_heights::<B>))
        .route(
            "/v1/credential",
            put(set_credential::<B>).delete(clear_credential::<B>),
        )
        .with_state(state)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn answer<B: Brain + 'static>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    authorize(&state, &headers)?;

    let content = state.assistant.answer(&payload.messages).await;
    Ok(Json(AnswerResponse { content }))
}

async fn block_heights<B: Brain + 'static>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
) -> Result<Json<BlockHeightsResponse>, ApiError> {
    authorize(&state, &headers)?;

    let networks = state.assistant.explorer().block_heights().await;
    Ok(Json(BlockHeightsResponse { networks }))
}

async fn set_credential<B: Brain + 'static>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
    Json(payload): Json<CredentialRequest>,
) -> Result<StatusCode, ApiError> {
    authorize(&state, &headers)?;

    state
        .assistant
        .credentials()
        .set(&payload.api_key)
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    info!("Model credential updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_credential<B: Brain + 'static>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    authorize(&state, &headers)?;

    state.assistant.credentials().clear().await;
    info!("Model credential cleared");
    Ok(StatusCode::NO_CONTENT)
}

fn authorize<B: Brain>(state: &AppState<B>, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.api_token.as_deref() else {
        return Ok(());
    };

    let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Err(ApiError::Unauthorized);
    };

    let Ok(value) = value.to_str() else {
        return Err(ApiError::Unauthorized);
    };

    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    if token != expected {
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

#[derive(Debug)]
enum ApiError {
    Unauthorized,
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => {
                warn!("Unauthorized request");
                let body = serde_json::json!({
                    "error": {
                        "message": "Unauthorized",
                        "type": "auth_error"
                    }
                });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            ApiError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                let body = serde_json::json!({
                    "error": {
                        "message": message,
                        "type": "invalid_request_error"
                    }
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use explorer_tools::{Explorer, ExplorerClient, Network, NetworkRegistry};
    use httpmock::prelude::*;
    use mock_brain::ScriptedBrain;
    use orchestrator::fallback::DEFAULT_RESPONSE;
    use orchestrator::{CredentialStore, OrchestratorConfig};
    use serde_json::{json, Value};

    fn explorer(base_url: String) -> Explorer {
        let registry = NetworkRegistry::new(Network::new("ethereum", "Ethereum Mainnet", "ETH", base_url));
        Explorer::new(registry, ExplorerClient::new(Duration::from_secs(5)).unwrap())
    }

    /// Serve the app on an ephemeral port and return its base URL.
    async fn spawn(
        brain: ScriptedBrain,
        explorer: Explorer,
        api_token: Option<&str>,
    ) -> (String, Arc<Orchestrator<ScriptedBrain>>) {
        let config = OrchestratorConfig::builder().no_fallback_delay().build();
        let assistant = Arc::new(Orchestrator::new(
            brain,
            explorer,
            Arc::new(CredentialStore::in_memory()),
            config,
        ));
        let state = AppState {
            assistant: Arc::clone(&assistant),
            api_token: api_token.map(Arc::from),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        (format!("http://{}", addr), assistant)
    }

    fn offline_explorer() -> Explorer {
        explorer("http://127.0.0.1:1/api".to_string())
    }

    #[tokio::test]
    async fn test_health() {
        let (base, _) = spawn(ScriptedBrain::answering("x"), offline_explorer(), Some("secret")).await;

        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_answer() {
        let (base, _) = spawn(ScriptedBrain::answering("Blocks are batches."), offline_explorer(), None).await;
        let client = reqwest::Client::new();

        let body: Value = client
            .post(format!("{}/v1/answer", base))
            .json(&json!({"messages": [{"role": "user", "content": "what is a block?"}]}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"content": "Blocks are batches."}));

        let body: Value = client
            .post(format!("{}/v1/answer", base))
            .json(&json!({"messages": []}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["content"], DEFAULT_RESPONSE);
    }

    #[tokio::test]
    async fn test_token_guard() {
        let (base, _) = spawn(ScriptedBrain::answering("ok"), offline_explorer(), Some("secret")).await;
        let client = reqwest::Client::new();
        let request = json!({"messages": [{"role": "user", "content": "hi"}]});

        let denied = client
            .post(format!("{}/v1/answer", base))
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(denied.status(), reqwest::StatusCode::UNAUTHORIZED);

        let wrong = client
            .post(format!("{}/v1/answer", base))
            .bearer_auth("nope")
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(wrong.status(), reqwest::StatusCode::UNAUTHORIZED);

        let allowed = client
            .post(format!("{}/v1/answer", base))
            .bearer_auth("secret")
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(allowed.status(), reqwest::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_credential_set_and_clear() {
        let (base, assistant) = spawn(ScriptedBrain::answering("ok"), offline_explorer(), None).await;
        let client = reqwest::Client::new();
        let question = json!({"messages": [{"role": "user", "content": "what is a block?"}]});

        let set = client
            .put(format!("{}/v1/credential", base))
            .json(&json!({"api_key": "sk-user"}))
            .send()
            .await
            .unwrap();
        assert_eq!(set.status(), reqwest::StatusCode::NO_CONTENT);
        client
            .post(format!("{}/v1/answer", base))
            .json(&question)
            .send()
            .await
            .unwrap();

        let cleared = client
            .delete(format!("{}/v1/credential", base))
            .send()
            .await
            .unwrap();
        assert_eq!(cleared.status(), reqwest::StatusCode::NO_CONTENT);
        client
            .post(format!("{}/v1/answer", base))
            .json(&question)
            .send()
            .await
            .unwrap();

        let requests = assistant.brain().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].api_key.as_deref(), Some("sk-user"));
        assert_eq!(requests[1].api_key, None);
    }

    #[tokio::test]
    async fn test_blank_credential_rejected() {
        let (base, assistant) = spawn(ScriptedBrain::answering("ok"), offline_explorer(), None).await;
        assistant.credentials().set("sk-kept").await.unwrap();
        let client = reqwest::Client::new();

        for api_key in ["", "   "] {
            let response = client
                .put(format!("{}/v1/credential", base))
                .json(&json!({"api_key": api_key}))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

            let body: Value = response.json().await.unwrap();
            assert_eq!(body["error"]["type"], "invalid_request_error");
        }

        assert_eq!(assistant.credentials().get().await.as_deref(), Some("sk-kept"));
    }

    #[tokio::test]
    async fn test_block_heights() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/ethereum")
                    .query_param("action", "eth_blockNumber");
                then.status(200)
                    .json_body(json!({"jsonrpc": "2.0", "id": 83, "result": "0x12a05f2"}));
            })
            .await;
        let (base, _) = spawn(
            ScriptedBrain::answering("unused"),
            explorer(server.url("/ethereum")),
            None,
        )
        .await;

        let body: Value = reqwest::get(format!("{}/v1/block-heights", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            body,
            json!({"networks": [{"name": "Ethereum Mainnet", "block_height": 19531250}]})
        );
    }
}
