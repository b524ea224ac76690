//! HTTP routes
//!
//! `GET /` landing page, `POST /chat` responder endpoint, `GET /health`.

use crate::responder::ResponderEngine;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("static/index.html");

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<ResponderEngine>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(engine: Arc<ResponderEngine>) -> Self {
        Self {
            engine,
            started_at: Instant::now(),
        }
    }
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// Missing message is treated as empty
    #[serde(default)]
    pub message: String,
}

/// Reply of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub topics: usize,
}

/// Create the router with shared state and the given CORS origins
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `*` anywhere in the list allows every origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.engine.reply(&request.message);
    tracing::debug!(
        topic = reply.topic.as_deref().unwrap_or("fallback"),
        "chat request answered"
    );
    Json(ChatResponse {
        response: reply.html,
    })
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        topics: state.engine.topic_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{Topic, TopicTable, FALLBACK_RESPONSE};
    use crate::spelling::IdentityCorrector;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_router(origins: &[&str]) -> Router {
        let table = TopicTable::new(vec![Topic::new(
            "greet",
            vec!["hello".to_string()],
            "Hi [there](http://x)",
        )])
        .unwrap();
        let engine = Arc::new(ResponderEngine::new(&table, Arc::new(IdentityCorrector)).unwrap());
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        create_router(AppState::new(engine), &origins)
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_match() {
        let response = test_router(&["*"])
            .oneshot(chat_request(r#"{"message": "Hello bot"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["response"],
            r#"<ul><li>Hi <a href="http://x">there</a></li></ul>"#
        );
    }

    #[tokio::test]
    async fn test_chat_fallback() {
        let response = test_router(&["*"])
            .oneshot(chat_request(r#"{"message": "zzqqxx"}"#))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["response"], FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_empty() {
        let response = test_router(&["*"])
            .oneshot(chat_request("{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_chat_rejects_malformed_json() {
        let response = test_router(&["*"])
            .oneshot(chat_request("not json"))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = test_router(&["*"])
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/chat"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router(&["*"])
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["topics"], 1);
        assert!(body["uptimeSeconds"].is_u64());
    }

    #[tokio::test]
    async fn test_cors_permissive() {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::ORIGIN, "http://anywhere.example")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "hello"}"#))
            .unwrap();
        let response = test_router(&["*"]).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_origin_list() {
        let router = test_router(&["http://allowed.example"]);

        let allowed = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::ORIGIN, "http://allowed.example")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "hello"}"#))
            .unwrap();
        let response = router.clone().oneshot(allowed).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://allowed.example"
        );

        let denied = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::ORIGIN, "http://other.example")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "hello"}"#))
            .unwrap();
        let response = router.oneshot(denied).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
