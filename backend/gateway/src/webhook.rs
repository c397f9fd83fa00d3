//! Telegram webhook endpoint.
//!
//! Authentication is two checks: the bot token embedded in the path must
//! equal the configured token, and if a webhook secret is configured the
//! `X-Telegram-Bot-Api-Secret-Token` header must match it. Failing
//! either is the only way this endpoint answers non-2xx; every
//! authenticated request is acknowledged with `{"ok": true}` no matter
//! what happens downstream.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use relayforge_channels::Update;
use serde_json::json;
use tracing::{debug, warn};

use crate::server::GatewayState;

const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Handler for `POST /webhook/{token}`.
pub async fn handle_update(
    State(state): State<GatewayState>,
    Path(token): Path<String>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> impl IntoResponse {
    if token != state.telegram_token {
        warn!("Webhook rejected: invalid path token");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "ok": false, "error": "invalid path token" })),
        );
    }

    if let Some(secret) = &state.webhook_secret {
        let header_value = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
        if header_value != Some(secret.as_str()) {
            warn!("Webhook rejected: invalid secret token");
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "ok": false, "error": "invalid secret token" })),
            );
        }
    }

    let Some((chat, text)) = update.text_payload() else {
        debug!(update_id = update.update_id, "Ignoring update without text");
        return (StatusCode::OK, Json(json!({ "ok": true })));
    };

    state.dispatcher.dispatch(chat, text).await;

    (StatusCode::OK, Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{build_router, GatewayState};
    use anyhow::Result;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use relayforge_agent::{CompletionInvoker, Dispatcher, GENERATION_FALLBACK};
    use relayforge_core::{ChatId, Notifier};
    use relayforge_llm::MockProvider;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<(ChatId, String)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, chat: ChatId, text: &str) -> Result<()> {
            self.messages.lock().unwrap().push((chat, text.to_string()));
            Ok(())
        }

        async fn notify_typing(&self, _chat: ChatId) -> Result<()> {
            Ok(())
        }
    }

    fn state_with(
        provider: MockProvider,
        secret: Option<&str>,
    ) -> (GatewayState, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let invoker = CompletionInvoker::new(Arc::new(provider), "test-model");
        let dispatcher = Arc::new(Dispatcher::new(10, invoker, notifier.clone()));
        let state = GatewayState::new(dispatcher, "123:abc", secret.map(String::from));
        (state, notifier)
    }

    fn webhook_request(token: &str, secret: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(format!("/webhook/{token}"))
            .header("content-type", "application/json");
        if let Some(secret) = secret {
            builder = builder.header("X-Telegram-Bot-Api-Secret-Token", secret);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const TEXT_UPDATE: &str =
        r#"{"update_id": 1, "message": {"chat": {"id": 42}, "text": "hello"}}"#;

    #[tokio::test]
    async fn wrong_path_token_is_rejected() {
        let (state, notifier) = state_with(MockProvider::new("mock"), None);
        let app = build_router(state);

        let response = app
            .oneshot(webhook_request("wrong-token", None, TEXT_UPDATE))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_secret_header_is_rejected_when_configured() {
        let (state, _) = state_with(MockProvider::new("mock"), Some("hunter2"));
        let app = build_router(state);

        let response = app
            .oneshot(webhook_request("123:abc", None, TEXT_UPDATE))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn matching_secret_is_accepted() {
        let (state, notifier) =
            state_with(MockProvider::new("mock").with_response("oi"), Some("hunter2"));
        let app = build_router(state);

        let response = app
            .oneshot(webhook_request("123:abc", Some("hunter2"), TEXT_UPDATE))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec![(ChatId(42), "oi".to_string())]
        );
    }

    #[tokio::test]
    async fn update_without_text_is_acknowledged_and_ignored() {
        let (state, notifier) = state_with(MockProvider::new("mock"), None);
        let app = build_router(state);

        let response = app
            .oneshot(webhook_request(
                "123:abc",
                None,
                r#"{"update_id": 2, "message": {"chat": {"id": 42}}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_still_acknowledges_ok() {
        let (state, notifier) =
            state_with(MockProvider::new("mock").with_error("provider down"), None);
        let app = build_router(state);

        let response = app
            .oneshot(webhook_request("123:abc", None, TEXT_UPDATE))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
        // The user still got exactly one reply: the fixed fallback.
        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec![(ChatId(42), GENERATION_FALLBACK.to_string())]
        );
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let (state, _) = state_with(MockProvider::new("mock"), None);
        let app = build_router(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
