//! Main HTTP gateway server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use relayforge_agent::Dispatcher;
use tokio::net::TcpListener;
use tracing::info;

use crate::health;
use crate::webhook;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub dispatcher: Arc<Dispatcher>,
    /// The bot token embedded in the webhook path.
    pub telegram_token: String,
    /// Optional shared secret checked against the Telegram secret header.
    pub webhook_secret: Option<String>,
    pub started_at: Instant,
}

impl GatewayState {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        telegram_token: impl Into<String>,
        webhook_secret: Option<String>,
    ) -> Self {
        Self {
            dispatcher,
            telegram_token: telegram_token.into(),
            webhook_secret,
            started_at: Instant::now(),
        }
    }
}

/// Build the gateway router: health probe plus the token-bearing
/// webhook endpoint.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(health::get_health))
        .route("/webhook/:token", post(webhook::handle_update))
        .with_state(state)
}

/// Start the Axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
