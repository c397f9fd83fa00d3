//! `relayforge-gateway` — the inbound HTTP edge.
//!
//! Thin I/O plumbing around the dispatcher: the webhook endpoint with
//! its token/secret checks and the health probe. No conversation state
//! lives here.

pub mod health;
pub mod server;
pub mod webhook;

pub use server::{build_router, start_server, GatewayState};
