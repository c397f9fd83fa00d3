//! `relayforge-agent` — the conversation-state and dispatch engine.
//!
//! Everything with state, policy, or failure handling lives here: the
//! per-chat history and mode stores, the command interpreter, the
//! mode resolver, the failure-isolated completion invoker, and the
//! dispatcher that orchestrates them. The HTTP edge and the outbound
//! clients are thin collaborators in the gateway and channels crates.

pub mod commands;
pub mod dispatcher;
pub mod history;
pub mod invoker;
pub mod mode;
pub mod prefs;

pub use commands::Command;
pub use dispatcher::Dispatcher;
pub use history::HistoryStore;
pub use invoker::CompletionInvoker;
pub use prefs::PreferenceStore;

/// Fixed apology sent (and recorded) when the completion call fails.
/// The underlying technical error never reaches the user.
pub const GENERATION_FALLBACK: &str =
    "Sorry, I could not generate an answer right now. Please try again.";
