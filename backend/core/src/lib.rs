//! `relayforge-core` — shared types, errors, and capability traits.
//!
//! Everything the stateful engine and the I/O edges agree on lives here:
//! conversation units ([`Turn`], [`ChatId`], [`Mode`]), the error
//! taxonomy ([`RelayError`]), and the traits the dispatcher consumes
//! ([`Notifier`], [`CompletionProvider`]).

pub mod error;
pub mod traits;
pub mod types;

pub use error::RelayError;
pub use traits::{CompletionProvider, CompletionRequest, CompletionResponse, Notifier};
pub use types::{ChatId, GenParams, Mode, Role, Turn};
