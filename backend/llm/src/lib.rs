//! `relayforge-llm` — completion providers.
//!
//! [`GroqProvider`] talks to Groq's OpenAI-compatible chat completions
//! endpoint; [`MockProvider`] is the canned/failing stand-in for tests.

pub mod groq;
pub mod mock;

pub use groq::GroqProvider;
pub use mock::MockProvider;
