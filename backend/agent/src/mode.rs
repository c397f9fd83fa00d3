//! Mode Resolver: maps a response mode to concrete sampling parameters.

use relayforge_core::{GenParams, Mode};

/// Resolve a mode into (temperature, max output tokens).
///
/// `creative` gets hotter sampling and a longer budget; everything else
/// gets the short defaults.
pub fn resolve(mode: Mode) -> GenParams {
    match mode {
        Mode::Creative => GenParams { temperature: 0.9, max_tokens: 768 },
        Mode::Short => GenParams { temperature: 0.5, max_tokens: 384 },
    }
}
