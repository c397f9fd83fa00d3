//! Command Interpreter
//!
//! Classifies inbound text into control commands versus free-text
//! queries and executes command semantics against the stores. Matching
//! is case-sensitive prefix matching in a fixed priority order, so
//! `/resetnow` still hits `/reset`.

use std::str::FromStr;

use relayforge_core::{ChatId, Mode};

use crate::history::HistoryStore;
use crate::prefs::PreferenceStore;

pub const START_REPLY: &str =
    "Hi! I relay your questions to Llama 3.1 on Groq. Send me anything. 🤖";
pub const HELP_REPLY: &str = "Send a question and I will answer it. \
     /reset clears our conversation history, \
     /mode short|creative switches the response mode, \
     /about tells you what I am.";
pub const ABOUT_REPLY: &str = "RelayForge: a thin relay between Telegram and a \
     Llama model on Groq. No persistence; history lives in memory only.";
pub const RESET_REPLY: &str = "History cleared. Carry on!";
pub const INVALID_MODE_REPLY: &str = "invalid mode. Options: short, creative";

/// A recognized control command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
    Reset,
    /// `/mode` with an optional argument, already lowercased and trimmed.
    Mode(Option<String>),
}

impl Command {
    /// Classify trimmed inbound text. `None` means free-text query.
    pub fn parse(text: &str) -> Option<Command> {
        if text.starts_with("/start") {
            Some(Command::Start)
        } else if text.starts_with("/help") {
            Some(Command::Help)
        } else if text.starts_with("/about") {
            Some(Command::About)
        } else if text.starts_with("/reset") {
            Some(Command::Reset)
        } else if text.starts_with("/mode") {
            let argument = text["/mode".len()..].trim().to_lowercase();
            if argument.is_empty() {
                Some(Command::Mode(None))
            } else {
                Some(Command::Mode(Some(argument)))
            }
        } else {
            None
        }
    }
}

/// Execute a command against the stores and produce its reply.
///
/// Exactly one reply per command; no partial effects are visible to the
/// caller mid-command.
pub async fn execute(
    command: Command,
    chat: ChatId,
    history: &HistoryStore,
    prefs: &PreferenceStore,
) -> String {
    match command {
        Command::Start => START_REPLY.to_string(),
        Command::Help => HELP_REPLY.to_string(),
        Command::About => ABOUT_REPLY.to_string(),
        Command::Reset => {
            history.clear(chat).await;
            RESET_REPLY.to_string()
        }
        Command::Mode(None) => {
            let current = prefs.get(chat).await;
            format!("current mode is {current} (options: short, creative)")
        }
        Command::Mode(Some(label)) => match Mode::from_str(&label) {
            Ok(mode) => {
                prefs.set(chat, mode).await;
                format!("mode changed to: {mode}")
            }
            Err(_) => INVALID_MODE_REPLY.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_commands_in_priority_order() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/about"), Some(Command::About));
        assert_eq!(Command::parse("/reset"), Some(Command::Reset));
        assert_eq!(Command::parse("/mode"), Some(Command::Mode(None)));
        assert_eq!(Command::parse("what is rust?"), None);
    }

    #[test]
    fn prefix_match_not_exact_match() {
        assert_eq!(Command::parse("/resetnow"), Some(Command::Reset));
        assert_eq!(Command::parse("/startled"), Some(Command::Start));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Command::parse("/Reset"), None);
        assert_eq!(Command::parse("/START"), None);
    }

    #[test]
    fn mode_argument_is_normalized() {
        assert_eq!(
            Command::parse("/mode  CREATIVE "),
            Some(Command::Mode(Some("creative".to_string())))
        );
        assert_eq!(
            Command::parse("/mode short"),
            Some(Command::Mode(Some("short".to_string())))
        );
    }

    #[tokio::test]
    async fn reset_clears_history() {
        let history = HistoryStore::new(10);
        let prefs = PreferenceStore::new();
        history
            .append(ChatId(1), relayforge_core::Turn::user("hello"))
            .await;

        let reply = execute(Command::Reset, ChatId(1), &history, &prefs).await;
        assert_eq!(reply, RESET_REPLY);
        assert!(history.get(ChatId(1)).await.is_empty());
    }

    #[tokio::test]
    async fn mode_query_reports_current_mode() {
        let history = HistoryStore::new(10);
        let prefs = PreferenceStore::new();

        let reply = execute(Command::Mode(None), ChatId(1), &history, &prefs).await;
        assert_eq!(reply, "current mode is short (options: short, creative)");
    }

    #[tokio::test]
    async fn mode_change_then_query() {
        let history = HistoryStore::new(10);
        let prefs = PreferenceStore::new();

        let reply = execute(
            Command::Mode(Some("creative".into())),
            ChatId(1),
            &history,
            &prefs,
        )
        .await;
        assert_eq!(reply, "mode changed to: creative");

        let reply = execute(Command::Mode(None), ChatId(1), &history, &prefs).await;
        assert_eq!(reply, "current mode is creative (options: short, creative)");
    }

    #[tokio::test]
    async fn invalid_mode_leaves_preference_unchanged() {
        let history = HistoryStore::new(10);
        let prefs = PreferenceStore::new();
        prefs.set(ChatId(1), Mode::Creative).await;

        let reply = execute(
            Command::Mode(Some("foo".into())),
            ChatId(1),
            &history,
            &prefs,
        )
        .await;
        assert_eq!(reply, INVALID_MODE_REPLY);
        assert_eq!(prefs.get(ChatId(1)).await, Mode::Creative);
    }

    #[tokio::test]
    async fn start_help_about_touch_no_state() {
        let history = HistoryStore::new(10);
        let prefs = PreferenceStore::new();
        history
            .append(ChatId(1), relayforge_core::Turn::user("hello"))
            .await;

        for command in [Command::Start, Command::Help, Command::About] {
            execute(command, ChatId(1), &history, &prefs).await;
        }
        assert_eq!(history.get(ChatId(1)).await.len(), 1);
    }
}
