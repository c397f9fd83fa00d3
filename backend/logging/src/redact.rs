//! Secret redaction for log lines.
//!
//! The Telegram Bot API embeds the bot token in every request URL
//! (`https://api.telegram.org/bot<token>/...`), so any error message that
//! carries a URL must be scrubbed before it is logged.

/// Replace a Telegram bot token embedded in `text` with a mask.
///
/// Matches the `bot<token>/` segment; the token itself may contain a
/// colon and alphanumerics but never a slash.
pub fn redact_bot_token(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find("/bot") {
        let (head, tail) = rest.split_at(idx + "/bot".len());
        out.push_str(head);
        match tail.find('/') {
            Some(end) => {
                out.push_str("***");
                rest = &tail[end..];
            }
            None => {
                out.push_str("***");
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_token_in_url() {
        let line = "POST https://api.telegram.org/bot123456:AAzz/sendMessage failed";
        let redacted = redact_bot_token(line);
        assert_eq!(
            redacted,
            "POST https://api.telegram.org/bot***/sendMessage failed"
        );
    }

    #[test]
    fn redacts_token_at_end_of_line() {
        let redacted = redact_bot_token("base url: https://api.telegram.org/bot123:abc");
        assert_eq!(redacted, "base url: https://api.telegram.org/bot***");
    }

    #[test]
    fn passes_through_clean_lines() {
        let line = "connection refused";
        assert_eq!(redact_bot_token(line), line);
    }
}
