//! Response assembly
//!
//! Canned replies for the greeting and FAQ lanes, reasoning-delimiter
//! stripping for model output, and the fail-soft apology text.

use crate::chat::classifier::{FaqTopic, GreetingKind, Lane};
use crate::errors::Result;

/// Reasoning models prefix their answer with chain-of-thought closed by
/// this delimiter; only the text after it is the answer.
pub const THINK_DELIMITER: &str = "</think>";

/// Returned instead of an error whenever the completion call fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't generate a response just now. Please try again.";

const GREETING_MORNING: &str = "Good morning! How can I help you today?";
const GREETING_AFTERNOON: &str = "Good afternoon! How can I help you today?";
const GREETING_EVENING: &str = "Good evening! How can I help you today?";
const GREETING_NIGHT: &str = "Have a Good night! How can I help you today?";
const GREETING_GENERIC: &str = "Hello! How can I help you today?";

const FAQ_CONTACT: &str = "You can reach our support team anytime from the \
[Contact page](/contact). Fill out the form there and we'll get back to you \
within 24 hours.";

const FAQ_WISHLIST: &str = "Use the heart icon on any expert card to save them \
to your wishlist. You can review your saved experts on the \
[Dashboard](/dashboard).";

const FAQ_ABOUT: &str = "This platform helps you discover and connect with \
verified technical experts. Learn more on the [About page](/about), or start \
browsing on the [Experts page](/experts).";

/// Fixed reply for a canned lane; `None` for lanes that go through the
/// completion service.
pub fn canned_reply(lane: &Lane) -> Option<&'static str> {
    match lane {
        Lane::Greeting(GreetingKind::Morning) => Some(GREETING_MORNING),
        Lane::Greeting(GreetingKind::Afternoon) => Some(GREETING_AFTERNOON),
        Lane::Greeting(GreetingKind::Evening) => Some(GREETING_EVENING),
        Lane::Greeting(GreetingKind::Night) => Some(GREETING_NIGHT),
        Lane::Greeting(GreetingKind::Generic) => Some(GREETING_GENERIC),
        Lane::Faq(FaqTopic::Contact) => Some(FAQ_CONTACT),
        Lane::Faq(FaqTopic::Wishlist) => Some(FAQ_WISHLIST),
        Lane::Faq(FaqTopic::About) => Some(FAQ_ABOUT),
        _ => None,
    }
}

/// Drop everything up to and including the first reasoning delimiter.
/// Text without the delimiter passes through unchanged.
pub fn strip_reasoning(raw: &str) -> &str {
    match raw.split_once(THINK_DELIMITER) {
        Some((_, answer)) => answer.trim(),
        None => raw,
    }
}

/// Final reply text from a completion outcome: reasoning-stripped model
/// output on success, the apology on any failure. The caller never sees
/// the error; a broken completion service must not break the chat.
pub fn assemble_reply(completion: Result<String>) -> String {
    match completion {
        Ok(raw) => strip_reasoning(&raw).to_string(),
        Err(_) => FALLBACK_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::classifier::classify;
    use crate::chat::lexicon::Lexicon;

    fn reply_for(input: &str) -> Option<&'static str> {
        canned_reply(&classify(&Lexicon::default(), input).lane)
    }

    #[test]
    fn test_greeting_replies_end_to_end() {
        assert_eq!(reply_for("hi"), Some("Hello! How can I help you today?"));
        assert_eq!(
            reply_for("good morning"),
            Some("Good morning! How can I help you today?")
        );
        assert_eq!(
            reply_for("good night everyone"),
            Some("Have a Good night! How can I help you today?")
        );
    }

    #[test]
    fn test_contact_faq_is_fixed_string() {
        assert_eq!(reply_for("how do I contact support"), Some(FAQ_CONTACT));
        // The canned answer wins regardless of other content in the message
        assert_eq!(
            reply_for("my java build broke and i want to contact support"),
            Some(FAQ_CONTACT)
        );
    }

    #[test]
    fn test_generated_lanes_have_no_canned_reply() {
        assert_eq!(reply_for("find me a java expert"), None);
        assert_eq!(reply_for("give me a roadmap for building a chat app"), None);
    }

    #[test]
    fn test_strip_reasoning() {
        assert_eq!(
            strip_reasoning("mulling it over...</think>  Java is a language."),
            "Java is a language."
        );
        assert_eq!(strip_reasoning("plain answer"), "plain answer");
        assert_eq!(strip_reasoning("</think>answer"), "answer");
    }

    #[test]
    fn test_strip_keeps_text_after_first_delimiter_only() {
        assert_eq!(strip_reasoning("a</think>b</think>c"), "b</think>c");
    }

    #[test]
    fn test_successful_completion_is_stripped() {
        let reply = assemble_reply(Ok("mulling...</think> Java is a language.".to_string()));
        assert_eq!(reply, "Java is a language.");
    }

    #[tokio::test]
    async fn test_failed_completion_becomes_apology() {
        use crate::completion::{CompletionClient, MockClient};

        let client = MockClient::failing();
        let result = client.complete("system prompt", "find me a java expert").await;
        assert_eq!(assemble_reply(result), FALLBACK_REPLY);
    }
}
