//! Query classifier
//!
//! Assigns each utterance to exactly one handling lane. Every detector
//! runs against the raw (trimmed, lowercased) input independently; a
//! single priority resolver then picks the winner, so no lane depends on
//! the order in which checks happen to run:
//!
//!   Greeting > FAQ > Roadmap > keyword lanes
//!
//! Classification is pure and total: unrecognized input always falls
//! through to `Lane::Default`.

use crate::chat::lexicon::Lexicon;
use crate::chat::normalize::{extract_keywords, normalize};

/// Time-of-day flavor of a greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingKind {
    Morning,
    Afternoon,
    Evening,
    Night,
    Generic,
}

/// Canned-answer topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqTopic {
    Contact,
    Wishlist,
    About,
}

/// Mutually-exclusive handling lane for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Greeting(GreetingKind),
    Faq(FaqTopic),
    Roadmap,
    /// Few non-AI keywords; reply capped at 2-3 lines
    ShortAnswer,
    /// AI-related question; reply should be thorough
    Detailed,
    Default,
}

impl Lane {
    /// Label used in logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Lane::Greeting(_) => "greeting",
            Lane::Faq(_) => "faq",
            Lane::Roadmap => "roadmap",
            Lane::ShortAnswer => "short_answer",
            Lane::Detailed => "detailed",
            Lane::Default => "default",
        }
    }

    /// Lanes that attach matched experts to the response
    pub fn wants_experts(&self) -> bool {
        matches!(self, Lane::ShortAnswer | Lane::Detailed | Lane::Default)
    }
}

/// Per-request classification result; discarded after response assembly
#[derive(Debug, Clone)]
pub struct Classification {
    pub lane: Lane,
    pub keywords: Vec<String>,
}

/// Classify one utterance. The keyword pass always runs, even for lanes
/// that ignore its output.
pub fn classify(lexicon: &Lexicon, raw: &str) -> Classification {
    let input = raw.trim().to_lowercase();

    let greeting = detect_greeting(lexicon, &input);
    let faq = detect_faq(lexicon, &input);
    let roadmap = detect_roadmap(lexicon, &input);

    let normalized = normalize(lexicon, &input);
    let keywords = extract_keywords(lexicon, &normalized);
    let ai_related = detect_ai_related(lexicon, &normalized, &keywords);

    let lane = if let Some(kind) = greeting {
        Lane::Greeting(kind)
    } else if let Some(topic) = faq {
        Lane::Faq(topic)
    } else if roadmap {
        Lane::Roadmap
    } else if keywords.is_empty() {
        Lane::Default
    } else if ai_related {
        Lane::Detailed
    } else if keywords.len() <= 2 {
        Lane::ShortAnswer
    } else {
        Lane::Default
    };

    Classification { lane, keywords }
}

/// Input equals a greeting word or starts with one followed by a space.
fn detect_greeting(lexicon: &Lexicon, input: &str) -> Option<GreetingKind> {
    let opens_with_greeting = lexicon
        .greetings
        .iter()
        .any(|g| input == g || input.starts_with(&format!("{g} ")));

    if !opens_with_greeting {
        return None;
    }

    let kind = if input.contains("morning") {
        GreetingKind::Morning
    } else if input.contains("afternoon") {
        GreetingKind::Afternoon
    } else if input.contains("evening") {
        GreetingKind::Evening
    } else if input.contains("night") {
        GreetingKind::Night
    } else {
        GreetingKind::Generic
    };

    Some(kind)
}

/// First FAQ topic whose trigger substring appears in the input.
fn detect_faq(lexicon: &Lexicon, input: &str) -> Option<FaqTopic> {
    let tables = [
        (FaqTopic::Contact, &lexicon.contact_triggers),
        (FaqTopic::Wishlist, &lexicon.wishlist_triggers),
        (FaqTopic::About, &lexicon.about_triggers),
    ];

    tables.into_iter().find_map(|(topic, triggers)| {
        triggers
            .iter()
            .any(|t| input.contains(t.as_str()))
            .then_some(topic)
    })
}

/// Roadmap trigger word present AND more than two tokens.
fn detect_roadmap(lexicon: &Lexicon, input: &str) -> bool {
    input.split_whitespace().count() > 2
        && lexicon.roadmap_triggers.iter().any(|t| t.is_match(input))
}

/// AI-relatedness survives the `ai -> artificial intelligence` rewrite:
/// single-word terms are checked against the residual keywords, phrases
/// against the normalized text.
fn detect_ai_related(lexicon: &Lexicon, normalized: &str, keywords: &[String]) -> bool {
    lexicon.ai_terms.iter().any(|term| {
        if term.contains(' ') {
            normalized.contains(term.as_str())
        } else {
            keywords.iter().any(|kw| kw == term)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane_of(input: &str) -> Lane {
        classify(&Lexicon::default(), input).lane
    }

    #[test]
    fn test_greeting_exact_and_prefix() {
        assert_eq!(lane_of("hi"), Lane::Greeting(GreetingKind::Generic));
        assert_eq!(lane_of("hello there"), Lane::Greeting(GreetingKind::Generic));
        assert_eq!(lane_of("  Hey  "), Lane::Greeting(GreetingKind::Generic));
        // "high" must not greet
        assert_ne!(lane_of("high availability experts"), Lane::Greeting(GreetingKind::Generic));
    }

    #[test]
    fn test_greeting_time_of_day() {
        assert_eq!(lane_of("good morning"), Lane::Greeting(GreetingKind::Morning));
        assert_eq!(lane_of("good afternoon"), Lane::Greeting(GreetingKind::Afternoon));
        assert_eq!(lane_of("good evening"), Lane::Greeting(GreetingKind::Evening));
        assert_eq!(lane_of("good night"), Lane::Greeting(GreetingKind::Night));
    }

    #[test]
    fn test_faq_contact() {
        assert_eq!(lane_of("how do i contact support"), Lane::Faq(FaqTopic::Contact));
        assert_eq!(
            lane_of("i found a bug, how do i contact support about it"),
            Lane::Faq(FaqTopic::Contact)
        );
    }

    #[test]
    fn test_faq_wishlist_and_about() {
        assert_eq!(lane_of("where is my wishlist"), Lane::Faq(FaqTopic::Wishlist));
        assert_eq!(lane_of("tell me about this platform"), Lane::Faq(FaqTopic::About));
    }

    #[test]
    fn test_roadmap_requires_three_tokens() {
        assert_eq!(
            lane_of("give me a roadmap for building a recommendation system"),
            Lane::Roadmap
        );
        // Too short for the roadmap lane
        assert_ne!(lane_of("roadmap please"), Lane::Roadmap);
    }

    #[test]
    fn test_greeting_outranks_roadmap() {
        assert_eq!(
            lane_of("hi can you plan a data platform"),
            Lane::Greeting(GreetingKind::Generic)
        );
    }

    #[test]
    fn test_zero_keywords_is_default() {
        let result = classify(&Lexicon::default(), "can you help me please");
        assert_eq!(result.lane, Lane::Default);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_short_answer_for_few_keywords() {
        let result = classify(&Lexicon::default(), "i need a java expert");
        assert_eq!(result.lane, Lane::ShortAnswer);
        assert_eq!(result.keywords, vec!["java"]);
    }

    #[test]
    fn test_ai_keyword_forces_detailed() {
        // One keyword "ai" would otherwise be a short answer; the AI rule
        // overrides, and it survives the synonym rewrite.
        let result = classify(&Lexicon::default(), "explain ai to me");
        assert_eq!(result.lane, Lane::Detailed);
    }

    #[test]
    fn test_many_keywords_default_lane() {
        let result = classify(
            &Lexicon::default(),
            "looking for backend database kubernetes experience in bangalore",
        );
        assert_eq!(result.lane, Lane::Default);
        assert!(result.keywords.len() > 2);
    }

    #[test]
    fn test_classification_is_total() {
        for input in ["", "   ", "!!!", "zzz qqq xxy", "ñ ü ø"] {
            // Must produce some lane without panicking
            let _ = classify(&Lexicon::default(), input);
        }
    }
}
