//! Trigger-word and rewrite tables for the chat pipeline
//!
//! All of these lists are hand-curated and will keep growing; they live
//! here as data so corrections never touch the pipeline logic. Built once
//! at startup and shared behind the application state.

use regex_lite::Regex;

/// One literal phrase rewrite. Rules are applied in table order and each
/// rule sees the output of the previous one, so two rules with overlapping
/// text are order-sensitive on purpose.
pub struct SynonymRule {
    pub pattern: Regex,
    pub replacement: String,
}

impl SynonymRule {
    /// Case-insensitive, global, anchored at word boundaries. Boundary
    /// anchoring keeps the table idempotent and stops rewrites inside
    /// words ("maintain" must not contain an "ai" hit).
    fn new(phrase: &str, replacement: &str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(phrase)))
            .expect("synonym phrase must compile");
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }
}

/// The data tables driving classification and normalization
pub struct Lexicon {
    /// Ordered synonym rewrite rules
    pub synonyms: Vec<SynonymRule>,

    /// Tokens dropped before expert matching
    pub stop_words: Vec<String>,

    /// Words that open a greeting utterance
    pub greetings: Vec<String>,

    /// Substrings routing to the contact-page canned answer
    pub contact_triggers: Vec<String>,

    /// Substrings routing to the wishlist canned answer
    pub wishlist_triggers: Vec<String>,

    /// Substrings routing to the about-page canned answer
    pub about_triggers: Vec<String>,

    /// Whole-word triggers for the roadmap lane
    pub roadmap_triggers: Vec<Regex>,

    /// Terms marking a question as AI-related
    pub ai_terms: Vec<String>,
}

const SYNONYM_TABLE: &[(&str, &str)] = &[
    ("user interface", "ui"),
    ("user experience", "ux"),
    ("ui/ux", "ui ux"),
    ("front end", "frontend"),
    ("back end", "backend"),
    ("ai", "artificial intelligence"),
];

const STOP_WORDS: &[&str] = &[
    "i", "need", "want", "show", "the", "any", "is", "to", "please", "expert", "experts", "get",
    "here", "me", "require", "could", "would", "can", "tell", "a", "an", "of", "for",
    "with", "on", "at", "and", "in", "do", "does", "how", "what", "where", "who", "when",
    "hi", "hello", "hey", "ok", "okay", "chat", "good", "morning", "afternoon", "evening",
    "location", "help", "thanks", "thank", "yes", "no",
    "you", "your", "my", "we", "us", "our", "it", "its", "this", "that", "they", "them",
];

const GREETINGS: &[&str] = &[
    "hi", "hello", "hey", "good", "good morning", "morning", "good afternoon",
    "afternoon", "good evening", "evening", "good night", "night",
];

const CONTACT_TRIGGERS: &[&str] = &[
    "contact support",
    "contact the support",
    "contact you",
    "contact page",
    "customer support",
    "reach support",
    "support team",
    "report a problem",
    "report an issue",
];

const WISHLIST_TRIGGERS: &[&str] = &[
    "wishlist",
    "wish list",
    "saved experts",
    "save an expert",
    "save experts",
    "bookmark",
];

const ABOUT_TRIGGERS: &[&str] = &[
    "about this site",
    "about the site",
    "about this platform",
    "about the platform",
    "what is this site",
    "what is this platform",
    "who built this",
    "who made this",
    "about page",
];

const ROADMAP_TRIGGERS: &[&str] = &[
    "roadmap",
    "road map",
    "plan",
    "blueprint",
    "learning path",
    "pathway",
    "guide",
    "steps",
    "step by step",
    "step-by-step",
    "milestones",
    "curriculum",
    "outline",
    "stages",
    "workflow",
    "how to build",
    "how to make",
    "how to create",
];

const AI_TERMS: &[&str] = &["ai", "artificial intelligence"];

impl Default for Lexicon {
    fn default() -> Self {
        let synonyms = SYNONYM_TABLE
            .iter()
            .map(|(phrase, replacement)| SynonymRule::new(phrase, replacement))
            .collect();

        let roadmap_triggers = ROADMAP_TRIGGERS
            .iter()
            .map(|phrase| {
                Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(phrase)))
                    .expect("roadmap trigger must compile")
            })
            .collect();

        Self {
            synonyms,
            stop_words: to_strings(STOP_WORDS),
            greetings: to_strings(GREETINGS),
            contact_triggers: to_strings(CONTACT_TRIGGERS),
            wishlist_triggers: to_strings(WISHLIST_TRIGGERS),
            about_triggers: to_strings(ABOUT_TRIGGERS),
            roadmap_triggers,
            ai_terms: to_strings(AI_TERMS),
        }
    }
}

impl Lexicon {
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|s| s == word)
    }
}

fn to_strings(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.synonyms.is_empty());
        assert!(!lexicon.roadmap_triggers.is_empty());
    }

    #[test]
    fn test_synonym_rule_respects_word_boundaries() {
        let rule = SynonymRule::new("ai", "artificial intelligence");
        assert_eq!(rule.pattern.replace_all("ai", &rule.replacement), "artificial intelligence");
        // No rewrite inside a word
        assert_eq!(rule.pattern.replace_all("maintain", &rule.replacement), "maintain");
    }

    #[test]
    fn test_stop_words() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_stop_word("please"));
        assert!(lexicon.is_stop_word("expert"));
        assert!(!lexicon.is_stop_word("backend"));
    }
}
