//! Keyword extraction and synonym normalization
//!
//! Step 1 rewrites synonym phrases to canonical terms, in table order.
//! Step 2 tokenizes on whitespace. Step 3 drops stop words. What is left
//! are the residual keywords that drive expert matching. Duplicates are
//! kept; the matcher tolerates repeated AND clauses.

use crate::chat::lexicon::Lexicon;

/// Apply the ordered synonym table to a lowercased utterance.
/// Each rule sees the output of the previous one. Applying the table to
/// already-normalized text is a no-op.
pub fn normalize(lexicon: &Lexicon, input: &str) -> String {
    let mut text = input.to_string();
    for rule in &lexicon.synonyms {
        text = rule.pattern.replace_all(&text, rule.replacement.as_str()).into_owned();
    }
    text
}

/// Tokenize normalized text and drop stop words.
pub fn extract_keywords(lexicon: &Lexicon, normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|word| !word.is_empty() && !lexicon.is_stop_word(word))
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_rewrite() {
        let lexicon = Lexicon::default();
        assert_eq!(normalize(&lexicon, "front end developer"), "frontend developer");
        assert_eq!(normalize(&lexicon, "user interface design"), "ui design");
    }

    #[test]
    fn test_rules_apply_in_table_order() {
        let lexicon = Lexicon::default();
        // "user interface" -> "ui" and "user experience" -> "ux" feed the
        // later "ui/ux" rule when the slash form appears directly.
        assert_eq!(normalize(&lexicon, "ui/ux designer"), "ui ux designer");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let lexicon = Lexicon::default();
        let inputs = [
            "need an ai expert in bangalore",
            "front end and back end work",
            "user interface polish for a ui/ux audit",
        ];
        for input in inputs {
            let once = normalize(&lexicon, input);
            let twice = normalize(&lexicon, &once);
            assert_eq!(once, twice, "second pass changed: {input}");
        }
    }

    #[test]
    fn test_stop_word_filtering() {
        let lexicon = Lexicon::default();
        let keywords = extract_keywords(&lexicon, "i need a backend expert in bangalore please");
        assert_eq!(keywords, vec!["backend", "bangalore"]);
    }

    #[test]
    fn test_filler_only_input_yields_no_keywords() {
        let lexicon = Lexicon::default();
        let normalized = normalize(&lexicon, "can you help me please");
        assert!(extract_keywords(&lexicon, &normalized).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let lexicon = Lexicon::default();
        let keywords = extract_keywords(&lexicon, "java java developer");
        assert_eq!(keywords, vec!["java", "java", "developer"]);
    }
}
