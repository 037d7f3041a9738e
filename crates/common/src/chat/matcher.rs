//! Expert match query
//!
//! A record qualifies iff every keyword occurs as a case-insensitive
//! whole word in at least one of its domain, about, name, or location
//! fields. An empty keyword set means "do not search" -- the constructor
//! refuses it, so no caller can accidentally build a query that matches
//! everything or nothing.

use regex_lite::Regex;

/// Conjunction of per-keyword disjunctions over the match fields
#[derive(Debug, Clone)]
pub struct MatchQuery {
    keywords: Vec<String>,
}

impl MatchQuery {
    /// Build a query from residual keywords; `None` when there is nothing
    /// to search for.
    pub fn new(keywords: &[String]) -> Option<Self> {
        if keywords.is_empty() {
            return None;
        }
        Some(Self {
            keywords: keywords.to_vec(),
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Postgres regex patterns, one per keyword: `\m...\M` word-boundary
    /// anchors, keyword escaped, matched with the case-insensitive `~*`
    /// operator by the repository.
    pub fn sql_patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.keywords
            .iter()
            .map(|kw| format!(r"\m{}\M", regex_lite::escape(kw)))
    }

    /// In-process evaluation of the same semantics the repository pushes
    /// into SQL: AND across keywords, OR across fields per keyword.
    pub fn matches(&self, fields: &[Option<&str>]) -> bool {
        self.keywords.iter().all(|kw| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(kw)))
                .expect("escaped keyword must compile");
            fields
                .iter()
                .flatten()
                .any(|field| pattern.is_match(field))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(keywords: &[&str]) -> MatchQuery {
        let owned: Vec<String> = keywords.iter().map(|s| s.to_string()).collect();
        MatchQuery::new(&owned).unwrap()
    }

    #[test]
    fn test_empty_keywords_build_nothing() {
        assert!(MatchQuery::new(&[]).is_none());
    }

    #[test]
    fn test_and_semantics_across_keywords() {
        let q = query(&["backend", "bangalore"]);

        // Both keywords land, in different fields
        assert!(q.matches(&[
            Some("backend developer"),
            None,
            Some("Asha Rao"),
            Some("Bangalore, India"),
        ]));

        // "bangalore" matches nowhere
        assert!(!q.matches(&[
            Some("backend developer"),
            None,
            Some("Dev Mehta"),
            Some("Delhi"),
        ]));
    }

    #[test]
    fn test_whole_word_matching() {
        let q = query(&["java"]);
        assert!(q.matches(&[Some("Senior Java engineer"), None, None, None]));
        // "javascript" must not satisfy "java"
        assert!(!q.matches(&[Some("javascript engineer"), None, None, None]));
    }

    #[test]
    fn test_case_insensitive() {
        let q = query(&["BANGALORE"]);
        assert!(q.matches(&[None, None, None, Some("bangalore")]));
    }

    #[test]
    fn test_repeated_keywords_are_harmless() {
        let q = query(&["java", "java"]);
        assert!(q.matches(&[Some("java developer"), None, None, None]));
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        let q = query(&["c++?"]);
        // Must not panic or misparse; the literal string simply does not
        // appear in these fields.
        assert!(!q.matches(&[Some("c developer"), None, None, None]));
    }

    #[test]
    fn test_sql_patterns_shape() {
        let q = query(&["backend", "bangalore"]);
        let patterns: Vec<String> = q.sql_patterns().collect();
        assert_eq!(patterns, vec![r"\mbackend\M", r"\mbangalore\M"]);
    }
}
