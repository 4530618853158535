//! Violation detection over free-form text
//!
//! `analyze` is a total function: any string input, including the empty
//! string, yields a (possibly empty) finding sequence and never an error.
//! Pattern rules are evaluated first in catalog order, then keywords in
//! (category, keyword) declaration order. No deduplication happens here:
//! several keywords of one category yield several findings, because the
//! ledger aggregates count occurrences, not distinct categories.

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Finding, Severity};
use tracing::debug;

use crate::catalog::PatternCatalog;

/// Inputs longer than this are truncated before matching to keep regex cost
/// bounded
pub const MAX_INPUT_CHARS: usize = 10_000;

lazy_static! {
    /// Whitespace runs are collapsed before matching so multi-token
    /// keywords ("발로 차기") survive irregular spacing
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Run all pattern and keyword rules against `text`
pub fn analyze(catalog: &PatternCatalog, text: &str) -> Vec<Finding> {
    let bounded = bound_input(text);
    let normalized = normalize(bounded);
    let detected_at = Utc::now();

    let mut findings = Vec::new();

    for rule in catalog.pattern_rules() {
        if rule.regex.is_match(&normalized) {
            debug!(label = rule.label, category = %rule.category, "pattern rule matched");
            findings.push(Finding {
                category: rule.category,
                label: rule.label.to_string(),
                severity: rule.severity,
                text: bounded.to_string(),
                detected_at,
            });
        }
    }

    for (category, keywords) in catalog.keyword_rules() {
        for &keyword in keywords {
            if normalized.contains(keyword) {
                debug!(keyword, category = %category, "keyword matched");
                findings.push(Finding {
                    category,
                    label: keyword.to_string(),
                    severity: Severity::Normal,
                    text: bounded.to_string(),
                    detected_at,
                });
            }
        }
    }

    findings
}

/// Truncate to `MAX_INPUT_CHARS` characters on a char boundary
fn bound_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Lowercase and collapse whitespace runs for matching
fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").to_lowercase()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: analyze never panics and never errors, whatever the input
        #[test]
        fn analyze_is_total(text in ".{0,400}") {
            let catalog = PatternCatalog::load().unwrap();
            let _ = analyze(&catalog, &text);
        }

        /// Property: identical inputs yield identical findings except for
        /// the detection timestamp
        #[test]
        fn analyze_is_deterministic(text in ".{0,200}") {
            let catalog = PatternCatalog::load().unwrap();
            let first = analyze(&catalog, &text);
            let second = analyze(&catalog, &text);

            prop_assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(&second) {
                prop_assert_eq!(a.category, b.category);
                prop_assert_eq!(&a.label, &b.label);
                prop_assert_eq!(a.severity, b.severity);
            }
        }
    }
}
