use chrono::{DateTime, Utc};

use crate::category::Category;

/// Urgency tag attached to a finding.
///
/// Ordered: `Normal < Medium < High`. Generic keyword matches are tagged
/// `Normal`; pattern rules assign `Medium` or `High` explicitly. A
/// finding's severity is fixed at creation and never recomputed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Severity {
    Normal,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Normal, Severity::Medium, Severity::High];

    /// User-visible Korean label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "보통",
            Severity::Medium => "중간",
            Severity::High => "높음",
        }
    }

    /// Marker glyph used in composed replies
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Normal => "🔍",
            Severity::Medium => "⚠️",
            Severity::High => "🚨",
        }
    }
}

/// One detected match of a rule against input text.
///
/// Immutable once created. `label` is the matched keyword literal or, for
/// pattern rules, the rule name.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub category: Category,
    pub label: String,
    pub severity: Severity,
    /// Snapshot of the analyzed input text
    pub text: String,
    pub detected_at: DateTime<Utc>,
}

/// Citation and plain-language explanation for one rights category.
///
/// Only a subset of categories has configured records; the rest receive a
/// stable fallback so a reference block can be rendered unconditionally.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LegalReference {
    pub category: Category,
    pub citation: String,
    /// One-line statement of the protected right, absent for fallback records
    pub summary: Option<String>,
    pub explanation: String,
}

/// Result of one analyzed exchange: the ordered finding sequence plus the
/// composed reply
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Interaction {
    pub findings: Vec<Finding>,
    pub reply: String,
}

/// One label/confidence pair from the optional sentiment classifier
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SentimentScore {
    pub label: String,
    pub score: f64,
}
