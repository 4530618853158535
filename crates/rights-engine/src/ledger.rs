//! Session-scoped accumulation of findings with derived aggregates
//!
//! The ledger is append-only: entries are never removed individually, only
//! `reset()` clears the whole history. One ledger per session, mutated
//! under a single-writer discipline; cross-session sharing is disallowed.

use std::collections::BTreeMap;

use shared_types::{Category, Finding, Severity};
use tracing::{debug, info};

/// Occurrence counts derived over the full accumulated history.
///
/// Every category and severity key is present (zero-filled), so the
/// all-zero state after `reset()` is directly observable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LedgerAggregate {
    pub counts_by_category: BTreeMap<Category, u32>,
    pub counts_by_severity: BTreeMap<Severity, u32>,
}

impl LedgerAggregate {
    fn zeroed() -> Self {
        Self {
            counts_by_category: Category::ALL.iter().map(|c| (*c, 0)).collect(),
            counts_by_severity: Severity::ALL.iter().map(|s| (*s, 0)).collect(),
        }
    }
}

/// Headline metrics for session status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LedgerSummary {
    pub total_findings: usize,
    pub distinct_categories: usize,
    pub high_severity: usize,
}

/// Append-only store of findings, scoped to one user session
#[derive(Debug, Default)]
pub struct AnalysisLedger {
    findings: Vec<Finding>,
}

impl AnalysisLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the history; a no-op for empty input
    pub fn append(&mut self, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }
        debug!(count = findings.len(), "appending findings to ledger");
        self.findings.extend_from_slice(findings);
    }

    /// Occurrence counts over the full history.
    ///
    /// Counts occurrences, not distinct categories: a text that matched
    /// three discrimination keywords contributes three.
    pub fn aggregate(&self) -> LedgerAggregate {
        let mut aggregate = LedgerAggregate::zeroed();

        for finding in &self.findings {
            *aggregate
                .counts_by_category
                .entry(finding.category)
                .or_insert(0) += 1;
            *aggregate
                .counts_by_severity
                .entry(finding.severity)
                .or_insert(0) += 1;
        }

        aggregate
    }

    /// Headline metrics over the full history
    pub fn summary(&self) -> LedgerSummary {
        let aggregate = self.aggregate();
        LedgerSummary {
            total_findings: self.findings.len(),
            distinct_categories: aggregate
                .counts_by_category
                .values()
                .filter(|count| **count > 0)
                .count(),
            high_severity: self
                .findings
                .iter()
                .filter(|f| f.severity == Severity::High)
                .count(),
        }
    }

    /// Clear the whole history; an explicit, user-initiated operation
    pub fn reset(&mut self) {
        info!(discarded = self.findings.len(), "ledger reset");
        self.findings.clear();
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}
