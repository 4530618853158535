//! Rule-based rights-statement annotation engine
//!
//! Detects potential human-rights-relevant statements in free-form
//! child-authored text, classifies them into a fixed nine-category
//! taxonomy with a severity level, and composes a deterministic,
//! template-based reply referencing the applicable legal guidance.
//!
//! The engine is immutable after construction and safe to share across
//! threads; all per-user mutable state lives in [`session::Session`].

pub mod analyzer;
pub mod catalog;
pub mod composer;
pub mod error;
pub mod ledger;
pub mod references;
pub mod sentiment;
pub mod session;

pub use catalog::{PatternCatalog, PatternRule};
pub use error::CatalogError;
pub use ledger::{AnalysisLedger, LedgerAggregate, LedgerSummary};
pub use references::LegalReferenceStore;
pub use sentiment::{DisabledSentiment, SentimentClassifier};
pub use session::{Message, Role, Session};

use shared_types::{Finding, Interaction, SentimentScore};

/// RightsEngine entry point
pub struct RightsEngine {
    catalog: PatternCatalog,
    references: LegalReferenceStore,
    classifier: Box<dyn SentimentClassifier + Send + Sync>,
}

impl RightsEngine {
    /// Load the detection catalog and reference store.
    ///
    /// Fails only on a malformed built-in pattern expression, which means a
    /// broken deployment; no runtime input can make construction fail.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: PatternCatalog::load()?,
            references: LegalReferenceStore::new(),
            classifier: Box::new(DisabledSentiment),
        })
    }

    /// Attach an optional sentiment classifier.
    ///
    /// Purely additive: no detection, composition or aggregation path reads
    /// classifier output.
    pub fn with_classifier(
        mut self,
        classifier: Box<dyn SentimentClassifier + Send + Sync>,
    ) -> Self {
        self.classifier = classifier;
        self
    }

    /// Run all detection rules against `text`
    pub fn analyze(&self, text: &str) -> Vec<Finding> {
        analyzer::analyze(&self.catalog, text)
    }

    /// Compose the reply for an already-analyzed input
    pub fn respond(&self, text: &str, findings: &[Finding]) -> String {
        composer::compose(&self.references, text, findings)
    }

    /// Analyze and compose in one step.
    ///
    /// Has no ledger side effects; accumulation goes through
    /// [`Session::submit`].
    pub fn interact(&self, text: &str) -> Interaction {
        let findings = self.analyze(text);
        let reply = self.respond(text, &findings);
        Interaction { findings, reply }
    }

    /// Best-effort sentiment distribution for `text`, if a classifier is
    /// attached and produces one
    pub fn sentiment(&self, text: &str) -> Option<Vec<SentimentScore>> {
        self.classifier.classify(text)
    }

    pub fn references(&self) -> &LegalReferenceStore {
        &self.references
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}
