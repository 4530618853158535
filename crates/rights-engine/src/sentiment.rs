//! Optional sentiment-classification seam
//!
//! A best-effort enhancement: the detection core never reads classifier
//! output, so an absent or failing classifier changes nothing about
//! findings, replies or aggregates. `None` means "no distribution
//! available" and is always a valid answer.

use shared_types::SentimentScore;

/// Pluggable sentiment classifier
pub trait SentimentClassifier {
    /// Score distribution over sentiment labels, or `None` when the
    /// classifier cannot produce one
    fn classify(&self, text: &str) -> Option<Vec<SentimentScore>>;
}

/// Default classifier: sentiment is unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSentiment;

impl SentimentClassifier for DisabledSentiment {
    fn classify(&self, _text: &str) -> Option<Vec<SentimentScore>> {
        None
    }
}
