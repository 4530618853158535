use thiserror::Error;

/// Startup configuration failures.
///
/// A malformed pattern expression means a broken deployment, so it aborts
/// engine construction; it is never surfaced as a per-request error.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid pattern expression for rule '{label}': {source}")]
    BadPattern {
        label: String,
        #[source]
        source: regex::Error,
    },
}
