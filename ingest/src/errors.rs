// ingest/src/errors.rs

use thiserror::Error;

/// Errors raised by the feed client.
///
/// Network failure and malformed payload stay distinguishable so callers
/// can report them as separate categories. Data-quality problems inside a
/// well-formed payload are never errors; they are coerced away during
/// normalization.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed service key is not configured (set NMC_API_KEY)")]
    MissingServiceKey,
    #[error("upstream feed request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(#[from] quick_xml::DeError),
}
