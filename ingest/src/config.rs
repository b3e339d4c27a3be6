// ingest/src/config.rs

use std::env;

use crate::errors::FeedError;

/// Default endpoint of the national emergency-medical-center bed feed.
pub const DEFAULT_FEED_BASE_URL: &str =
    "http://apis.data.go.kr/B552657/ErmctInfoInqireService/getEmrrmRltmUsefulSckbdInfoInqire";

/// Credentials and endpoint for the upstream feed.
///
/// Read once at process start and injected into the [`crate::FeedClient`];
/// nothing in this workspace reads the environment after startup.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub service_key: String,
    pub base_url: String,
}

impl FeedConfig {
    pub fn new(service_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Loads the feed configuration from `NMC_API_KEY` and (optionally)
    /// `NMC_FEED_BASE_URL`.
    pub fn from_env() -> Result<Self, FeedError> {
        let service_key = env::var("NMC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FeedError::MissingServiceKey)?;
        let base_url =
            env::var("NMC_FEED_BASE_URL").unwrap_or_else(|_| DEFAULT_FEED_BASE_URL.to_string());
        Ok(Self {
            service_key,
            base_url,
        })
    }
}
