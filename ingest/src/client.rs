// ingest/src/client.rs

use std::time::Duration;

use chrono::Utc;
use models::{HospitalRecord, Region};
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::errors::FeedError;
use crate::feed::FeedResponse;
use crate::normalize::normalize_payload;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// One call per region; the feed pages at 10 rows by default, which would
// truncate dense districts.
const NUM_OF_ROWS: &str = "100";

/// Async client for the per-region bed-availability feed.
///
/// Holds one shared `reqwest::Client`; safe to clone behind an `Arc` and
/// query concurrently for different regions.
#[derive(Debug)]
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetches and normalizes the current records for one region.
    ///
    /// Network and HTTP-status failures surface as [`FeedError::Upstream`],
    /// undecodable XML as [`FeedError::MalformedPayload`]. A well-formed
    /// answer with no entries is an empty vector, not an error.
    pub async fn fetch_region(&self, region: &Region) -> Result<Vec<HospitalRecord>, FeedError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("serviceKey", self.config.service_key.as_str()),
                ("STAGE1", region.province.as_str()),
                ("STAGE2", region.district.as_str()),
                ("numOfRows", NUM_OF_ROWS),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload = response.text().await?;
        let envelope: FeedResponse = quick_xml::de::from_str(&payload)?;
        if let Some(code) = envelope.result_code() {
            if code != "00" {
                warn!(
                    region = %region,
                    code,
                    msg = envelope.result_msg().unwrap_or(""),
                    "feed answered with non-normal result code"
                );
            }
        }
        let entries = envelope.into_entries();
        debug!(region = %region, entries = entries.len(), "fetched feed payload");

        Ok(normalize_payload(&entries, region, Utc::now()))
    }
}
