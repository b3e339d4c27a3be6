// rest_api/src/config.rs

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use models::Region;

/// Regions swept by data-sync when `BEDRISK_TARGET_REGIONS` is not set.
const DEFAULT_TARGET_REGIONS: &[(&str, &str)] = &[
    ("서울특별시", "강남구"),
    ("서울특별시", "송파구"),
];

const DEFAULT_PORT: u16 = 8082;

/// Server configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub target_regions: Vec<Region>,
}

impl ServerConfig {
    /// Loads the configuration from `BEDRISK_HOST`, `BEDRISK_PORT`,
    /// `BEDRISK_DATA_DIR` and `BEDRISK_TARGET_REGIONS`, with defaults for
    /// anything unset.
    pub fn load() -> Result<Self> {
        let host = env::var("BEDRISK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("BEDRISK_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("BEDRISK_PORT '{value}' is not a valid port"))?,
            Err(_) => DEFAULT_PORT,
        };
        let data_dir = env::var("BEDRISK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/bedrisk"));
        let target_regions = match env::var("BEDRISK_TARGET_REGIONS") {
            Ok(spec) => parse_region_list(&spec)?,
            Err(_) => default_target_regions()?,
        };
        Ok(Self {
            host,
            port,
            data_dir,
            target_regions,
        })
    }
}

/// Parses a `province/district;province/district` list.
pub fn parse_region_list(spec: &str) -> Result<Vec<Region>> {
    spec.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (province, district) = entry
                .split_once('/')
                .with_context(|| format!("region entry '{entry}' must be 'province/district'"))?;
            Region::new(province.trim(), district.trim())
                .with_context(|| format!("region entry '{entry}' is invalid"))
        })
        .collect()
}

fn default_target_regions() -> Result<Vec<Region>> {
    DEFAULT_TARGET_REGIONS
        .iter()
        .map(|(province, district)| {
            Region::new(*province, *district).context("built-in target region is invalid")
        })
        .collect()
}
