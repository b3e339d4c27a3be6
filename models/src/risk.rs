// models/src/risk.rs

use serde::{Deserialize, Serialize};

use crate::hospital::HospitalRecord;

/// Per-region success counts, derived and ephemeral.
///
/// `n` is the number of facilities observed for the region and `k` the
/// number currently satisfying the acceptance-success predicate. The counts
/// are an unordered aggregate: record ordering never affects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSample {
    pub n: u32,
    pub k: u32,
}

impl RegionSample {
    pub fn new(n: u32, k: u32) -> Self {
        Self { n, k }
    }

    pub fn from_records(records: &[HospitalRecord]) -> Self {
        let n = records.len() as u32;
        let k = records
            .iter()
            .filter(|record| record.is_accepting_success())
            .count() as u32;
        Self { n, k }
    }

    /// Empirical per-attempt success probability, `k / n`.
    ///
    /// Policy value 0.0 when the sample is empty. Counts supplied by a
    /// caller are not re-validated here; a `k > n` sample yields a value
    /// above 1.0, which the risk engine treats as maximum risk.
    pub fn success_probability(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            f64::from(self.k) / f64::from(self.n)
        }
    }
}

/// Risk-engine output for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub province: String,
    pub district: String,
    /// Empirical success probability, rounded to 4 decimals.
    pub p: f64,
    pub k: u32,
    pub n: u32,
    /// Probability of exhausting three attempts without acceptance,
    /// in [0, 1], rounded to 4 decimals.
    pub risk_index: f64,
    /// Human-readable explanation, present exactly when `n == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
