// engine/src/lib.rs
//! Per-region risk-index computation.
//!
//! The risk index is the probability that a patient exhausts three
//! independent attempts without finding an accepting facility, under a
//! geometric-distribution model with per-attempt success probability `p`:
//!
//! ```text
//! P(X <= 3) = p + (1-p)p + (1-p)^2 p
//! risk      = 1 - P(X <= 3)
//! ```
//!
//! Everything in this crate is a pure, synchronous function: no I/O, no
//! shared state, no ordering assumptions among records or regions. All
//! degenerate inputs resolve to documented output values rather than errors.

use models::{HospitalRecord, Region, RegionSample, RiskAssessment};

/// Explanation attached to an assessment of a region with no facilities.
pub const NO_FACILITIES_MESSAGE: &str = "no emergency facilities registered for this region";

/// Risk index for a per-attempt success probability `p`.
///
/// Out-of-range probabilities (including NaN) are not an error: inability
/// to assess risk is reported as maximum risk, 1.0. The result is rounded
/// to 4 decimals, half away from zero.
pub fn risk_index(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return 1.0;
    }
    let miss = 1.0 - p;
    let success_within_three = p + miss * p + miss * miss * p;
    round4(1.0 - success_within_three)
}

/// Assess a region from its materialized records.
pub fn assess_records(region: &Region, records: &[HospitalRecord]) -> RiskAssessment {
    let sample = RegionSample::from_records(records);
    assess_counts(region, sample.n, sample.k)
}

/// Assess a region from precomputed counts.
///
/// An empty region (`n == 0`) is a terminal policy outcome, not an error:
/// the assessment reports maximum risk with an explanatory message,
/// regardless of `k`.
pub fn assess_counts(region: &Region, n: u32, k: u32) -> RiskAssessment {
    if n == 0 {
        return RiskAssessment {
            province: region.province.clone(),
            district: region.district.clone(),
            p: 0.0,
            k: 0,
            n: 0,
            risk_index: 1.0,
            message: Some(NO_FACILITIES_MESSAGE.to_string()),
        };
    }
    let p = RegionSample::new(n, k).success_probability();
    RiskAssessment {
        province: region.province.clone(),
        district: region.district.clone(),
        p: round4(p),
        k,
        n,
        risk_index: risk_index(p),
        message: None,
    }
}

// f64::round rounds half away from zero, which is the rounding the decimal
// representation of the upstream consumers expects.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
