// models/src/hospital.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Display name used when the upstream feed carries no facility name.
pub const UNKNOWN_FACILITY_NAME: &str = "unknown";

/// One emergency facility's current status for a region.
///
/// Records are created fresh on every ingestion cycle and superseded in the
/// store by facility id; the store holds at most one current record per
/// facility. Numeric fields are unsigned, so a normalized record can never
/// carry a negative bed count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    /// Stable facility identifier (`hpid` upstream).
    pub id: String,
    /// Display name (`dutyname` upstream, defaulted when absent).
    pub name: String,
    /// Emergency-room contact number (`dutytel3` upstream).
    pub phone: Option<String>,
    /// Available emergency-room beds (`hvec` upstream).
    pub available_beds_er: u32,
    /// Available general-care beds (`hvgc` upstream).
    pub available_beds_general: u32,
    /// Whether the facility reports itself as accepting patients
    /// (`hvamyn` upstream, `"Y"` or `"N"`).
    pub accepting_patients: bool,
    pub region: Region,
    /// When this record was normalized from the feed.
    pub fetched_at: DateTime<Utc>,
}

impl HospitalRecord {
    /// Whether this facility can currently take an emergency patient.
    ///
    /// All three conditions are a strict AND, so a field defaulted during
    /// normalization (0 beds, not accepting) never counts as a success.
    pub fn is_accepting_success(&self) -> bool {
        self.available_beds_er > 0 && self.available_beds_general > 0 && self.accepting_patients
    }
}

#[cfg(test)]
mod tests {
    use super::HospitalRecord;
    use crate::region::Region;
    use chrono::Utc;

    fn record(er: u32, general: u32, accepting: bool) -> HospitalRecord {
        HospitalRecord {
            id: "A1100001".to_string(),
            name: "서울살림병원".to_string(),
            phone: None,
            available_beds_er: er,
            available_beds_general: general,
            accepting_patients: accepting,
            region: Region::new("서울특별시", "강남구").unwrap(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn should_succeed_when_beds_available_and_accepting() {
        assert!(record(2, 1, true).is_accepting_success());
    }

    #[test]
    fn should_fail_when_not_accepting() {
        assert!(!record(2, 1, false).is_accepting_success());
    }

    #[test]
    fn should_fail_when_er_beds_exhausted() {
        assert!(!record(0, 5, true).is_accepting_success());
    }

    #[test]
    fn should_fail_when_general_beds_exhausted() {
        assert!(!record(3, 0, true).is_accepting_success());
    }
}
