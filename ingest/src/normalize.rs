// ingest/src/normalize.rs

use chrono::{DateTime, Utc};
use models::hospital::UNKNOWN_FACILITY_NAME;
use models::{HospitalRecord, Region};
use tracing::warn;

use crate::feed::RawHospitalEntry;

/// Normalizes one raw upstream entry into a [`HospitalRecord`].
///
/// The coercion table: absent/blank/unparsable bed counts become 0, an
/// absent facility name becomes the `"unknown"` sentinel, and anything
/// other than `"Y"` for `hvamyn` means not accepting. Entries without a
/// stable `hpid` are dropped (`None`): without an id there is nothing to
/// upsert by. Normalization is pure per input; calling it twice on the
/// same entry yields identical records.
pub fn normalize_entry(
    entry: &RawHospitalEntry,
    queried_region: &Region,
    fetched_at: DateTime<Utc>,
) -> Option<HospitalRecord> {
    let id = non_blank(entry.hpid.as_deref())?.to_string();

    let province = non_blank(entry.stage1.as_deref()).unwrap_or(&queried_region.province);
    let district = non_blank(entry.stage2.as_deref()).unwrap_or(&queried_region.district);
    // Fallbacks come from an already-validated region, so this only fails
    // on a payload region that is present but blank, which non_blank rules out.
    let region = Region::new(province, district).ok()?;

    Some(HospitalRecord {
        id,
        name: non_blank(entry.dutyname.as_deref())
            .unwrap_or(UNKNOWN_FACILITY_NAME)
            .to_string(),
        phone: non_blank(entry.dutytel3.as_deref()).map(str::to_string),
        available_beds_er: coerce_count(entry.hvec.as_deref()),
        available_beds_general: coerce_count(entry.hvgc.as_deref()),
        accepting_patients: matches!(entry.hvamyn.as_deref().map(str::trim), Some("Y")),
        region,
        fetched_at,
    })
}

/// Normalizes a whole upstream payload, skipping entries that carry no
/// facility id. An empty payload is an empty sequence, not an error.
pub fn normalize_payload(
    entries: &[RawHospitalEntry],
    queried_region: &Region,
    fetched_at: DateTime<Utc>,
) -> Vec<HospitalRecord> {
    entries
        .iter()
        .filter_map(|entry| {
            let record = normalize_entry(entry, queried_region, fetched_at);
            if record.is_none() {
                warn!(
                    region = %queried_region,
                    name = entry.dutyname.as_deref().unwrap_or(UNKNOWN_FACILITY_NAME),
                    "skipping feed entry without hpid"
                );
            }
            record
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn coerce_count(value: Option<&str>) -> u32 {
    value
        .map(str::trim)
        .and_then(|text| text.parse::<u32>().ok())
        .unwrap_or(0)
}
