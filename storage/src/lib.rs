// storage/src/lib.rs
//! Embedded persistence for hospital records.
//!
//! A [`BedStore`] keeps at most one current record per facility id. Records
//! live JSON-encoded in one sled tree keyed by id; a second tree indexes
//! `{province}\x1f{district}\x1f{id}` so region reads are a prefix scan.

use std::path::Path;

use models::{HospitalRecord, Region};
use thiserror::Error;
use tracing::debug;

const RECORDS_TREE: &str = "hospital_records";
const REGION_INDEX_TREE: &str = "region_index";
// Unit separator; cannot occur in administrative names or hpids.
const KEY_SEP: u8 = 0x1f;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage engine error: {0}")]
    Sled(#[from] sled::Error),
    #[error("stored record could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent store of the current per-facility records.
pub struct BedStore {
    db: sled::Db,
    records: sled::Tree,
    region_index: sled::Tree,
}

impl BedStore {
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_db(sled::open(path)?)
    }

    /// An in-memory store backed by a temporary sled database, for tests.
    pub fn temporary() -> StoreResult<Self> {
        Self::from_db(sled::Config::new().temporary(true).open()?)
    }

    fn from_db(db: sled::Db) -> StoreResult<Self> {
        let records = db.open_tree(RECORDS_TREE)?;
        let region_index = db.open_tree(REGION_INDEX_TREE)?;
        Ok(Self {
            db,
            records,
            region_index,
        })
    }

    /// Inserts or replaces the record for its facility id.
    ///
    /// When a facility reappears under a different region, the stale index
    /// entry is removed first so the facility is never listed under two
    /// regions at once.
    pub fn upsert(&self, record: &HospitalRecord) -> StoreResult<()> {
        if let Some(existing) = self.records.get(record.id.as_bytes())? {
            let existing: HospitalRecord = serde_json::from_slice(&existing)?;
            if existing.region != record.region {
                self.region_index
                    .remove(index_key(&existing.region, &existing.id))?;
            }
        }
        self.records
            .insert(record.id.as_bytes(), serde_json::to_vec(record)?)?;
        self.region_index
            .insert(index_key(&record.region, &record.id), record.id.as_bytes())?;
        Ok(())
    }

    /// Upserts a batch of records, returning how many were written.
    pub fn upsert_all(&self, records: &[HospitalRecord]) -> StoreResult<usize> {
        for record in records {
            self.upsert(record)?;
        }
        self.db.flush()?;
        debug!(count = records.len(), "upserted hospital records");
        Ok(records.len())
    }

    /// All current records for one region, via the index prefix scan.
    pub fn records_for_region(&self, region: &Region) -> StoreResult<Vec<HospitalRecord>> {
        let mut found = Vec::new();
        for entry in self.region_index.scan_prefix(region_prefix(region)) {
            let (_, id) = entry?;
            if let Some(bytes) = self.records.get(&id)? {
                found.push(serde_json::from_slice(&bytes)?);
            }
        }
        Ok(found)
    }

    /// Number of facilities currently held, across all regions.
    pub fn facility_count(&self) -> usize {
        self.records.len()
    }

    pub fn flush(&self) -> StoreResult<()> {
        self.db.flush()?;
        Ok(())
    }
}

fn region_prefix(region: &Region) -> Vec<u8> {
    let mut key =
        Vec::with_capacity(region.province.len() + region.district.len() + 2);
    key.extend_from_slice(region.province.as_bytes());
    key.push(KEY_SEP);
    key.extend_from_slice(region.district.as_bytes());
    key.push(KEY_SEP);
    key
}

fn index_key(region: &Region, id: &str) -> Vec<u8> {
    let mut key = region_prefix(region);
    key.extend_from_slice(id.as_bytes());
    key
}

#[cfg(test)]
mod tests {
    use super::BedStore;
    use chrono::Utc;
    use models::{HospitalRecord, Region};

    fn record(id: &str, region: &Region, er: u32) -> HospitalRecord {
        HospitalRecord {
            id: id.to_string(),
            name: "병원".to_string(),
            phone: None,
            available_beds_er: er,
            available_beds_general: 1,
            accepting_patients: true,
            region: region.clone(),
            fetched_at: Utc::now(),
        }
    }

    fn gangnam() -> Region {
        Region::new("서울특별시", "강남구").unwrap()
    }

    fn songpa() -> Region {
        Region::new("서울특별시", "송파구").unwrap()
    }

    #[test]
    fn should_upsert_and_read_back_by_region() {
        let store = BedStore::temporary().unwrap();
        store
            .upsert_all(&[record("A1", &gangnam(), 2), record("A2", &songpa(), 1)])
            .unwrap();

        let records = store.records_for_region(&gangnam()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "A1");
        assert_eq!(store.facility_count(), 2);
    }

    #[test]
    fn should_supersede_prior_record_for_same_facility() {
        let store = BedStore::temporary().unwrap();
        store.upsert(&record("A1", &gangnam(), 2)).unwrap();
        store.upsert(&record("A1", &gangnam(), 0)).unwrap();

        let records = store.records_for_region(&gangnam()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].available_beds_er, 0);
        assert_eq!(store.facility_count(), 1);
    }

    #[test]
    fn should_reindex_facility_that_moved_region() {
        let store = BedStore::temporary().unwrap();
        store.upsert(&record("A1", &gangnam(), 2)).unwrap();
        store.upsert(&record("A1", &songpa(), 2)).unwrap();

        assert!(store.records_for_region(&gangnam()).unwrap().is_empty());
        let records = store.records_for_region(&songpa()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(store.facility_count(), 1);
    }

    #[test]
    fn should_return_empty_for_unknown_region() {
        let store = BedStore::temporary().unwrap();
        let region = Region::new("제주특별자치도", "서귀포시").unwrap();
        assert!(store.records_for_region(&region).unwrap().is_empty());
    }

    #[test]
    fn should_not_confuse_regions_sharing_a_prefix() {
        let store = BedStore::temporary().unwrap();
        let a = Region::new("경기도", "광주시").unwrap();
        let b = Region::new("경기도 광주시", "오포읍").unwrap();
        store.upsert(&record("A1", &a, 2)).unwrap();
        store.upsert(&record("B1", &b, 2)).unwrap();

        assert_eq!(store.records_for_region(&a).unwrap().len(), 1);
        assert_eq!(store.records_for_region(&b).unwrap().len(), 1);
    }
}
