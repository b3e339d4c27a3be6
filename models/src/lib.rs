// models/src/lib.rs

pub mod errors;
pub mod hospital;
pub mod region;
pub mod risk;

pub use errors::{ValidationError, ValidationResult};
pub use hospital::HospitalRecord;
pub use region::Region;
pub use risk::{RegionSample, RiskAssessment};
