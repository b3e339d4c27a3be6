// models/src/region.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// An administrative area identified by a (province, district) pair.
///
/// Both identifiers are free-text strings matching the upstream
/// administrative naming (`stage1`, `stage2`). A constructed `Region` is
/// always valid: empty or blank identifiers are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub province: String,
    pub district: String,
}

impl Region {
    pub fn new(province: impl Into<String>, district: impl Into<String>) -> ValidationResult<Self> {
        let province = province.into();
        let district = district.into();
        if province.trim().is_empty() {
            return Err(ValidationError::EmptyRegionIdentifier("province"));
        }
        if district.trim().is_empty() {
            return Err(ValidationError::EmptyRegionIdentifier("district"));
        }
        Ok(Self { province, district })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.province, self.district)
    }
}

#[cfg(test)]
mod tests {
    use super::Region;
    use crate::errors::ValidationError;

    #[test]
    fn should_create_region() {
        let region = Region::new("서울특별시", "강남구");
        assert!(region.is_ok());
        let region = region.unwrap();
        assert_eq!(region.province, "서울특별시");
        assert_eq!(region.district, "강남구");
    }

    #[test]
    fn should_not_create_region_with_empty_province() {
        let region = Region::new("", "강남구");
        assert_eq!(
            region.unwrap_err(),
            ValidationError::EmptyRegionIdentifier("province")
        );
    }

    #[test]
    fn should_not_create_region_with_blank_district() {
        let region = Region::new("서울특별시", "   ");
        assert_eq!(
            region.unwrap_err(),
            ValidationError::EmptyRegionIdentifier("district")
        );
    }

    #[test]
    fn should_display_as_province_district_pair() {
        let region = Region::new("서울특별시", "송파구").unwrap();
        assert_eq!(region.to_string(), "서울특별시 송파구");
    }
}
