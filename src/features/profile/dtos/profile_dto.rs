use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::profile::models::{AdminProfile, DepartmentStats};
use crate::features::technicians::models::initials;
use crate::shared::types::minute_timestamp;

/// Administrator profile as shown on the profile page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileDto {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub role: String,
    pub joined_on: NaiveDate,
    #[serde(with = "minute_timestamp")]
    #[schema(value_type = String, example = "2024-01-10 14:30")]
    pub last_login: NaiveDateTime,
    pub permissions: Vec<String>,
    pub stats: DepartmentStats,
}

impl From<&AdminProfile> for ProfileDto {
    fn from(admin: &AdminProfile) -> Self {
        Self {
            id: admin.id.clone(),
            name: admin.name.clone(),
            initials: initials(&admin.name),
            email: admin.email.clone(),
            phone: admin.phone.clone(),
            department: admin.department.clone(),
            role: admin.role.clone(),
            joined_on: admin.joined_on,
            last_login: admin.last_login,
            permissions: admin.permissions.clone(),
            stats: admin.stats.clone(),
        }
    }
}

/// Request DTO for editing the administrator's contact details.
/// Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Invalid phone number"
    ))]
    pub phone: Option<String>,
}

impl UpdateProfileDto {
    /// Trim surrounding whitespace so a blank value fails validation
    pub fn normalized(self) -> Self {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        Self {
            name: trim(self.name),
            email: trim(self.email),
            phone: trim(self.phone),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_admin;

    #[test]
    fn test_profile_dto_carries_initials() {
        let dto = ProfileDto::from(&sample_admin());
        assert_eq!(dto.initials, "TA");
        assert_eq!(dto.id, "ADMIN-001");
    }

    #[test]
    fn test_update_profile_validation() {
        let valid = UpdateProfileDto {
            email: Some("s.mitchell@cityservices.gov".to_string()),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let bad_email = UpdateProfileDto {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());

        let bad_phone = UpdateProfileDto {
            phone: Some("call me".to_string()),
            ..Default::default()
        };
        assert!(bad_phone.validate().is_err());

        let blank_name = UpdateProfileDto {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_name_is_rejected_after_normalizing() {
        let dto = UpdateProfileDto {
            name: Some("   ".to_string()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(dto.name.as_deref(), Some(""));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_normalized_trims_fields() {
        let dto = UpdateProfileDto {
            name: Some("  Sarah Mitchell ".to_string()),
            email: Some(" sarah@cityservices.gov ".to_string()),
            phone: None,
        }
        .normalized();

        assert_eq!(dto.name.as_deref(), Some("Sarah Mitchell"));
        assert_eq!(dto.email.as_deref(), Some("sarah@cityservices.gov"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_is_empty() {
        assert!(UpdateProfileDto::default().is_empty());
        assert!(!UpdateProfileDto {
            name: Some("Sarah".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
