use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::types::minute_timestamp;

/// Department administrator using the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminProfile {
    pub id: String,
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,
    #[validate(email(message = "Admin email must be a valid email address"))]
    pub email: String,
    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Admin phone is not a valid phone number"
    ))]
    pub phone: String,
    pub department: String,
    pub role: String,
    pub joined_on: NaiveDate,
    #[serde(with = "minute_timestamp")]
    pub last_login: NaiveDateTime,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[validate(nested)]
    pub stats: DepartmentStats,
}

/// Headline figures shown on the profile page, as recorded for the department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DepartmentStats {
    pub total_reports_managed: u32,
    pub technicians_supervised: u32,
    #[validate(range(min = 0.0))]
    pub avg_resolution_hours: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub department_rating: f64,
}
