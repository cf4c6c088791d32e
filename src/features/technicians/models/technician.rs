use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::badge::{Badge, BadgeTone, HasBadge};
use crate::shared::filtering::Searchable;
use crate::shared::stats::ClosedSet;

/// Availability of a field technician
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TechnicianStatus {
    Available,
    Busy,
    Inactive,
}

impl std::fmt::Display for TechnicianStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TechnicianStatus::Available => write!(f, "available"),
            TechnicianStatus::Busy => write!(f, "busy"),
            TechnicianStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for TechnicianStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(TechnicianStatus::Available),
            "busy" => Ok(TechnicianStatus::Busy),
            "inactive" => Ok(TechnicianStatus::Inactive),
            other => Err(format!("Unknown technician status: {}", other)),
        }
    }
}

impl ClosedSet for TechnicianStatus {
    const ALL: &'static [Self] = &[
        TechnicianStatus::Available,
        TechnicianStatus::Busy,
        TechnicianStatus::Inactive,
    ];
}

impl HasBadge for TechnicianStatus {
    fn badge(&self) -> Badge {
        match self {
            TechnicianStatus::Available => Badge::new("Available", BadgeTone::Success),
            TechnicianStatus::Busy => Badge::new("Busy", BadgeTone::Warning),
            TechnicianStatus::Inactive => Badge::new("Inactive", BadgeTone::Muted),
        }
    }
}

/// Field worker eligible for report assignment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Technician {
    #[validate(regex(
        path = "*crate::shared::validation::TECHNICIAN_ID_REGEX",
        message = "Technician id must look like TECH-001"
    ))]
    pub id: String,
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,
    #[validate(email(message = "Technician email must be a valid email address"))]
    pub email: String,
    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Technician phone is not a valid phone number"
    ))]
    pub phone: String,
    pub status: TechnicianStatus,
    pub current_assigned_count: u32,
    pub total_resolved_count: u32,
    #[validate(range(min = 0.0, message = "Average resolution time cannot be negative"))]
    pub avg_resolution_hours: f64,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0.0 and 5.0"))]
    pub rating: f64,
    pub joined_on: NaiveDate,
}

impl Technician {
    pub fn is_assignable(&self) -> bool {
        self.status != TechnicianStatus::Inactive
    }
}

impl Searchable for Technician {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.email.as_str()]
    }
}

/// First letter of each word of a name, e.g. "Mary Johnson" -> "MJ"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
