use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::badge::{Badge, BadgeTone, HasBadge};
use crate::shared::filtering::Searchable;
use crate::shared::stats::ClosedSet;
use crate::shared::types::minute_timestamp;

/// Lifecycle state of a citizen report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::InProgress => write!(f, "in-progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "in-progress" | "in_progress" => Ok(ReportStatus::InProgress),
            "resolved" => Ok(ReportStatus::Resolved),
            other => Err(format!("Unknown report status: {}", other)),
        }
    }
}

impl ClosedSet for ReportStatus {
    const ALL: &'static [Self] = &[
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];
}

impl HasBadge for ReportStatus {
    fn badge(&self) -> Badge {
        match self {
            ReportStatus::Pending => Badge::new("Pending", BadgeTone::Destructive),
            ReportStatus::InProgress => Badge::new("In Progress", BadgeTone::Warning),
            ReportStatus::Resolved => Badge::new("Resolved", BadgeTone::Success),
        }
    }
}

/// Urgency assigned to a report by the department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportPriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ReportPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportPriority::High => write!(f, "high"),
            ReportPriority::Medium => write!(f, "medium"),
            ReportPriority::Low => write!(f, "low"),
        }
    }
}

impl FromStr for ReportPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(ReportPriority::High),
            "medium" => Ok(ReportPriority::Medium),
            "low" => Ok(ReportPriority::Low),
            other => Err(format!("Unknown report priority: {}", other)),
        }
    }
}

impl ClosedSet for ReportPriority {
    const ALL: &'static [Self] = &[
        ReportPriority::High,
        ReportPriority::Medium,
        ReportPriority::Low,
    ];
}

impl HasBadge for ReportPriority {
    fn badge(&self) -> Badge {
        match self {
            ReportPriority::High => Badge::new("High", BadgeTone::Destructive),
            ReportPriority::Medium => Badge::new("Medium", BadgeTone::Warning),
            ReportPriority::Low => Badge::new("Low", BadgeTone::Outline),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Contact details of the citizen who filed the report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CitizenContact {
    #[validate(length(min = 1, message = "Citizen name must not be empty"))]
    pub name: String,
    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Citizen phone is not a valid phone number"
    ))]
    pub phone: String,
    #[validate(email(message = "Citizen email must be a valid email address"))]
    pub email: Option<String>,
}

/// Rating left by the citizen once the report was resolved
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReportFeedback {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    pub comment: String,
    #[serde(with = "minute_timestamp")]
    #[schema(value_type = String, example = "2024-01-10 10:30")]
    pub submitted_at: NaiveDateTime,
}

/// Citizen-submitted service issue
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceReport {
    #[validate(regex(
        path = "*crate::shared::validation::REPORT_ID_REGEX",
        message = "Report id must look like RPT-001"
    ))]
    pub id: String,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
    pub description: String,
    #[validate(length(min = 1, message = "Location must not be empty"))]
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(with = "minute_timestamp")]
    pub submitted_at: NaiveDateTime,
    pub status: ReportStatus,
    pub priority: ReportPriority,
    #[serde(default)]
    pub assigned_technician_id: Option<String>,
    #[validate(nested)]
    pub citizen: CitizenContact,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub resolution_photos: Vec<String>,
    #[serde(default)]
    pub resolution_notes: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub feedback: Option<ReportFeedback>,
}

impl ServiceReport {
    pub fn is_assigned(&self) -> bool {
        self.assigned_technician_id.is_some()
    }
}

impl Searchable for ServiceReport {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.category.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        ]
    }
}
