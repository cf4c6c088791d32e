use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{
    CitizenContact, Coordinates, ReportFeedback, ReportPriority, ReportStatus, ServiceReport,
};
use crate::features::technicians::models::Technician;
use crate::modules::store::RecordStore;
use crate::shared::badge::{Badge, HasBadge};
use crate::shared::stats::Tally;
use crate::shared::types::minute_timestamp;

/// Technician reference shown next to a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TechnicianRefDto {
    pub id: String,
    pub name: String,
}

impl From<&Technician> for TechnicianRefDto {
    fn from(t: &Technician) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
        }
    }
}

/// Row of the report list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportListItemDto {
    pub id: String,
    pub category: String,
    pub description: String,
    pub location: String,
    #[serde(with = "minute_timestamp")]
    #[schema(value_type = String, example = "2024-01-10 14:30")]
    pub submitted_at: NaiveDateTime,
    pub status: ReportStatus,
    pub status_badge: Badge,
    pub priority: ReportPriority,
    pub priority_badge: Badge,
    /// `None` while the report is unassigned
    pub assigned_technician: Option<TechnicianRefDto>,
    pub citizen_name: String,
    pub citizen_phone: String,
}

impl ReportListItemDto {
    pub fn from_report(report: &ServiceReport, store: &RecordStore) -> Self {
        Self {
            id: report.id.clone(),
            category: report.category.clone(),
            description: report.description.clone(),
            location: report.location.clone(),
            submitted_at: report.submitted_at,
            status: report.status,
            status_badge: report.status.badge(),
            priority: report.priority,
            priority_badge: report.priority.badge(),
            assigned_technician: assigned_technician(report, store),
            citizen_name: report.citizen.name.clone(),
            citizen_phone: report.citizen.phone.clone(),
        }
    }
}

/// Full report as shown on the detail page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportDetailDto {
    pub id: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    #[serde(with = "minute_timestamp")]
    #[schema(value_type = String, example = "2024-01-10 14:30")]
    pub submitted_at: NaiveDateTime,
    pub status: ReportStatus,
    pub status_badge: Badge,
    pub priority: ReportPriority,
    pub priority_badge: Badge,
    pub assigned_technician: Option<TechnicianRefDto>,
    pub citizen: CitizenContact,
    pub photos: Vec<String>,
    pub resolution_photos: Vec<String>,
    pub resolution_notes: Option<String>,
    pub feedback: Option<ReportFeedback>,
    /// Technicians that can currently take this report
    pub available_technicians: Vec<TechnicianRefDto>,
}

impl ReportDetailDto {
    pub fn from_report(report: &ServiceReport, store: &RecordStore) -> Self {
        let available_technicians = store
            .technicians()
            .iter()
            .filter(|t| t.is_assignable())
            .map(TechnicianRefDto::from)
            .collect();

        Self {
            id: report.id.clone(),
            category: report.category.clone(),
            description: report.description.clone(),
            location: report.location.clone(),
            coordinates: report.coordinates,
            submitted_at: report.submitted_at,
            status: report.status,
            status_badge: report.status.badge(),
            priority: report.priority,
            priority_badge: report.priority.badge(),
            assigned_technician: assigned_technician(report, store),
            citizen: report.citizen.clone(),
            photos: report.photos.clone(),
            resolution_photos: report.resolution_photos.clone(),
            resolution_notes: report.resolution_notes.clone(),
            feedback: report.feedback.clone(),
            available_technicians,
        }
    }
}

fn assigned_technician(report: &ServiceReport, store: &RecordStore) -> Option<TechnicianRefDto> {
    report
        .assigned_technician_id
        .as_deref()
        .and_then(|id| store.find_technician(id))
        .map(TechnicianRefDto::from)
}

/// Report counts over the whole department
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportStatsDto {
    pub total: usize,
    pub by_status: Vec<Tally<ReportStatus>>,
    pub by_priority: Vec<Tally<ReportPriority>>,
    pub unassigned: usize,
}

/// Request DTO for assigning a technician to a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignTechnicianDto {
    #[validate(length(min = 1, message = "Technician id is required"))]
    pub technician_id: String,
}

/// Request DTO for changing a report's status
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
    #[validate(length(max = 2000, message = "Resolution notes must not exceed 2000 characters"))]
    pub resolution_notes: Option<String>,
}
