use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::features::technicians::models::{initials, Technician, TechnicianStatus};
use crate::shared::badge::{Badge, HasBadge};
use crate::shared::stats::Tally;

/// Technician card of the roster page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TechnicianDto {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub status: TechnicianStatus,
    pub status_badge: Badge,
    pub current_assigned_count: u32,
    pub total_resolved_count: u32,
    pub avg_resolution_hours: f64,
    pub rating: f64,
    pub joined_on: NaiveDate,
}

impl From<&Technician> for TechnicianDto {
    fn from(t: &Technician) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            initials: initials(&t.name),
            email: t.email.clone(),
            phone: t.phone.clone(),
            status: t.status,
            status_badge: t.status.badge(),
            current_assigned_count: t.current_assigned_count,
            total_resolved_count: t.total_resolved_count,
            avg_resolution_hours: t.avg_resolution_hours,
            rating: t.rating,
            joined_on: t.joined_on,
        }
    }
}

/// Roster summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TechnicianStatsDto {
    pub total: usize,
    pub by_status: Vec<Tally<TechnicianStatus>>,
    pub current_assignments: u64,
    /// `null` when the roster is empty
    pub average_rating: Option<f64>,
}
