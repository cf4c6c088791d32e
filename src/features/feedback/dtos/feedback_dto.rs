use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::features::feedback::models::{FeedbackCategory, FeedbackEntry};
use crate::shared::badge::{Badge, HasBadge};
use crate::shared::stats::Tally;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedbackDto {
    pub id: String,
    pub report_id: String,
    pub citizen_name: String,
    pub rating: u8,
    pub comment: String,
    pub resolved_by: String,
    pub submitted_on: NaiveDate,
    pub category: FeedbackCategory,
    pub category_badge: Badge,
}

impl From<&FeedbackEntry> for FeedbackDto {
    fn from(entry: &FeedbackEntry) -> Self {
        Self {
            id: entry.id.clone(),
            report_id: entry.report_id.clone(),
            citizen_name: entry.citizen_name.clone(),
            rating: entry.rating,
            comment: entry.comment.clone(),
            resolved_by: entry.resolved_by.clone(),
            submitted_on: entry.submitted_on,
            category: entry.category,
            category_badge: entry.category.badge(),
        }
    }
}

/// Summary cards of the feedback page. Always computed over every entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedbackStatsDto {
    pub total: usize,
    /// Mean star rating to one decimal; `null` when there is no feedback
    pub average_rating: Option<f64>,
    pub by_category: Vec<Tally<FeedbackCategory>>,
    pub positive_count: usize,
    pub positive_percentage: u32,
    pub complaint_count: usize,
    /// Technician names for the filter control, in first-appearance order
    pub technicians: Vec<String>,
}
