use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::dtos::ReportListItemDto;
use crate::features::reports::models::ReportStatus;
use crate::shared::stats::Tally;

// ============================================================================
// Query
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OverviewParams {
    /// Number of recent reports to include (1-50, default from config)
    #[param(example = 5)]
    pub limit: Option<usize>,
}

// ============================================================================
// Overview
// ============================================================================

/// Landing page of the dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardOverviewDto {
    pub total_reports: usize,
    pub by_status: Vec<Tally<ReportStatus>>,
    pub unassigned_reports: usize,
    /// Share of reports that are resolved, as a whole percentage
    pub completion_rate: u32,
    /// Most recently submitted first
    pub recent_reports: Vec<ReportListItemDto>,
}
