use utoipa::{Modify, OpenApi};

use crate::features::actions::{handlers as actions_handlers, models as actions_models};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::feedback::{
    dtos as feedback_dtos, handlers as feedback_handlers, models as feedback_models,
};
use crate::features::profile::{
    dtos as profile_dtos, handlers as profile_handlers, models as profile_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::technicians::{
    dtos as technicians_dtos, handlers as technicians_handlers, models as technicians_models,
};
use crate::shared::badge::{Badge, BadgeTone};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Dashboard
        dashboard_handlers::get_overview,
        // Reports
        reports_handlers::list_reports,
        reports_handlers::get_report_stats,
        reports_handlers::get_report,
        reports_handlers::assign_technician,
        reports_handlers::update_report_status,
        // Technicians
        technicians_handlers::list_technicians,
        technicians_handlers::get_technician_stats,
        technicians_handlers::get_technician,
        // Feedback
        feedback_handlers::list_feedback,
        feedback_handlers::get_feedback_stats,
        // Profile
        profile_handlers::get_profile,
        profile_handlers::update_profile,
        // Actions
        actions_handlers::list_actions,
    ),
    components(
        schemas(
            Meta,
            ApiResponse<dashboard_dtos::DashboardOverviewDto>,
            ApiResponse<Vec<reports_dtos::ReportListItemDto>>,
            ApiResponse<reports_dtos::ReportDetailDto>,
            ApiResponse<reports_dtos::ReportStatsDto>,
            ApiResponse<Vec<technicians_dtos::TechnicianDto>>,
            ApiResponse<technicians_dtos::TechnicianDto>,
            ApiResponse<technicians_dtos::TechnicianStatsDto>,
            ApiResponse<Vec<feedback_dtos::FeedbackDto>>,
            ApiResponse<feedback_dtos::FeedbackStatsDto>,
            ApiResponse<profile_dtos::ProfileDto>,
            ApiResponse<actions_models::ActionReceipt>,
            ApiResponse<Vec<actions_models::ActionReceipt>>,
            Badge,
            BadgeTone,
            // Dashboard
            dashboard_dtos::DashboardOverviewDto,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportPriority,
            reports_models::Coordinates,
            reports_models::CitizenContact,
            reports_models::ReportFeedback,
            reports_dtos::TechnicianRefDto,
            reports_dtos::ReportListItemDto,
            reports_dtos::ReportDetailDto,
            reports_dtos::ReportStatsDto,
            reports_dtos::AssignTechnicianDto,
            reports_dtos::UpdateReportStatusDto,
            // Technicians
            technicians_models::TechnicianStatus,
            technicians_dtos::TechnicianDto,
            technicians_dtos::TechnicianStatsDto,
            // Feedback
            feedback_models::FeedbackCategory,
            feedback_dtos::FeedbackDto,
            feedback_dtos::FeedbackStatsDto,
            // Profile
            profile_models::DepartmentStats,
            profile_dtos::ProfileDto,
            profile_dtos::UpdateProfileDto,
            // Actions
            actions_models::DashboardAction,
            actions_models::ActionReceipt,
        )
    ),
    tags(
        (name = "dashboard", description = "Overview of department activity"),
        (name = "reports", description = "Citizen reports: listing, detail, assignment and status requests"),
        (name = "technicians", description = "Technician roster"),
        (name = "feedback", description = "Citizen feedback on resolved reports"),
        (name = "profile", description = "Department administrator profile"),
        (name = "actions", description = "Journal of administrator actions"),
    )
)]
pub struct ApiDoc;

/// Overrides the document info with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/dashboard/overview",
            "/api/reports",
            "/api/reports/{id}",
            "/api/reports/{id}/assignment",
            "/api/reports/{id}/status",
            "/api/technicians/{id}",
            "/api/feedback/stats",
            "/api/profile",
            "/api/actions",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Civic Desk".to_string(),
            version: "9.9.9".to_string(),
            description: "Test".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Civic Desk");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
