use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::actions::ActionService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
pub fn routes(report_service: Arc<ReportService>, action_service: Arc<ActionService>) -> Router {
    let state = ReportState {
        report_service,
        action_service,
    };

    Router::new()
        .route("/api/reports", get(handlers::list_reports))
        .route("/api/reports/stats", get(handlers::get_report_stats))
        .route("/api/reports/{id}", get(handlers::get_report))
        .route(
            "/api/reports/{id}/assignment",
            post(handlers::assign_technician),
        )
        .route(
            "/api/reports/{id}/status",
            patch(handlers::update_report_status),
        )
        .with_state(state)
}
