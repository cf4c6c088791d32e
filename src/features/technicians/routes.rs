use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::technicians::handlers;
use crate::features::technicians::services::TechnicianService;

pub fn routes(technician_service: Arc<TechnicianService>) -> Router {
    Router::new()
        .route("/api/technicians", get(handlers::list_technicians))
        .route("/api/technicians/stats", get(handlers::get_technician_stats))
        .route("/api/technicians/{id}", get(handlers::get_technician))
        .with_state(technician_service)
}
