use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::actions::handlers;
use crate::features::actions::services::ActionService;

/// Create routes for the action journal
pub fn routes(service: Arc<ActionService>) -> Router {
    Router::new()
        .route("/api/actions", get(handlers::list_actions))
        .with_state(service)
}
