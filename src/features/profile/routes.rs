use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::actions::ActionService;
use crate::features::profile::handlers::{self, ProfileState};
use crate::features::profile::services::ProfileService;

pub fn routes(profile_service: Arc<ProfileService>, action_service: Arc<ActionService>) -> Router {
    let state = ProfileState {
        profile_service,
        action_service,
    };

    Router::new()
        .route(
            "/api/profile",
            get(handlers::get_profile).patch(handlers::update_profile),
        )
        .with_state(state)
}
