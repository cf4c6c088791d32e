use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::actions::models::ActionReceipt;
use crate::features::actions::ActionService;
use crate::features::profile::dtos::{ProfileDto, UpdateProfileDto};
use crate::features::profile::services::ProfileService;
use crate::shared::types::ApiResponse;

#[derive(Clone)]
pub struct ProfileState {
    pub profile_service: Arc<ProfileService>,
    pub action_service: Arc<ActionService>,
}

/// Get the administrator profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Administrator profile", body = ApiResponse<ProfileDto>)
    ),
    tag = "profile"
)]
pub async fn get_profile(
    State(state): State<ProfileState>,
) -> Result<Json<ApiResponse<ProfileDto>>> {
    let profile = state.profile_service.get_profile();
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Request a profile update
///
/// The change is recorded as an action; the profile itself stays as loaded.
#[utoipa::path(
    patch,
    path = "/api/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 202, description = "Profile update request accepted", body = ApiResponse<ActionReceipt>),
        (status = 400, description = "Validation error")
    ),
    tag = "profile"
)]
pub async fn update_profile(
    State(state): State<ProfileState>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<(StatusCode, Json<ApiResponse<ActionReceipt>>)> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = state.action_service.request_profile_update(&dto).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(
            Some(receipt),
            Some("Profile update request recorded".to_string()),
            None,
        )),
    ))
}
