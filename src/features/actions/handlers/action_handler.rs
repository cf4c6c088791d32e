use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::actions::models::ActionReceipt;
use crate::features::actions::services::ActionService;
use crate::shared::types::{ApiResponse, Meta};

/// List actions received this session, oldest first
#[utoipa::path(
    get,
    path = "/api/actions",
    responses(
        (status = 200, description = "Journal of received actions", body = ApiResponse<Vec<ActionReceipt>>)
    ),
    tag = "actions"
)]
pub async fn list_actions(
    State(service): State<Arc<ActionService>>,
) -> Result<Json<ApiResponse<Vec<ActionReceipt>>>> {
    let receipts = service.list_receipts().await?;
    let total = receipts.len();
    Ok(Json(ApiResponse::success(
        Some(receipts),
        None,
        Some(Meta::total(total)),
    )))
}
