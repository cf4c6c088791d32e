use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::technicians::dtos::{TechnicianDto, TechnicianStatsDto};
use crate::features::technicians::filter::TechnicianFilter;
use crate::features::technicians::services::TechnicianService;
use crate::shared::types::{ApiResponse, Meta};

/// List technicians
#[utoipa::path(
    get,
    path = "/api/technicians",
    params(TechnicianFilter),
    responses(
        (status = 200, description = "Technicians matching the filter", body = ApiResponse<Vec<TechnicianDto>>)
    ),
    tag = "technicians"
)]
pub async fn list_technicians(
    State(service): State<Arc<TechnicianService>>,
    AppQuery(filter): AppQuery<TechnicianFilter>,
) -> Result<Json<ApiResponse<Vec<TechnicianDto>>>> {
    let (technicians, total) = service.list(&filter);
    Ok(Json(ApiResponse::success(
        Some(technicians),
        None,
        Some(Meta::total(total)),
    )))
}

/// Roster statistics
#[utoipa::path(
    get,
    path = "/api/technicians/stats",
    responses(
        (status = 200, description = "Technician statistics", body = ApiResponse<TechnicianStatsDto>)
    ),
    tag = "technicians"
)]
pub async fn get_technician_stats(
    State(service): State<Arc<TechnicianService>>,
) -> Result<Json<ApiResponse<TechnicianStatsDto>>> {
    Ok(Json(ApiResponse::success(Some(service.stats()), None, None)))
}

/// Get technician by ID
#[utoipa::path(
    get,
    path = "/api/technicians/{id}",
    params(
        ("id" = String, Path, description = "Technician ID, e.g. TECH-001")
    ),
    responses(
        (status = 200, description = "Technician found", body = ApiResponse<TechnicianDto>),
        (status = 404, description = "Technician not found")
    ),
    tag = "technicians"
)]
pub async fn get_technician(
    State(service): State<Arc<TechnicianService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<TechnicianDto>>> {
    let technician = service.get(&id)?;
    Ok(Json(ApiResponse::success(Some(technician), None, None)))
}
