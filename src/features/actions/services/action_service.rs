use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::actions::models::{ActionReceipt, DashboardAction};
use crate::features::actions::services::ActionSink;
use crate::features::profile::dtos::UpdateProfileDto;
use crate::features::reports::dtos::{AssignTechnicianDto, UpdateReportStatusDto};
use crate::modules::store::RecordStore;

/// Checks administrator actions against the store and forwards them to the sink
pub struct ActionService {
    store: Arc<RecordStore>,
    sink: Arc<dyn ActionSink>,
}

impl ActionService {
    pub fn new(store: Arc<RecordStore>, sink: Arc<dyn ActionSink>) -> Self {
        Self { store, sink }
    }

    pub async fn request_assignment(
        &self,
        report_id: &str,
        dto: &AssignTechnicianDto,
    ) -> Result<ActionReceipt> {
        let report = self
            .store
            .find_report(report_id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        let technician = self
            .store
            .find_technician(&dto.technician_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Technician {} not found", dto.technician_id))
            })?;

        if !technician.is_assignable() {
            return Err(AppError::Conflict(format!(
                "Technician {} is inactive and cannot be assigned",
                technician.name
            )));
        }

        if report.assigned_technician_id.as_deref() == Some(technician.id.as_str()) {
            return Err(AppError::Conflict(format!(
                "Report {} is already assigned to {}",
                report.id, technician.name
            )));
        }

        self.sink
            .submit(DashboardAction::AssignmentRequested {
                report_id: report.id.clone(),
                technician_id: technician.id.clone(),
            })
            .await
    }

    pub async fn request_status_update(
        &self,
        report_id: &str,
        dto: &UpdateReportStatusDto,
    ) -> Result<ActionReceipt> {
        let report = self
            .store
            .find_report(report_id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        let notes = dto
            .resolution_notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        self.sink
            .submit(DashboardAction::StatusUpdateRequested {
                report_id: report.id.clone(),
                new_status: dto.status,
                notes,
            })
            .await
    }

    pub async fn request_profile_update(&self, dto: &UpdateProfileDto) -> Result<ActionReceipt> {
        if dto.is_empty() {
            return Err(AppError::Validation(
                "No profile changes supplied".to_string(),
            ));
        }

        self.sink
            .submit(DashboardAction::ProfileUpdateRequested {
                admin_id: self.store.admin().id.clone(),
                name: dto.name.clone(),
                email: dto.email.clone(),
                phone: dto.phone.clone(),
            })
            .await
    }

    pub async fn list_receipts(&self) -> Result<Vec<ActionReceipt>> {
        self.sink.receipts().await
    }
}
