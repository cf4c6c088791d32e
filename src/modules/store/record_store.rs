use std::collections::HashSet;
use std::fs;

use serde::Deserialize;
use validator::Validate;

use crate::core::config::StoreConfig;
use crate::features::feedback::models::FeedbackEntry;
use crate::features::profile::models::AdminProfile;
use crate::features::reports::models::{ReportStatus, ServiceReport};
use crate::features::technicians::models::Technician;
use crate::modules::store::StoreError;

const BUILTIN_FIXTURES: &str = include_str!("fixtures.json");

#[derive(Debug, Deserialize)]
struct FixtureSet {
    reports: Vec<ServiceReport>,
    technicians: Vec<Technician>,
    feedback: Vec<FeedbackEntry>,
    admin: AdminProfile,
}

/// Immutable snapshot of every record the dashboard shows
#[derive(Debug, Clone)]
pub struct RecordStore {
    reports: Vec<ServiceReport>,
    technicians: Vec<Technician>,
    feedback: Vec<FeedbackEntry>,
    admin: AdminProfile,
}

impl RecordStore {
    /// Load from `FIXTURES_PATH` when configured, otherwise from the
    /// compiled-in data set
    pub fn load(config: &StoreConfig) -> Result<Self, StoreError> {
        match &config.fixtures_path {
            Some(path) => {
                tracing::info!("Loading fixtures from {}", path.display());
                let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::from_json(&raw)
            }
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_FIXTURES)
    }

    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let fixtures: FixtureSet = serde_json::from_str(raw)?;
        Self::new(
            fixtures.reports,
            fixtures.technicians,
            fixtures.feedback,
            fixtures.admin,
        )
    }

    /// Build a store, rejecting record sets that break the data invariants
    pub fn new(
        reports: Vec<ServiceReport>,
        technicians: Vec<Technician>,
        feedback: Vec<FeedbackEntry>,
        admin: AdminProfile,
    ) -> Result<Self, StoreError> {
        check_records("technician", &technicians, |t| &t.id)?;
        check_records("report", &reports, |r| &r.id)?;
        check_records("feedback", &feedback, |f| &f.id)?;
        admin.validate().map_err(|e| StoreError::InvalidRecord {
            kind: "admin profile",
            id: admin.id.clone(),
            reason: e.to_string(),
        })?;

        for report in &reports {
            // Unassigned exactly while pending
            let pending = report.status == ReportStatus::Pending;
            if pending == report.is_assigned() {
                return Err(StoreError::AssignmentMismatch {
                    report_id: report.id.clone(),
                    status: report.status.to_string(),
                });
            }

            if let Some(technician_id) = &report.assigned_technician_id {
                if !technicians.iter().any(|t| &t.id == technician_id) {
                    return Err(StoreError::UnknownTechnician {
                        report_id: report.id.clone(),
                        technician_id: technician_id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            reports = reports.len(),
            technicians = technicians.len(),
            feedback = feedback.len(),
            "Record store validated"
        );

        Ok(Self {
            reports,
            technicians,
            feedback,
            admin,
        })
    }

    pub fn reports(&self) -> &[ServiceReport] {
        &self.reports
    }

    pub fn technicians(&self) -> &[Technician] {
        &self.technicians
    }

    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    pub fn admin(&self) -> &AdminProfile {
        &self.admin
    }

    pub fn find_report(&self, id: &str) -> Option<&ServiceReport> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn find_technician(&self, id: &str) -> Option<&Technician> {
        self.technicians.iter().find(|t| t.id == id)
    }
}

/// Validate each record and reject duplicate identifiers
fn check_records<T, F>(kind: &'static str, records: &[T], id_of: F) -> Result<(), StoreError>
where
    T: Validate,
    F: Fn(&T) -> &String,
{
    let mut seen = HashSet::new();
    for record in records {
        let id = id_of(record);
        record.validate().map_err(|e| StoreError::InvalidRecord {
            kind,
            id: id.clone(),
            reason: e.to_string(),
        })?;
        if !seen.insert(id.as_str()) {
            return Err(StoreError::DuplicateId {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
