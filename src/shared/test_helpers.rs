use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::features::feedback::models::{FeedbackCategory, FeedbackEntry};
use crate::features::profile::models::{AdminProfile, DepartmentStats};
use crate::features::reports::models::{
    CitizenContact, ReportPriority, ReportStatus, ServiceReport,
};
use crate::features::technicians::models::{Technician, TechnicianStatus};
use crate::modules::store::RecordStore;

pub fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").unwrap()
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// A valid report; assigned to TECH-001 unless pending
pub fn sample_report(id: &str, status: ReportStatus) -> ServiceReport {
    ServiceReport {
        id: id.to_string(),
        category: "Street Light".to_string(),
        description: "Light flickers after dusk".to_string(),
        location: "Elm Street".to_string(),
        coordinates: None,
        submitted_at: timestamp("2024-01-10 09:00"),
        status,
        priority: ReportPriority::Medium,
        assigned_technician_id: (status != ReportStatus::Pending).then(|| "TECH-001".to_string()),
        citizen: CitizenContact {
            name: "Test Citizen".to_string(),
            phone: "+1 (555) 000-0000".to_string(),
            email: Some("citizen@example.com".to_string()),
        },
        photos: vec![],
        resolution_photos: vec![],
        resolution_notes: None,
        feedback: None,
    }
}

pub fn sample_technician(id: &str, name: &str) -> Technician {
    Technician {
        id: id.to_string(),
        name: name.to_string(),
        email: "tech@cityservices.gov".to_string(),
        phone: "+1 (555) 101-0000".to_string(),
        status: TechnicianStatus::Available,
        current_assigned_count: 1,
        total_resolved_count: 10,
        avg_resolution_hours: 2.0,
        rating: 4.5,
        joined_on: date("2022-01-01"),
    }
}

pub fn sample_feedback(id: &str, rating: u8, resolved_by: &str) -> FeedbackEntry {
    FeedbackEntry {
        id: id.to_string(),
        report_id: "RPT-100".to_string(),
        citizen_name: "Anonymous".to_string(),
        rating,
        comment: "Fixed as promised".to_string(),
        resolved_by: resolved_by.to_string(),
        submitted_on: date("2024-01-08"),
        category: FeedbackCategory::Positive,
    }
}

pub fn sample_admin() -> AdminProfile {
    AdminProfile {
        id: "ADMIN-001".to_string(),
        name: "Test Admin".to_string(),
        email: "admin@cityservices.gov".to_string(),
        phone: "+1 (555) 200-0000".to_string(),
        department: "Public Works Department".to_string(),
        role: "Department Administrator".to_string(),
        joined_on: date("2021-06-15"),
        last_login: timestamp("2024-01-10 14:30"),
        permissions: vec!["Manage Reports".to_string()],
        stats: DepartmentStats {
            total_reports_managed: 10,
            technicians_supervised: 2,
            avg_resolution_hours: 3.0,
            department_rating: 4.5,
        },
    }
}

/// The compiled-in data set, shared the way the server shares it
pub fn builtin_store() -> Arc<RecordStore> {
    Arc::new(RecordStore::builtin().unwrap())
}

/// A store with no reports, technicians or feedback
pub fn empty_store() -> Arc<RecordStore> {
    Arc::new(RecordStore::new(vec![], vec![], vec![], sample_admin()).unwrap())
}
