use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::ReportStatus;

/// A change the administrator asked for.
///
/// Actions describe intent only. They are handed to an action sink and
/// never applied to the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardAction {
    AssignmentRequested {
        report_id: String,
        technician_id: String,
    },
    StatusUpdateRequested {
        report_id: String,
        new_status: ReportStatus,
        notes: Option<String>,
    },
    ProfileUpdateRequested {
        admin_id: String,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    },
}

impl DashboardAction {
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardAction::AssignmentRequested { .. } => "assignment_requested",
            DashboardAction::StatusUpdateRequested { .. } => "status_update_requested",
            DashboardAction::ProfileUpdateRequested { .. } => "profile_update_requested",
        }
    }

    /// Identifier of the record the action targets
    pub fn subject(&self) -> &str {
        match self {
            DashboardAction::AssignmentRequested { report_id, .. }
            | DashboardAction::StatusUpdateRequested { report_id, .. } => report_id,
            DashboardAction::ProfileUpdateRequested { admin_id, .. } => admin_id,
        }
    }
}

/// Acknowledgement that an action was accepted by the sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionReceipt {
    pub action_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub action: DashboardAction,
}

impl ActionReceipt {
    pub fn new(action: DashboardAction) -> Self {
        Self {
            action_id: Uuid::now_v7(),
            received_at: Utc::now(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_with_type_tag() {
        let action = DashboardAction::AssignmentRequested {
            report_id: "RPT-001".to_string(),
            technician_id: "TECH-003".to_string(),
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "assignment_requested");
        assert_eq!(json["report_id"], "RPT-001");
        assert_eq!(json["technician_id"], "TECH-003");
    }

    #[test]
    fn test_status_update_carries_kebab_status() {
        let action = DashboardAction::StatusUpdateRequested {
            report_id: "RPT-002".to_string(),
            new_status: ReportStatus::Resolved,
            notes: Some("Bulb replaced".to_string()),
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["new_status"], "resolved");
        assert_eq!(action.kind(), "status_update_requested");
        assert_eq!(action.subject(), "RPT-002");
    }
}
