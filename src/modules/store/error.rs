use std::path::PathBuf;

use thiserror::Error;

/// Reasons a fixture data set is rejected at load time
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {kind} '{id}': {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Report '{report_id}' is {status} but assignment does not match its status")]
    AssignmentMismatch { report_id: String, status: String },

    #[error("Report '{report_id}' references unknown technician '{technician_id}'")]
    UnknownTechnician {
        report_id: String,
        technician_id: String,
    },
}
