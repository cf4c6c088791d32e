mod report;

pub use report::{
    CitizenContact, Coordinates, ReportFeedback, ReportPriority, ReportStatus, ServiceReport,
};
