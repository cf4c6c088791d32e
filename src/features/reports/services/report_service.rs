use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{ReportDetailDto, ReportListItemDto, ReportStatsDto};
use crate::features::reports::filter::ReportFilter;
use crate::modules::store::RecordStore;
use crate::shared::filtering::apply_filter;
use crate::shared::stats::count_by;

/// Service for the department report list and detail pages
pub struct ReportService {
    store: Arc<RecordStore>,
}

impl ReportService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// List reports matching the filter, in store order.
    /// Returns (reports, total_count)
    pub fn list(&self, filter: &ReportFilter) -> (Vec<ReportListItemDto>, usize) {
        let reports: Vec<ReportListItemDto> = apply_filter(self.store.reports(), filter)
            .into_iter()
            .map(|r| ReportListItemDto::from_report(r, &self.store))
            .collect();
        let total = reports.len();
        (reports, total)
    }

    /// Get a single report by id
    pub fn get(&self, id: &str) -> Result<ReportDetailDto> {
        self.store
            .find_report(id)
            .map(|r| ReportDetailDto::from_report(r, &self.store))
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Counts over every report, regardless of any list filter
    pub fn stats(&self) -> ReportStatsDto {
        let reports = self.store.reports();
        ReportStatsDto {
            total: reports.len(),
            by_status: count_by(reports, |r| r.status),
            by_priority: count_by(reports, |r| r.priority),
            unassigned: reports.iter().filter(|r| !r.is_assigned()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{ReportPriority, ReportStatus};
    use crate::shared::filtering::{FilterValue, SearchText};
    use crate::shared::stats::tally_of;
    use crate::shared::test_helpers::{builtin_store, empty_store};

    #[test]
    fn test_list_pending_reports() {
        let service = ReportService::new(builtin_store());
        let filter = ReportFilter {
            status: FilterValue::Only(ReportStatus::Pending),
            ..Default::default()
        };

        let (reports, total) = service.list(&filter);
        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RPT-001", "RPT-004"]);
        assert_eq!(total, 2);
        assert!(reports.iter().all(|r| r.assigned_technician.is_none()));
    }

    #[test]
    fn test_list_search_matches_location() {
        let service = ReportService::new(builtin_store());
        let filter = ReportFilter {
            search: SearchText::new("oak"),
            ..Default::default()
        };

        let (reports, _) = service.list(&filter);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "RPT-005");
        assert_eq!(
            reports[0].assigned_technician.as_ref().map(|t| t.name.as_str()),
            Some("Robert Davis")
        );
    }

    #[test]
    fn test_list_without_matches_is_empty_not_error() {
        let service = ReportService::new(builtin_store());
        let filter = ReportFilter {
            status: FilterValue::Only(ReportStatus::Resolved),
            priority: FilterValue::Only(ReportPriority::High),
            ..Default::default()
        };

        let (reports, total) = service.list(&filter);
        assert!(reports.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_get_resolved_report_detail() {
        let service = ReportService::new(builtin_store());

        let detail = service.get("RPT-003").unwrap();
        assert_eq!(detail.category, "Pothole");
        assert_eq!(detail.status_badge.label, "Resolved");
        assert_eq!(detail.feedback.as_ref().map(|f| f.rating), Some(5));
        assert!(detail.resolution_notes.is_some());
        // Inactive technicians are not offered for assignment
        assert!(detail
            .available_technicians
            .iter()
            .all(|t| t.id != "TECH-004"));
        assert_eq!(detail.available_technicians.len(), 4);
    }

    #[test]
    fn test_get_unknown_report_is_not_found() {
        let service = ReportService::new(builtin_store());
        assert!(matches!(service.get("RPT-404"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_stats_ignore_filters() {
        let stats = ReportService::new(builtin_store()).stats();

        assert_eq!(stats.total, 5);
        assert_eq!(tally_of(&stats.by_status, ReportStatus::Pending), 2);
        assert_eq!(tally_of(&stats.by_status, ReportStatus::InProgress), 2);
        assert_eq!(tally_of(&stats.by_status, ReportStatus::Resolved), 1);
        assert_eq!(tally_of(&stats.by_priority, ReportPriority::High), 2);
        assert_eq!(stats.unassigned, 2);
    }

    #[test]
    fn test_stats_on_empty_store() {
        let stats = ReportService::new(empty_store()).stats();
        assert_eq!(stats.total, 0);
        assert!(stats.by_status.iter().all(|t| t.count == 0));
    }
}
