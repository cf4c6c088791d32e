use std::sync::Arc;

use crate::features::dashboard::dtos::DashboardOverviewDto;
use crate::features::reports::dtos::ReportListItemDto;
use crate::features::reports::models::ReportStatus;
use crate::modules::store::RecordStore;
use crate::shared::constants::MAX_RECENT_REPORTS;
use crate::shared::stats::{count_by, percentage, tally_of};

/// Service for the dashboard landing page
pub struct DashboardService {
    store: Arc<RecordStore>,
    recent_limit: usize,
}

impl DashboardService {
    pub fn new(store: Arc<RecordStore>, recent_limit: usize) -> Self {
        Self {
            store,
            recent_limit: recent_limit.clamp(1, MAX_RECENT_REPORTS),
        }
    }

    // ========================================================================
    // Overview
    // ========================================================================

    pub fn get_overview(&self, limit: Option<usize>) -> DashboardOverviewDto {
        let reports = self.store.reports();
        let by_status = count_by(reports, |r| r.status);
        let resolved = tally_of(&by_status, ReportStatus::Resolved);

        let limit = limit
            .unwrap_or(self.recent_limit)
            .clamp(1, MAX_RECENT_REPORTS);

        // Stable sort keeps store order among equal timestamps
        let mut recent: Vec<_> = reports.iter().collect();
        recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        DashboardOverviewDto {
            total_reports: reports.len(),
            unassigned_reports: reports.iter().filter(|r| !r.is_assigned()).count(),
            completion_rate: percentage(resolved, reports.len()),
            recent_reports: recent
                .into_iter()
                .take(limit)
                .map(|r| ReportListItemDto::from_report(r, &self.store))
                .collect(),
            by_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{builtin_store, empty_store};

    #[test]
    fn test_overview_counts() {
        let overview = DashboardService::new(builtin_store(), 5).get_overview(None);

        assert_eq!(overview.total_reports, 5);
        assert_eq!(tally_of(&overview.by_status, ReportStatus::Pending), 2);
        assert_eq!(overview.unassigned_reports, 2);
        // 1 of 5 resolved
        assert_eq!(overview.completion_rate, 20);
    }

    #[test]
    fn test_recent_reports_newest_first() {
        let overview = DashboardService::new(builtin_store(), 5).get_overview(Some(3));

        let ids: Vec<&str> = overview.recent_reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RPT-001", "RPT-004", "RPT-002"]);
    }

    #[test]
    fn test_recent_limit_is_clamped() {
        let service = DashboardService::new(builtin_store(), 5);

        assert_eq!(service.get_overview(Some(0)).recent_reports.len(), 1);
        assert_eq!(service.get_overview(Some(500)).recent_reports.len(), 5);
    }

    #[test]
    fn test_configured_default_limit() {
        let overview = DashboardService::new(builtin_store(), 2).get_overview(None);
        assert_eq!(overview.recent_reports.len(), 2);
    }

    #[test]
    fn test_overview_of_empty_store() {
        let overview = DashboardService::new(empty_store(), 5).get_overview(None);

        assert_eq!(overview.total_reports, 0);
        assert_eq!(overview.completion_rate, 0);
        assert!(overview.recent_reports.is_empty());
    }
}
