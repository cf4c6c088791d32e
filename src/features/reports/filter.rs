use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::reports::models::{ReportPriority, ReportStatus, ServiceReport};
use crate::shared::filtering::{FilterValue, RecordFilter, SearchText, Searchable};

/// Filter configuration of the report list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportFilter {
    /// Report status (`pending`, `in-progress`, `resolved` or `all`)
    #[serde(default)]
    #[param(value_type = Option<String>, example = "pending")]
    pub status: FilterValue<ReportStatus>,

    /// Report priority (`high`, `medium`, `low` or `all`)
    #[serde(default)]
    #[param(value_type = Option<String>, example = "high")]
    pub priority: FilterValue<ReportPriority>,

    /// Case-insensitive text matched against id, category, location and description
    #[serde(default)]
    #[param(value_type = Option<String>, example = "pothole")]
    pub search: SearchText,
}

impl RecordFilter<ServiceReport> for ReportFilter {
    fn matches(&self, report: &ServiceReport) -> bool {
        self.status.admits(&report.status)
            && self.priority.admits(&report.priority)
            && self.search.matches_any(&report.search_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filtering::apply_filter;
    use crate::shared::test_helpers::sample_report;

    /// Five reports: pending, in-progress, resolved (Pothole), pending, in-progress
    fn five_reports() -> Vec<ServiceReport> {
        let statuses = [
            ReportStatus::Pending,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
            ReportStatus::Pending,
            ReportStatus::InProgress,
        ];
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut report = sample_report(&format!("RPT-00{}", i + 1), *status);
                if i == 2 {
                    report.category = "Pothole".to_string();
                    report.priority = ReportPriority::Low;
                }
                report
            })
            .collect()
    }

    fn ids(selected: &[&ServiceReport]) -> Vec<String> {
        selected.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_status_filter_keeps_store_order() {
        let reports = five_reports();
        let filter = ReportFilter {
            status: FilterValue::Only(ReportStatus::Pending),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filter(&reports, &filter)), vec!["RPT-001", "RPT-004"]);
    }

    #[test]
    fn test_status_and_search_combine() {
        let reports = five_reports();
        let filter = ReportFilter {
            status: FilterValue::Only(ReportStatus::Resolved),
            search: SearchText::new("pothole"),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filter(&reports, &filter)), vec!["RPT-003"]);
    }

    #[test]
    fn test_default_filter_returns_whole_store() {
        let reports = five_reports();
        let selected = apply_filter(&reports, &ReportFilter::default());
        assert_eq!(
            ids(&selected),
            reports.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_search_by_own_id_finds_each_report() {
        let reports = five_reports();
        for report in &reports {
            let filter = ReportFilter {
                search: SearchText::new(&report.id.to_lowercase()),
                ..Default::default()
            };
            let selected = apply_filter(&reports, &filter);
            assert!(selected.iter().any(|r| r.id == report.id));
        }
    }

    #[test]
    fn test_conflicting_filters_give_empty_result() {
        let reports = five_reports();
        let filter = ReportFilter {
            status: FilterValue::Only(ReportStatus::Pending),
            priority: FilterValue::Only(ReportPriority::Low),
            ..Default::default()
        };
        assert!(apply_filter(&reports, &filter).is_empty());
    }

    #[test]
    fn test_deserializes_from_query_string_fail_open() {
        let filter: ReportFilter =
            serde_json::from_value(serde_json::json!({ "status": "archived", "priority": "HIGH" }))
                .unwrap();
        assert!(filter.status.is_all());
        assert_eq!(filter.priority, FilterValue::Only(ReportPriority::High));
        assert!(filter.search.is_empty());
    }
}
