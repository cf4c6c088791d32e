use std::sync::Arc;

use crate::features::feedback::dtos::{FeedbackDto, FeedbackStatsDto};
use crate::features::feedback::filter::FeedbackFilter;
use crate::features::feedback::models::FeedbackCategory;
use crate::modules::store::RecordStore;
use crate::shared::filtering::apply_filter;
use crate::shared::stats::{average_one_decimal, count_by, distinct_in_order, percentage, tally_of};

pub struct FeedbackService {
    store: Arc<RecordStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Returns (entries, total_count)
    pub fn list(&self, filter: &FeedbackFilter) -> (Vec<FeedbackDto>, usize) {
        let entries: Vec<FeedbackDto> = apply_filter(self.store.feedback(), filter)
            .into_iter()
            .map(FeedbackDto::from)
            .collect();
        let total = entries.len();
        (entries, total)
    }

    pub fn stats(&self) -> FeedbackStatsDto {
        let feedback = self.store.feedback();
        let by_category = count_by(feedback, |f| f.category);
        let positive_count = tally_of(&by_category, FeedbackCategory::Positive);
        let complaint_count = tally_of(&by_category, FeedbackCategory::Complaint);

        FeedbackStatsDto {
            total: feedback.len(),
            average_rating: average_one_decimal(feedback.iter().map(|f| f64::from(f.rating))),
            positive_count,
            positive_percentage: percentage(positive_count, feedback.len()),
            complaint_count,
            technicians: distinct_in_order(feedback.iter().map(|f| f.resolved_by.as_str())),
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::feedback::models::StarRating;
    use crate::shared::filtering::{FilterValue, SearchText};
    use crate::shared::test_helpers::{builtin_store, empty_store};

    #[test]
    fn test_stats_over_builtin_feedback() {
        let stats = FeedbackService::new(builtin_store()).stats();

        assert_eq!(stats.total, 5);
        // Ratings 5, 2, 4, 1, 5
        assert_eq!(stats.average_rating, Some(3.4));
        assert_eq!(stats.positive_count, 3);
        assert_eq!(stats.positive_percentage, 60);
        assert_eq!(stats.complaint_count, 1);
        assert_eq!(tally_of(&stats.by_category, FeedbackCategory::Negative), 1);
        assert_eq!(
            stats.technicians,
            vec![
                "Mary Johnson",
                "John Smith",
                "Robert Davis",
                "Lisa Brown",
                "Michael Wilson"
            ]
        );
    }

    #[test]
    fn test_stats_without_feedback() {
        let stats = FeedbackService::new(empty_store()).stats();

        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.positive_percentage, 0);
        assert!(stats.technicians.is_empty());
        assert_eq!(stats.by_category.len(), 3);
    }

    #[test]
    fn test_list_five_star_feedback() {
        let service = FeedbackService::new(builtin_store());
        let filter = FeedbackFilter {
            rating: FilterValue::Only(StarRating::new(5).unwrap()),
            ..Default::default()
        };

        let (entries, total) = service.list(&filter);
        let ids: Vec<&str> = entries.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["FB-001", "FB-005"]);
        assert_eq!(total, 2);
    }

    #[test]
    fn test_list_search_by_report_id() {
        let service = FeedbackService::new(builtin_store());
        let filter = FeedbackFilter {
            search: SearchText::new("rpt-003"),
            ..Default::default()
        };

        let (entries, _) = service.list(&filter);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].citizen_name, "Mike Wilson");
        assert_eq!(entries[0].category_badge.label, "Positive");
    }
}
