use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::feedback::models::{FeedbackEntry, StarRating};
use crate::shared::filtering::{FilterValue, RecordFilter, SearchText, Searchable};

/// Filter configuration of the feedback page
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct FeedbackFilter {
    /// Star rating `1`-`5` or `all`
    #[serde(default)]
    #[param(value_type = Option<String>, example = "5")]
    pub rating: FilterValue<StarRating>,

    /// Exact name of the technician who resolved the report, or `all`
    #[serde(default)]
    #[param(value_type = Option<String>, example = "John Smith")]
    pub technician: FilterValue<String>,

    /// Case-insensitive text matched against comment, citizen name, report id and feedback id
    #[serde(default)]
    #[param(value_type = Option<String>, example = "pothole")]
    pub search: SearchText,
}

impl RecordFilter<FeedbackEntry> for FeedbackFilter {
    fn matches(&self, entry: &FeedbackEntry) -> bool {
        let rating_ok = match &self.rating {
            FilterValue::All => true,
            FilterValue::Only(rating) => entry.rating == rating.value(),
        };

        rating_ok
            && self.technician.admits(&entry.resolved_by)
            && self.search.matches_any(&entry.search_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filtering::apply_filter;
    use crate::shared::test_helpers::sample_feedback;

    fn entries() -> Vec<FeedbackEntry> {
        vec![
            sample_feedback("FB-001", 5, "Mary Johnson"),
            sample_feedback("FB-002", 2, "John Smith"),
            sample_feedback("FB-003", 5, "John Smith"),
        ]
    }

    fn ids(selected: &[&FeedbackEntry]) -> Vec<String> {
        selected.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_rating_filter() {
        let entries = entries();
        let filter = FeedbackFilter {
            rating: FilterValue::Only(StarRating::new(5).unwrap()),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filter(&entries, &filter)), vec!["FB-001", "FB-003"]);
    }

    #[test]
    fn test_rating_and_technician_combine() {
        let entries = entries();
        let filter = FeedbackFilter {
            rating: FilterValue::Only(StarRating::new(5).unwrap()),
            technician: FilterValue::Only("John Smith".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filter(&entries, &filter)), vec!["FB-003"]);
    }

    #[test]
    fn test_out_of_range_rating_fails_open() {
        let filter: FeedbackFilter =
            serde_json::from_value(serde_json::json!({ "rating": "9", "technician": "all" }))
                .unwrap();

        assert!(filter.rating.is_all());
        assert!(filter.technician.is_all());
        assert_eq!(apply_filter(&entries(), &filter).len(), 3);
    }

    #[test]
    fn test_search_by_feedback_id() {
        let entries = entries();
        let filter = FeedbackFilter {
            search: SearchText::new("fb-002"),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filter(&entries, &filter)), vec!["FB-002"]);
    }
}
