use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::badge::{Badge, BadgeTone, HasBadge};
use crate::shared::constants::{MAX_FEEDBACK_RATING, MIN_FEEDBACK_RATING};
use crate::shared::filtering::Searchable;
use crate::shared::stats::ClosedSet;

/// Classification recorded alongside each feedback entry.
///
/// This is asserted by whoever triaged the feedback and is never derived
/// from the numeric rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Positive,
    Negative,
    Complaint,
}

impl std::fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackCategory::Positive => write!(f, "positive"),
            FeedbackCategory::Negative => write!(f, "negative"),
            FeedbackCategory::Complaint => write!(f, "complaint"),
        }
    }
}

impl ClosedSet for FeedbackCategory {
    const ALL: &'static [Self] = &[
        FeedbackCategory::Positive,
        FeedbackCategory::Negative,
        FeedbackCategory::Complaint,
    ];
}

impl HasBadge for FeedbackCategory {
    fn badge(&self) -> Badge {
        match self {
            FeedbackCategory::Positive => Badge::new("Positive", BadgeTone::Success),
            FeedbackCategory::Negative => Badge::new("Negative", BadgeTone::Warning),
            FeedbackCategory::Complaint => Badge::new("Complaint", BadgeTone::Destructive),
        }
    }
}

/// A star rating in 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating(u8);

impl StarRating {
    pub fn new(value: u8) -> Option<Self> {
        (MIN_FEEDBACK_RATING..=MAX_FEEDBACK_RATING)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for StarRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u8>()
            .map_err(|_| format!("Rating must be a number, got '{}'", s))?;
        StarRating::new(value).ok_or_else(|| {
            format!(
                "Rating must be between {} and {}, got {}",
                MIN_FEEDBACK_RATING, MAX_FEEDBACK_RATING, value
            )
        })
    }
}

/// Citizen rating and comment on a resolved report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackEntry {
    #[validate(regex(
        path = "*crate::shared::validation::FEEDBACK_ID_REGEX",
        message = "Feedback id must look like FB-001"
    ))]
    pub id: String,
    pub report_id: String,
    pub citizen_name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    pub comment: String,
    /// Name of the technician who resolved the report
    pub resolved_by: String,
    pub submitted_on: NaiveDate,
    pub category: FeedbackCategory,
}

impl Searchable for FeedbackEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.comment.as_str(),
            self.citizen_name.as_str(),
            self.report_id.as_str(),
            self.id.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating_bounds() {
        assert_eq!(StarRating::new(1).map(|r| r.value()), Some(1));
        assert_eq!(StarRating::new(5).map(|r| r.value()), Some(5));
        assert!(StarRating::new(0).is_none());
        assert!(StarRating::new(6).is_none());
    }

    #[test]
    fn test_star_rating_from_str() {
        assert_eq!("4".parse::<StarRating>().map(|r| r.value()), Ok(4));
        assert!("9".parse::<StarRating>().is_err());
        assert!("five".parse::<StarRating>().is_err());
    }

    #[test]
    fn test_category_badges() {
        assert_eq!(FeedbackCategory::Complaint.badge().tone, BadgeTone::Destructive);
        assert_eq!(FeedbackCategory::Negative.badge().label, "Negative");
    }
}
