mod feedback;

pub use feedback::{FeedbackCategory, FeedbackEntry, StarRating};
