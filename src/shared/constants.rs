/// Query value meaning "no constraint" for any filter option
pub const FILTER_ALL: &str = "all";

/// Upper bound for the overview's recent reports list
pub const MAX_RECENT_REPORTS: usize = 50;

/// Lowest and highest feedback rating a citizen can give
pub const MIN_FEEDBACK_RATING: u8 = 1;
pub const MAX_FEEDBACK_RATING: u8 = 5;

/// Display format for report and feedback timestamps (e.g. "2024-01-10 14:30")
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
