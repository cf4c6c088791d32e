pub mod actions;
pub mod dashboard;
pub mod feedback;
pub mod profile;
pub mod reports;
pub mod technicians;
