mod technician;

pub use technician::{initials, Technician, TechnicianStatus};
