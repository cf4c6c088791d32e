mod technician_service;

pub use technician_service::TechnicianService;
