mod technician_dto;

pub use technician_dto::*;
