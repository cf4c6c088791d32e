pub mod technician_handler;

pub use technician_handler::*;
