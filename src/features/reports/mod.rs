pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use filter::ReportFilter;
pub use routes::routes;
pub use services::ReportService;
