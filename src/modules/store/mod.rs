//! In-memory record store
//!
//! Loads the department's reports, technicians, feedback and admin profile
//! once at startup and serves them read-only for the process lifetime.

mod error;
mod record_store;

pub use error::StoreError;
pub use record_store::RecordStore;
