mod action;

pub use action::{ActionReceipt, DashboardAction};
