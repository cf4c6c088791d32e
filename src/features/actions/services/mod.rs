mod action_service;
mod action_sink;

pub use action_service::ActionService;
pub use action_sink::{ActionSink, JournalActionSink};
