pub mod action_handler;

pub use action_handler::*;
