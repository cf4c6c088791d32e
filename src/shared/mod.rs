pub mod badge;
pub mod constants;
pub mod filtering;
pub mod stats;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
