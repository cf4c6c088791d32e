//! Modules layer - Infrastructure components shared by features
//!
//! Contains the in-memory record store every dashboard screen reads from.

pub mod store;
