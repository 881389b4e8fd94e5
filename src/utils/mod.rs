//! Utility modules

pub mod fuzzy;

pub use fuzzy::{ratio, MAX_SCORE};
