//! Shared helpers used by the persons server and its entry point.

pub mod types;
pub mod utils;
pub mod env;
