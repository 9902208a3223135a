//! Service layer for the persons resource.
//! - `person::repository` is the storage seam: one statement per call.
//! - `person::service` turns row counts and empty results into not-found errors.

pub mod errors;
pub mod person;
#[cfg(test)]
pub mod test_support;
