//! HTTP inbound adapter exposing REST endpoints.

pub mod enrollments;
pub mod error;
pub mod health;
pub mod payments;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use crate::domain::ApiResult;
