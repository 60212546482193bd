//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types. The enrollments unique index surfaces as
//!   `DuplicateEnrollment`, which is what makes concurrent enrollment safe.

mod diesel_course_catalogue;
mod diesel_enrollment_repository;
mod models;
mod pool;
mod schema;

pub use diesel_course_catalogue::DieselCourseCatalogue;
pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
