//! Port for course lookup.
//!
//! Courses are owned by a collaborator; this core only needs to resolve an
//! id to the fields driving the free/paid branch.

use async_trait::async_trait;

use crate::domain::{Course, CourseId};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by course catalogue adapters.
    pub enum CourseCatalogueError {
        /// Catalogue connection could not be established.
        Connection { message: String } =>
            "course catalogue connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "course catalogue query failed: {message}",
    }
}

/// Port for reading course reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Resolve a course id; `None` when the course does not exist.
    async fn find_by_id(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<Course>, CourseCatalogueError>;
}

/// Fixture implementation for tests that do not exercise course lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseCatalogue;

#[async_trait]
impl CourseCatalogue for FixtureCourseCatalogue {
    async fn find_by_id(
        &self,
        _course_id: &CourseId,
    ) -> Result<Option<Course>, CourseCatalogueError> {
        Ok(None)
    }
}
