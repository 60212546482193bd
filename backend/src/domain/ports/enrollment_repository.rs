//! Port for durable enrollment storage.
//!
//! The adapter must enforce the unique `(user_id, course_id)` constraint at
//! the storage layer and surface violations as
//! [`EnrollmentRepositoryError::DuplicateEnrollment`], distinguishable from
//! other failures so callers can translate it into a conflict. The services'
//! existence pre-checks are an early exit, not the enforcement mechanism:
//! two concurrent writes race past any check, and only the atomic
//! create-with-uniqueness write decides the winner.

use async_trait::async_trait;

use crate::domain::{CourseId, Enrollment, UserId};

use super::macros::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "enrollment store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "enrollment store query failed: {message}",
        /// The unique (user, course) constraint rejected the write.
        DuplicateEnrollment =>
            "an enrollment already exists for this user and course",
    }
}

/// Port for writing and reading enrollments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Persist an enrollment atomically.
    ///
    /// Fails with [`EnrollmentRepositoryError::DuplicateEnrollment`] when the
    /// `(user_id, course_id)` pair already exists.
    async fn create(&self, enrollment: &Enrollment)
    -> Result<Enrollment, EnrollmentRepositoryError>;

    /// Find the enrollment for a user on a course, if any.
    async fn find_by_user_and_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError>;

    /// List a user's enrollments, newest first.
    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError>;
}

/// Fixture implementation for tests and database-less boots.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentRepository;

#[async_trait]
impl EnrollmentRepository for FixtureEnrollmentRepository {
    async fn create(
        &self,
        enrollment: &Enrollment,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        Ok(enrollment.clone())
    }

    async fn find_by_user_and_course(
        &self,
        _user_id: &UserId,
        _course_id: &CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        Ok(None)
    }

    async fn list_by_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError> {
        Ok(Vec::new())
    }
}
