//! Driving port for enrollment reads.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Enrollment, Error, UserId};

/// An enrollment joined with its course summary for dashboard views.
///
/// The course is optional: an enrollment outlives administrative course
/// deletion, and listings must not fail because of a dangling reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse {
    /// The enrollment record.
    pub enrollment: Enrollment,
    /// Course summary, when the course still exists.
    pub course: Option<Course>,
}

/// Port for reading a user's enrollments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    /// Whether the user holds an enrollment for the course.
    async fn is_enrolled(&self, user_id: &UserId, course_id: &CourseId) -> Result<bool, Error>;

    /// The user's enrollments with course summaries, newest first.
    async fn list_courses(&self, user_id: &UserId) -> Result<Vec<EnrolledCourse>, Error>;
}

/// Fixture reporting no enrollments.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentQuery;

#[async_trait]
impl EnrollmentQuery for FixtureEnrollmentQuery {
    async fn is_enrolled(&self, _user_id: &UserId, _course_id: &CourseId) -> Result<bool, Error> {
        Ok(false)
    }

    async fn list_courses(&self, _user_id: &UserId) -> Result<Vec<EnrolledCourse>, Error> {
        Ok(Vec::new())
    }
}
