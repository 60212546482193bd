//! Driving port for direct (free-course) enrollment.

use async_trait::async_trait;

use crate::domain::{CourseId, Enrollment, Error, UserId};

/// Request to enroll the caller in a course without the payment flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollRequest {
    /// Authenticated caller.
    pub user_id: UserId,
    /// Target course; must be free.
    pub course_id: CourseId,
}

/// Port for enrolling directly in free courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Enroll the user, rejecting paid courses and duplicates.
    async fn enroll(&self, request: EnrollRequest) -> Result<Enrollment, Error>;
}

/// Fixture used when no store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentCommand;

#[async_trait]
impl EnrollmentCommand for FixtureEnrollmentCommand {
    async fn enroll(&self, _request: EnrollRequest) -> Result<Enrollment, Error> {
        Err(Error::service_unavailable("enrollment store is not configured"))
    }
}
