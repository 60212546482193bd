//! Enrollment command and query service.
//!
//! The command side covers direct enrollment in free courses only; paid
//! courses must go through order initiation and payment verification. The
//! query side answers membership checks and lists a learner's courses with
//! their catalogue entries.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::checkout_service::{map_catalogue_error, map_enrollment_repo_error};
use crate::domain::ports::{
    CourseCatalogue, EnrollRequest, EnrolledCourse, EnrollmentCommand, EnrollmentQuery,
    EnrollmentRepository,
};
use crate::domain::{CourseId, Enrollment, Error, UserId};

/// Enrollment service implementing [`EnrollmentCommand`] and
/// [`EnrollmentQuery`].
#[derive(Clone, Debug)]
pub struct EnrollmentService<C, R> {
    catalogue: Arc<C>,
    enrollments: Arc<R>,
}

impl<C, R> EnrollmentService<C, R> {
    /// Create the service over the catalogue and enrollment store.
    pub fn new(catalogue: Arc<C>, enrollments: Arc<R>) -> Self {
        Self {
            catalogue,
            enrollments,
        }
    }
}

#[async_trait]
impl<C, R> EnrollmentCommand for EnrollmentService<C, R>
where
    C: CourseCatalogue,
    R: EnrollmentRepository,
{
    async fn enroll(&self, request: EnrollRequest) -> Result<Enrollment, Error> {
        let course = self
            .catalogue
            .find_by_id(&request.course_id)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| Error::not_found("course not found"))?;

        if !course.is_free() {
            return Err(Error::invalid_request(
                "course requires payment; create an order instead",
            ));
        }

        let existing = self
            .enrollments
            .find_by_user_and_course(&request.user_id, &request.course_id)
            .await
            .map_err(map_enrollment_repo_error)?;
        if existing.is_some() {
            return Err(Error::conflict("already enrolled in this course"));
        }

        let enrollment = Enrollment::free(request.user_id, request.course_id);
        let created = self
            .enrollments
            .create(&enrollment)
            .await
            .map_err(map_enrollment_repo_error)?;
        info!(
            course_id = %created.course_id,
            user_id = %created.user_id,
            "enrolled in course"
        );
        Ok(created)
    }
}

#[async_trait]
impl<C, R> EnrollmentQuery for EnrollmentService<C, R>
where
    C: CourseCatalogue,
    R: EnrollmentRepository,
{
    async fn is_enrolled(&self, user_id: &UserId, course_id: &CourseId) -> Result<bool, Error> {
        let existing = self
            .enrollments
            .find_by_user_and_course(user_id, course_id)
            .await
            .map_err(map_enrollment_repo_error)?;
        Ok(existing.is_some())
    }

    async fn list_courses(&self, user_id: &UserId) -> Result<Vec<EnrolledCourse>, Error> {
        let enrollments = self
            .enrollments
            .list_by_user(user_id)
            .await
            .map_err(map_enrollment_repo_error)?;

        // A course removed from the catalogue must not hide the enrollment,
        // so the catalogue entry stays optional.
        let mut courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self
                .catalogue
                .find_by_id(&enrollment.course_id)
                .await
                .map_err(map_catalogue_error)?;
            courses.push(EnrolledCourse { enrollment, course });
        }
        Ok(courses)
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
