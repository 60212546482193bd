//! PostgreSQL-backed `EnrollmentRepository` implementation using Diesel ORM.
//!
//! The unique index on `(user_id, course_id)` is the authoritative guard
//! against duplicate enrollments; this adapter translates its violation into
//! `DuplicateEnrollment` so racing callers observe a conflict instead of a
//! generic database error.

use std::str::FromStr;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{CourseId, Enrollment, PaymentStatus, UserId};

use super::models::{EnrollmentRow, NewEnrollmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::enrollments;

/// Diesel-backed implementation of the enrollment repository port.
#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    pool: DbPool,
}

impl DieselEnrollmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> EnrollmentRepositoryError {
    EnrollmentRepositoryError::connection(error.to_string())
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> EnrollmentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::NotFound => EnrollmentRepositoryError::query("record not found"),
        DieselError::DatabaseError(kind, _) => match kind {
            DatabaseErrorKind::UniqueViolation => EnrollmentRepositoryError::duplicate_enrollment(),
            DatabaseErrorKind::ClosedConnection => {
                EnrollmentRepositoryError::connection("database connection error")
            }
            _ => EnrollmentRepositoryError::query("database error"),
        },
        _ => EnrollmentRepositoryError::query("database error"),
    }
}

/// Convert a database row into a domain enrollment.
fn row_to_enrollment(row: EnrollmentRow) -> Result<Enrollment, EnrollmentRepositoryError> {
    let EnrollmentRow {
        id,
        user_id,
        course_id,
        payment_status,
        payment_id,
        order_id,
        enrolled_at,
    } = row;

    let payment_status = PaymentStatus::from_str(&payment_status)
        .map_err(|err| EnrollmentRepositoryError::query(err.to_string()))?;

    Ok(Enrollment {
        id,
        user_id: UserId::from_uuid(user_id),
        course_id: CourseId::from_uuid(course_id),
        payment_status,
        payment_id,
        order_id,
        enrolled_at,
    })
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn create(
        &self,
        enrollment: &Enrollment,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewEnrollmentRow {
            id: enrollment.id,
            user_id: *enrollment.user_id.as_uuid(),
            course_id: *enrollment.course_id.as_uuid(),
            payment_status: enrollment.payment_status.as_str(),
            payment_id: enrollment.payment_id.as_deref(),
            order_id: enrollment.order_id.as_deref(),
            enrolled_at: enrollment.enrolled_at,
        };

        diesel::insert_into(enrollments::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(enrollment.clone())
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = enrollments::table
            .filter(enrollments::user_id.eq(user_id.as_uuid()))
            .filter(enrollments::course_id.eq(course_id.as_uuid()))
            .select(EnrollmentRow::as_select())
            .first::<EnrollmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_enrollment).transpose()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = enrollments::table
            .filter(enrollments::user_id.eq(user_id.as_uuid()))
            .order(enrollments::enrolled_at.desc())
            .select(EnrollmentRow::as_select())
            .load::<EnrollmentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_enrollment).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for pure mapping helpers; queries need a live database.

    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn unique_violation_maps_to_duplicate_enrollment() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_string()),
        );
        let repo_err = map_diesel_error(diesel_err);

        assert!(
            matches!(repo_err, EnrollmentRepositoryError::DuplicateEnrollment),
            "expected DuplicateEnrollment, got {repo_err:?}"
        );
    }

    #[test]
    fn closed_connection_maps_to_connection_error() {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_string()),
        );
        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(
            repo_err,
            EnrollmentRepositoryError::Connection { .. }
        ));
    }

    #[test]
    fn row_round_trips_completed_enrollment() {
        let row = EnrollmentRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            payment_status: "completed".to_owned(),
            payment_id: Some("pay_live_1".to_owned()),
            order_id: Some("order_live_1".to_owned()),
            enrolled_at: Utc::now(),
        };

        let enrollment = row_to_enrollment(row.clone()).expect("row converts");
        assert_eq!(enrollment.payment_status, PaymentStatus::Completed);
        assert_eq!(enrollment.payment_id.as_deref(), Some("pay_live_1"));
        assert_eq!(enrollment.user_id.as_uuid(), &row.user_id);
    }

    #[test]
    fn unknown_payment_status_is_a_query_error() {
        let row = EnrollmentRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            payment_status: "refunded".to_owned(),
            payment_id: None,
            order_id: None,
            enrolled_at: Utc::now(),
        };

        let err = row_to_enrollment(row).expect_err("unknown status must fail");
        assert!(matches!(err, EnrollmentRepositoryError::Query { .. }));
    }
}
