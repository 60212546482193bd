//! PostgreSQL-backed `CourseCatalogue` implementation using Diesel ORM.
//!
//! Read-only view over the catalogue collaborator's courses table; the
//! enrollment core only ever looks courses up by id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CourseCatalogue, CourseCatalogueError};
use crate::domain::{Course, CourseId};

use super::models::CourseRow;
use super::pool::{DbPool, PoolError};
use super::schema::courses;

/// Diesel-backed implementation of the course catalogue port.
#[derive(Clone)]
pub struct DieselCourseCatalogue {
    pool: DbPool,
}

impl DieselCourseCatalogue {
    /// Create a new catalogue with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CourseCatalogueError {
    CourseCatalogueError::connection(error.to_string())
}

fn map_diesel_error(error: diesel::result::Error) -> CourseCatalogueError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CourseCatalogueError::connection("database connection error")
        }
        _ => CourseCatalogueError::query("database error"),
    }
}

/// Convert a database row into a validated domain course.
fn row_to_course(row: CourseRow) -> Result<Course, CourseCatalogueError> {
    Course::new(CourseId::from_uuid(row.id), row.title, row.price)
        .map_err(|err| CourseCatalogueError::query(err.to_string()))
}

#[async_trait]
impl CourseCatalogue for DieselCourseCatalogue {
    async fn find_by_id(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<Course>, CourseCatalogueError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = courses::table
            .find(course_id.as_uuid())
            .select(CourseRow::as_select())
            .first::<CourseRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_course).transpose()
    }
}
