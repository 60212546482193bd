//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Course catalogue table.
    ///
    /// Owned by the catalogue collaborator; the enrollment core only reads
    /// the columns it needs for the free/paid branch.
    courses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display title.
        title -> Varchar,
        /// Price in major currency units; zero means free.
        price -> Float8,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Enrollments table.
    ///
    /// Carries a UNIQUE index on `(user_id, course_id)`; the repository maps
    /// its violation to `DuplicateEnrollment`.
    enrollments (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Enrolled user.
        user_id -> Uuid,
        /// Target course.
        course_id -> Uuid,
        /// Terminal payment state at creation time.
        payment_status -> Varchar,
        /// Gateway payment id, present only for verified payments.
        payment_id -> Nullable<Varchar>,
        /// Gateway order id, present only for verified payments.
        order_id -> Nullable<Varchar>,
        /// Creation timestamp; listings sort newest first on this column.
        enrolled_at -> Timestamptz,
    }
}

diesel::joinable!(enrollments -> courses (course_id));
diesel::allow_tables_to_appear_in_same_query!(courses, enrollments);
