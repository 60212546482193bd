//! Enrollment aggregate: one user's access grant to one course.
//!
//! The pair `(user_id, course_id)` is unique. The storage layer enforces the
//! constraint; this module only models the record and its two creation paths.
//! Enrollments are never mutated after creation in the flows covered here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::course::CourseId;
use super::user::UserId;

/// Payment state recorded on an enrollment.
///
/// Enrollments created by this core are born in a terminal state: `Free`
/// (free course) or `Completed` (verified payment). `Pending` and `Failed`
/// are reserved for an asynchronous webhook flow and are never assigned
/// here; the enum stays open so storage can round-trip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment initiated but not yet confirmed.
    Pending,
    /// No payment was required.
    Free,
    /// Payment verified against the gateway signature.
    Completed,
    /// Payment failed or was abandoned.
    Failed,
}

impl PaymentStatus {
    /// Stable storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Free => "free",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = EnrollmentValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "free" => Ok(Self::Free),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(EnrollmentValidationError::UnknownPaymentStatus),
        }
    }
}

/// Validation failures when constructing an [`Enrollment`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentValidationError {
    /// A completed enrollment requires a non-empty gateway payment id.
    #[error("payment id must not be empty")]
    EmptyPaymentId,
    /// A completed enrollment requires a non-empty gateway order id.
    #[error("order id must not be empty")]
    EmptyOrderId,
    /// The stored payment status is not a known value.
    #[error("unknown payment status")]
    UnknownPaymentStatus,
}

/// A persisted access grant for a user on a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Record identifier.
    pub id: Uuid,
    /// Enrolled user.
    pub user_id: UserId,
    /// Target course.
    pub course_id: CourseId,
    /// Terminal payment state at creation time.
    pub payment_status: PaymentStatus,
    /// Gateway payment id, present only for verified payments.
    pub payment_id: Option<String>,
    /// Gateway order id, present only for verified payments.
    pub order_id: Option<String>,
    /// Creation timestamp; listings sort newest first on this field.
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create a free-course enrollment, terminal on creation.
    pub fn free(user_id: UserId, course_id: CourseId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            payment_status: PaymentStatus::Free,
            payment_id: None,
            order_id: None,
            enrolled_at: Utc::now(),
        }
    }

    /// Create an enrollment for a verified payment, storing the gateway ids
    /// for audit.
    pub fn completed(
        user_id: UserId,
        course_id: CourseId,
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
    ) -> Result<Self, EnrollmentValidationError> {
        let order_id = order_id.into();
        let payment_id = payment_id.into();
        if order_id.trim().is_empty() {
            return Err(EnrollmentValidationError::EmptyOrderId);
        }
        if payment_id.trim().is_empty() {
            return Err(EnrollmentValidationError::EmptyPaymentId);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            payment_status: PaymentStatus::Completed,
            payment_id: Some(payment_id),
            order_id: Some(order_id),
            enrolled_at: Utc::now(),
        })
    }
}
