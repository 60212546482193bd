//! Driving port for order initiation.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Enrollment, Error, UserId};

use super::payment_gateway::GatewayOrder;

/// Request to begin enrollment for a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// Authenticated caller.
    pub user_id: UserId,
    /// Target course.
    pub course_id: CourseId,
}

/// Outcome of order initiation: the free and paid paths are mutually
/// exclusive and decided solely by the course price.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Free course: the enrollment was created synchronously and the flow is
    /// complete.
    Enrolled {
        /// The persisted enrollment.
        enrollment: Enrollment,
    },
    /// Paid course: a gateway order was minted; enrollment is deferred until
    /// payment verification.
    PaymentRequired {
        /// Gateway order descriptor for the client checkout UI.
        order: GatewayOrder,
        /// Course summary echoed to the client.
        course: Course,
        /// Public gateway key id.
        key_id: String,
    },
}

/// Port for beginning enrollment, free or paid.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutCommand: Send + Sync {
    /// Enroll immediately (free course) or mint a gateway order (paid).
    async fn create_order(&self, request: CreateOrderRequest) -> Result<CheckoutOutcome, Error>;
}

/// Fixture used when no gateway or store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCheckoutCommand;

#[async_trait]
impl CheckoutCommand for FixtureCheckoutCommand {
    async fn create_order(&self, _request: CreateOrderRequest) -> Result<CheckoutOutcome, Error> {
        Err(Error::service_unavailable("checkout is not configured"))
    }
}
