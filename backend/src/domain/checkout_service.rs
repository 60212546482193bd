//! Order initiation service.
//!
//! Decides the cheapest correct path for an enrollment request: free courses
//! are enrolled synchronously; paid courses get a gateway order and defer
//! enrollment until payment verification succeeds. The paid path never
//! writes an enrollment, so a gateway timeout or rejection leaves no partial
//! state behind.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    CheckoutCommand, CheckoutOutcome, CourseCatalogue, CourseCatalogueError, CreateOrderRequest,
    EnrollmentRepository, EnrollmentRepositoryError, OrderNotes, OrderRequest, PaymentGateway,
    PaymentGatewayError, RECEIPT_MAX_LEN,
};
use crate::domain::{CourseId, Enrollment, Error, UserId};

/// Currency every gateway order is denominated in.
const ORDER_CURRENCY: &str = "INR";

/// Fixed receipt prefix; suffixes identify the course and user.
const RECEIPT_PREFIX: &str = "course";

/// Characters taken from the end of each id for the receipt label.
const RECEIPT_ID_SUFFIX_LEN: usize = 8;

/// Convert a major-unit price to gateway minor units.
///
/// `round` rather than truncate: 499.5 must become 49950, not 49949.
pub fn minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

fn id_suffix(raw: &uuid::Uuid) -> String {
    let simple = raw.simple().to_string();
    let skip = simple.chars().count().saturating_sub(RECEIPT_ID_SUFFIX_LEN);
    simple.chars().skip(skip).collect()
}

/// Build the bounded receipt label for a gateway order.
///
/// The gateway caps receipts at [`RECEIPT_MAX_LEN`] characters, so the label
/// uses short id suffixes instead of full UUIDs.
pub fn receipt_label(course_id: &CourseId, user_id: &UserId) -> String {
    let label = format!(
        "{RECEIPT_PREFIX}_{}_{}",
        id_suffix(course_id.as_uuid()),
        id_suffix(user_id.as_uuid())
    );
    debug_assert!(label.chars().count() <= RECEIPT_MAX_LEN);
    label
}

pub(crate) fn map_enrollment_repo_error(error: EnrollmentRepositoryError) -> Error {
    match error {
        EnrollmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("enrollment store unavailable: {message}"))
        }
        EnrollmentRepositoryError::Query { message } => {
            Error::internal(format!("enrollment store error: {message}"))
        }
        // The authoritative duplicate signal; racing callers land here.
        EnrollmentRepositoryError::DuplicateEnrollment => {
            Error::conflict("already enrolled in this course")
        }
    }
}

pub(crate) fn map_catalogue_error(error: CourseCatalogueError) -> Error {
    match error {
        CourseCatalogueError::Connection { message } => {
            Error::service_unavailable(format!("course catalogue unavailable: {message}"))
        }
        CourseCatalogueError::Query { message } => {
            Error::internal(format!("course catalogue error: {message}"))
        }
    }
}

fn map_gateway_error(error: PaymentGatewayError) -> Error {
    error!(error = %error, "payment gateway order creation failed");
    Error::payment_gateway(format!("payment order creation failed: {error}"))
}

/// Order initiation service implementing [`CheckoutCommand`].
#[derive(Clone)]
pub struct CheckoutService<C, R, G> {
    catalogue: Arc<C>,
    enrollments: Arc<R>,
    gateway: Arc<G>,
}

impl<C, R, G> CheckoutService<C, R, G> {
    /// Create the service from its injected capabilities.
    pub fn new(catalogue: Arc<C>, enrollments: Arc<R>, gateway: Arc<G>) -> Self {
        Self {
            catalogue,
            enrollments,
            gateway,
        }
    }
}

#[async_trait]
impl<C, R, G> CheckoutCommand for CheckoutService<C, R, G>
where
    C: CourseCatalogue,
    R: EnrollmentRepository,
    G: PaymentGateway,
{
    async fn create_order(&self, request: CreateOrderRequest) -> Result<CheckoutOutcome, Error> {
        let course = self
            .catalogue
            .find_by_id(&request.course_id)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| Error::not_found("course not found"))?;

        // Early exit only; the store's uniqueness constraint is the
        // enforcement under concurrency.
        let existing = self
            .enrollments
            .find_by_user_and_course(&request.user_id, &request.course_id)
            .await
            .map_err(map_enrollment_repo_error)?;
        if existing.is_some() {
            return Err(Error::conflict("already enrolled in this course"));
        }

        if course.is_free() {
            let enrollment = Enrollment::free(request.user_id, request.course_id);
            let created = self
                .enrollments
                .create(&enrollment)
                .await
                .map_err(map_enrollment_repo_error)?;
            info!(
                course_id = %created.course_id,
                user_id = %created.user_id,
                "enrolled in free course"
            );
            return Ok(CheckoutOutcome::Enrolled {
                enrollment: created,
            });
        }

        let order_request = OrderRequest {
            amount_minor: minor_units(course.price),
            currency: ORDER_CURRENCY.to_owned(),
            receipt: receipt_label(&course.id, &request.user_id),
            notes: OrderNotes {
                course_id: course.id.to_string(),
                user_id: request.user_id.to_string(),
                course_title: course.title.clone(),
            },
        };
        let order = self
            .gateway
            .create_order(&order_request)
            .await
            .map_err(map_gateway_error)?;
        info!(
            course_id = %course.id,
            order_id = %order.id,
            "created payment order"
        );

        Ok(CheckoutOutcome::PaymentRequired {
            order,
            course,
            key_id: self.gateway.key_id().to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "checkout_service_tests.rs"]
mod tests;
