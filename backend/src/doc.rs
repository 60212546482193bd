//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (enrollments,
//!   payments, health)
//! - **Schemas**: Request and response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//! - **Security**: Session cookie authentication scheme
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::enrollments::{
    CourseSummaryBody, EnrollRequestBody, EnrollResponseBody, EnrolledCourseBody, EnrollmentBody,
    EnrollmentCheckResponseBody, MyCoursesResponseBody,
};
use crate::inbound::http::payments::{
    CreateOrderRequestBody, FreeEnrollmentResponseBody, OrderBody, OrderCreatedResponseBody,
    PaymentKeyResponseBody, VerifyPaymentRequestBody, VerifyPaymentResponseBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by the identity service.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "SmartLearn backend API",
        description = "HTTP interface for course enrollment and payment verification."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::enrollments::enroll,
        crate::inbound::http::enrollments::check_enrollment,
        crate::inbound::http::enrollments::my_courses,
        crate::inbound::http::payments::create_order,
        crate::inbound::http::payments::verify_payment,
        crate::inbound::http::payments::payment_key,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EnrollRequestBody,
        EnrollResponseBody,
        EnrollmentBody,
        EnrollmentCheckResponseBody,
        EnrolledCourseBody,
        MyCoursesResponseBody,
        CourseSummaryBody,
        CreateOrderRequestBody,
        FreeEnrollmentResponseBody,
        OrderBody,
        OrderCreatedResponseBody,
        VerifyPaymentRequestBody,
        VerifyPaymentResponseBody,
        PaymentKeyResponseBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "enrollments", description = "Course enrollment operations"),
        (name = "payments", description = "Payment order and verification operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
