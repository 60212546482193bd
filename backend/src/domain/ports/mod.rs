//! Domain ports: driven dependencies and driving use-cases.
//!
//! Driven ports (`EnrollmentRepository`, `CourseCatalogue`, `PaymentGateway`)
//! are implemented by outbound adapters; driving ports (`CheckoutCommand`,
//! `PaymentVerificationCommand`, `EnrollmentCommand`, `EnrollmentQuery`) are
//! implemented by domain services and consumed by the HTTP adapter. Each
//! port ships a fixture implementation so the server can boot without its
//! real dependency.

pub(crate) mod macros;

mod checkout;
mod course_catalogue;
mod enrollment_command;
mod enrollment_query;
mod enrollment_repository;
mod payment_gateway;
mod payment_verification;

pub use checkout::{CheckoutCommand, CheckoutOutcome, CreateOrderRequest, FixtureCheckoutCommand};
pub use course_catalogue::{CourseCatalogue, CourseCatalogueError, FixtureCourseCatalogue};
pub use enrollment_command::{EnrollRequest, EnrollmentCommand, FixtureEnrollmentCommand};
pub use enrollment_query::{EnrolledCourse, EnrollmentQuery, FixtureEnrollmentQuery};
pub use enrollment_repository::{
    EnrollmentRepository, EnrollmentRepositoryError, FixtureEnrollmentRepository,
};
pub use payment_gateway::{
    FIXTURE_GATEWAY_KEY_ID, FixturePaymentGateway, GatewayOrder, OrderNotes, OrderRequest,
    PaymentGateway, PaymentGatewayError, RECEIPT_MAX_LEN,
};
pub use payment_verification::{
    FixturePaymentVerificationCommand, PaymentVerificationCommand, VerifyPaymentRequest,
};

#[cfg(test)]
pub use checkout::MockCheckoutCommand;
#[cfg(test)]
pub use course_catalogue::MockCourseCatalogue;
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
#[cfg(test)]
pub use enrollment_query::MockEnrollmentQuery;
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
#[cfg(test)]
pub use payment_verification::MockPaymentVerificationCommand;
