//! Domain entities, ports, and services for the enrollment core.
//!
//! Purpose: keep the enrollment and payment-verification rules free of
//! transport and storage concerns. Inbound adapters translate domain errors
//! into HTTP responses; outbound adapters implement the driven ports.

pub mod course;
pub mod enrollment;
pub mod error;
pub mod ports;
pub mod signature;
pub mod user;

mod checkout_service;
mod enrollment_service;
mod verification_service;

pub use self::checkout_service::{CheckoutService, minor_units, receipt_label};
pub use self::course::{Course, CourseId, CourseValidationError};
pub use self::enrollment::{Enrollment, EnrollmentValidationError, PaymentStatus};
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{Error, ErrorCode};
pub use self::user::{UserId, UserIdValidationError};
pub use self::verification_service::PaymentVerificationService;

/// Convenient domain result alias.
pub type ApiResult<T> = Result<T, Error>;
