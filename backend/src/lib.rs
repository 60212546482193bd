//! SmartLearn backend library modules.
//!
//! The crate follows a ports-and-adapters layout: `domain` holds the
//! enrollment and payment core with its ports, `inbound` exposes the REST
//! adapter, and `outbound` implements the driven ports against PostgreSQL
//! and the Razorpay orders API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a correlation id to each request.
pub use middleware::trace::Trace;
