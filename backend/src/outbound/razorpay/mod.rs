//! Razorpay payment gateway adapter.
//!
//! Owns transport details only: request serialisation, authentication,
//! timeout and HTTP error mapping, and JSON decoding into domain orders.
//! The key secret lives here and in the signature verifier; it never
//! crosses into the inbound layer.

mod dto;
mod http_client;

pub use http_client::RazorpayHttpGateway;
