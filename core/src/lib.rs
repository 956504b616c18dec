//! Synchronous API client core for the partner-management service.
//!
//! # Overview
//! Creates merchant sub-accounts under a partner, lists those accounts, and
//! updates notification configuration. Builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO pattern).
//! The caller executes the actual HTTP round-trip, making the core fully
//! deterministic and testable.
//!
//! # Design
//! - `PartnerClient` is stateless — it holds only an immutable `ClientConfig`.
//! - Each operation is split into `build_*` (validates input, produces
//!   request) and `parse_*` (consumes response), so the I/O boundary is
//!   explicit and validation failures can never reach the network.
//! - Credentials are injected explicitly; there is no process-wide default.
//! - Server payloads are passed through as opaque JSON; the client does not
//!   validate account descriptions beyond decoding them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::PartnerClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    AccountDescription, AccountListing, NewAccountRequest, NotificationConfig, NotificationUpdate,
};
