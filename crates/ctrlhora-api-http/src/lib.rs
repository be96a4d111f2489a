//! HTTP API crate.
//!
//! Contains functions to communicate with the time-tracking backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod errors;
mod http;

pub use errors::HttpApiError;
pub use http::HttpApiService;
