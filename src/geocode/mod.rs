//! Upstream geocoding provider integration.
//!
//! One outbound GET per inbound request, no retries, default transport
//! timeouts. Failures are distinguished internally but all collapse to
//! the same 500 response at the handler boundary.

mod client;
mod enrich;

pub use client::{merge_query_params, GeocodeClient};
pub use enrich::{enrich, ContextEntry, Feature, GeocodeResponse};

use thiserror::Error;

/// Errors that can occur while calling the upstream provider.
///
/// Transport errors are stored with their URL stripped; the request
/// URL carries the access token in its query string and the message
/// ends up in logs and the 500 body.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected upstream payload: {0}")]
    Shape(String),
}
