//! Catalog gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Ways a request to the upstream catalog can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the body could not be read.
    #[error("catalog request failed")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("catalog responded with status {0}")]
    Status(StatusCode),

    /// Upstream answered with an HTML page, usually a rate-limit notice.
    #[error("catalog responded with an HTML page")]
    Html,

    /// The body was not the expected JSON document.
    #[error("catalog response could not be decoded")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL cannot carry a path.
    #[error("catalog base url {0} cannot be used as a base")]
    InvalidUrl(String),
}
