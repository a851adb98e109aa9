//! Error types for optional result enhancement.

use thiserror::Error;

/// Errors reported by an [`Enhancer`](crate::Enhancer).
///
/// None of these reach the caller of the enhancement helpers: they are logged
/// and replaced by the fallback annotation.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The enhancer has no credentials or endpoint.
    #[error("enhancer is not configured")]
    NotConfigured,

    /// The enhancer could not complete its request.
    #[error("enhancer request failed: {0}")]
    Request(String),

    /// The enhancer answered with something it could not interpret.
    #[error("malformed enhancer response: {0}")]
    Response(String),
}
