//! Error types for metric operations.
//!
//! This module defines [`MetricError`] which covers all error cases that can
//! occur when connecting to the fact store or executing metric queries.

use thiserror::Error;

/// Errors that can occur during metric operations.
#[derive(Error, Debug)]
pub enum MetricError {
    /// Failure establishing or using the fact-store connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A metric query failed to execute.
    #[error("Query error: {0}")]
    Query(String),

    /// A returned row could not be decoded into its record type.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The requested store backend is not configured.
    #[error("Store not configured: {0}")]
    NotConfigured(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`MetricError`].
pub type Result<T> = std::result::Result<T, MetricError>;
