//! Replication-service error types.
//!
//! Defines [`ReplicationServiceError`], a domain-specific error enum covering
//! the error codes the replication control plane may produce. Each variant
//! maps to a wire-level error code string and an HTTP status code, so an
//! outer HTTP layer can render the standard error body without inspecting
//! variants.

use http::StatusCode;
use replistack_model::ValidationError;
use replistack_xml::XmlError;

/// Replication service error type.
///
/// Each variant corresponds to a well-known control-plane error code.
/// [`Self::error_code`] returns the wire code and [`Self::status_code`] the
/// HTTP status an outer layer should respond with.
#[derive(Debug, thiserror::Error)]
pub enum ReplicationServiceError {
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The bucket name is already taken.
    #[error("The requested bucket name is not available: {bucket}")]
    BucketAlreadyExists {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// The bucket has no replication configuration.
    #[error("The replication configuration was not found: {bucket}")]
    ReplicationConfigurationNotFound {
        /// The bucket that has no replication configuration.
        bucket: String,
    },

    /// The submitted configuration failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The request body was not well-formed XML.
    #[error("Malformed XML: {0}")]
    MalformedXml(#[from] XmlError),

    /// The serialized configuration exceeds the size ceiling.
    #[error("The replication configuration is {size} bytes, limit is {limit}")]
    ConfigurationTooLarge {
        /// Size of the canonical encoding in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        limit: usize,
    },
}

impl ReplicationServiceError {
    /// The wire-level error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoSuchBucket { .. } => "NoSuchBucket",
            Self::BucketAlreadyExists { .. } => "BucketAlreadyExists",
            Self::ReplicationConfigurationNotFound { .. } => {
                "ReplicationConfigurationNotFoundError"
            }
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::MalformedXml(_) => "MalformedXML",
            Self::ConfigurationTooLarge { .. } => "InvalidRequest",
        }
    }

    /// The HTTP status code an outer layer should respond with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoSuchBucket { .. } | Self::ReplicationConfigurationNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::BucketAlreadyExists { .. } => StatusCode::CONFLICT,
            Self::InvalidArgument(_)
            | Self::MalformedXml(_)
            | Self::ConfigurationTooLarge { .. } => StatusCode::BAD_REQUEST,
        }
    }
}
