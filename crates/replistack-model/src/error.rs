//! Validation errors for replication configuration construction.

/// Why a replication configuration could not be constructed.
///
/// Construction either returns a fully-populated value or one of these;
/// no partially-valid configuration ever escapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The role is missing, empty, or all whitespace.
    #[error("replication role must not be empty or blank")]
    EmptyRole,

    /// The rule list is empty.
    #[error("replication configuration must contain at least one rule")]
    NoRules,

    /// The rule list exceeds the permitted ceiling.
    #[error("replication configuration has {count} rules, limit is {limit}")]
    TooManyRules {
        /// Number of rules supplied.
        count: usize,
        /// The ceiling that was enforced.
        limit: usize,
    },
}
