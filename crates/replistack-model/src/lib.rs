//! Data model for S3-compatible bucket replication configuration.
//!
//! This crate defines two representations of a bucket's replication policy:
//!
//! - The **wire** types in [`types`]: mutable, `Default`-constructible structs
//!   that mirror the XML schema one-to-one. These are what a parsed
//!   GET-bucket-replication body produces, and they carry no guarantees.
//! - The **validated** type [`ValidatedReplicationConfiguration`]: produced
//!   only through a checked constructor, immutable afterwards, and the only
//!   shape the control plane stores or serializes for transmission.
//!
//! Conversion between the two is always explicit (`TryFrom` one way,
//! [`ValidatedReplicationConfiguration::into_wire`] the other), so an
//! unchecked value can never leak into a context that assumes validation
//! already happened.

pub mod error;
pub mod input;
pub mod output;
pub mod types;
pub mod validated;

pub use error::ValidationError;
pub use validated::{
    DOCUMENTED_MAX_RULES, HARD_MAX_RULES, RuleLimit, ValidatedReplicationConfiguration,
};
