//! In-memory bucket replication control plane.
//!
//! This crate implements the service side of the bucket replication
//! resource: attaching a validated configuration to a bucket, reading it
//! back, and deleting it, with the configuration stored in its checked form
//! and served in its canonical XML encoding.
//!
//! # Architecture
//!
//! ```text
//! ReplicationService (operation handlers)
//!        |
//!        v
//!   ReplicationState (bucket table)
//!        |
//!        v
//!   BucketReplication (per-bucket configuration slot)
//! ```

pub mod config;
pub mod error;
mod ops;
pub mod provider;
pub mod state;

pub use config::{MAX_CONFIG_BYTES, ReplicationServiceConfig};
pub use error::ReplicationServiceError;
pub use provider::ReplicationService;
pub use state::{BucketReplication, ReplicationState};
