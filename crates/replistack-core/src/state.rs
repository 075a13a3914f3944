//! In-memory replication state.
//!
//! [`ReplicationState`] manages the collection of known buckets and the
//! replication configuration attached to each. All operations are
//! thread-safe: the bucket table is a `DashMap` and each bucket's
//! configuration slot is guarded by a `parking_lot::RwLock`.

use dashmap::DashMap;
use dashmap::mapref::one::Ref;
use parking_lot::RwLock;
use replistack_model::ValidatedReplicationConfiguration;
use tracing::{debug, info};

use crate::error::ReplicationServiceError;

/// Per-bucket replication state.
///
/// Holds at most one validated configuration. The slot starts empty and is
/// replaced wholesale on every put.
#[derive(Debug)]
pub struct BucketReplication {
    /// The bucket name.
    pub name: String,
    /// The attached replication configuration, if any.
    pub replication: RwLock<Option<ValidatedReplicationConfiguration>>,
}

impl BucketReplication {
    /// Create state for a bucket with no replication configuration.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            replication: RwLock::new(None),
        }
    }
}

/// Top-level replication state holding all buckets.
pub struct ReplicationState {
    /// Bucket name to per-bucket state mapping.
    buckets: DashMap<String, BucketReplication>,
}

impl std::fmt::Debug for ReplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplicationState")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl Default for ReplicationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplicationState {
    /// Create a new, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    /// Register a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationServiceError::BucketAlreadyExists`] if a bucket
    /// with the same name is already registered.
    pub fn create_bucket(&self, name: String) -> Result<(), ReplicationServiceError> {
        if self.buckets.contains_key(&name) {
            return Err(ReplicationServiceError::BucketAlreadyExists { bucket: name });
        }

        self.buckets
            .insert(name.clone(), BucketReplication::new(name.clone()));
        info!(bucket = %name, "bucket registered");
        Ok(())
    }

    /// Remove a bucket and any attached replication configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationServiceError::NoSuchBucket`] if the bucket does
    /// not exist.
    pub fn delete_bucket(&self, name: &str) -> Result<(), ReplicationServiceError> {
        self.buckets
            .remove(name)
            .ok_or_else(|| ReplicationServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })?;
        info!(bucket = %name, "bucket removed");
        Ok(())
    }

    /// Get an immutable reference to a bucket's state.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationServiceError::NoSuchBucket`] if the bucket does
    /// not exist.
    pub fn get_bucket(
        &self,
        name: &str,
    ) -> Result<Ref<'_, String, BucketReplication>, ReplicationServiceError> {
        self.buckets
            .get(name)
            .ok_or_else(|| ReplicationServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
    }

    /// Check whether a bucket exists.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    /// Reset all state, removing all buckets.
    pub fn reset(&self) {
        debug!("resetting all replication state");
        self.buckets.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use replistack_model::types::{Destination, ReplicationRule};

    fn one_rule() -> Vec<ReplicationRule> {
        vec![ReplicationRule {
            destination: Destination {
                bucket: "arn:aws:s3:::dest".to_owned(),
                ..Destination::default()
            },
            ..ReplicationRule::default()
        }]
    }

    #[test]
    fn test_should_create_empty_state() {
        let state = ReplicationState::new();
        assert!(!state.bucket_exists("anything"));
    }

    #[test]
    fn test_should_register_and_get_bucket() {
        let state = ReplicationState::new();
        state
            .create_bucket("my-bucket".to_owned())
            .unwrap_or_else(|e| panic!("create failed: {e}"));

        assert!(state.bucket_exists("my-bucket"));
        let bucket = state
            .get_bucket("my-bucket")
            .unwrap_or_else(|e| panic!("get failed: {e}"));
        assert_eq!(bucket.name, "my-bucket");
        assert!(bucket.replication.read().is_none());
    }

    #[test]
    fn test_should_reject_duplicate_bucket() {
        let state = ReplicationState::new();
        state
            .create_bucket("dup".to_owned())
            .unwrap_or_else(|e| panic!("first create failed: {e}"));

        let result = state.create_bucket("dup".to_owned());
        assert!(matches!(
            result,
            Err(ReplicationServiceError::BucketAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_should_delete_bucket_with_configuration() {
        let state = ReplicationState::new();
        state
            .create_bucket("b".to_owned())
            .unwrap_or_else(|e| panic!("create failed: {e}"));

        {
            let bucket = state
                .get_bucket("b")
                .unwrap_or_else(|e| panic!("get failed: {e}"));
            let config = ValidatedReplicationConfiguration::new("role", one_rule())
                .unwrap_or_else(|e| panic!("validation failed: {e}"));
            *bucket.replication.write() = Some(config);
        }

        state
            .delete_bucket("b")
            .unwrap_or_else(|e| panic!("delete failed: {e}"));
        assert!(!state.bucket_exists("b"));
    }

    #[test]
    fn test_should_reject_operations_on_missing_bucket() {
        let state = ReplicationState::new();
        assert!(matches!(
            state.get_bucket("ghost"),
            Err(ReplicationServiceError::NoSuchBucket { .. })
        ));
        assert!(matches!(
            state.delete_bucket("ghost"),
            Err(ReplicationServiceError::NoSuchBucket { .. })
        ));
    }

    #[test]
    fn test_should_reset_all_state() {
        let state = ReplicationState::new();
        state
            .create_bucket("a".to_owned())
            .unwrap_or_else(|e| panic!("create failed: {e}"));
        state
            .create_bucket("b".to_owned())
            .unwrap_or_else(|e| panic!("create failed: {e}"));

        state.reset();
        assert!(!state.bucket_exists("a"));
        assert!(!state.bucket_exists("b"));
    }
}
