//! Operation output types for the bucket replication resource.

use crate::types::ReplicationConfiguration;

/// PutBucketReplication output.
#[derive(Debug, Clone, Default)]
pub struct PutBucketReplicationOutput {}

/// GetBucketReplication output.
#[derive(Debug, Clone, Default)]
pub struct GetBucketReplicationOutput {
    /// The stored replication configuration.
    pub replication_configuration: Option<ReplicationConfiguration>,
}

/// DeleteBucketReplication output.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketReplicationOutput {}
