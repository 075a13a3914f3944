//! Operation input types for the bucket replication resource.

use crate::types::ReplicationConfiguration;

/// PutBucketReplication input.
#[derive(Debug, Clone, Default)]
pub struct PutBucketReplicationInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP header: `Content-MD5`.
    pub content_md5: Option<String>,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
    /// HTTP header: `x-amz-bucket-object-lock-token`.
    pub token: Option<String>,
    /// HTTP payload body.
    pub replication_configuration: ReplicationConfiguration,
}

/// GetBucketReplication input.
#[derive(Debug, Clone, Default)]
pub struct GetBucketReplicationInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}

/// DeleteBucketReplication input.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketReplicationInput {
    /// HTTP label (URI path).
    pub bucket: String,
    /// HTTP header: `x-amz-expected-bucket-owner`.
    pub expected_bucket_owner: Option<String>,
}
