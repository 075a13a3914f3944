//! Bucket replication operation handlers.
//!
//! Implements the put, get, and delete operations for the per-bucket
//! replication configuration. Put validates the submitted configuration,
//! checks the canonical encoding against the size ceiling, and replaces the
//! stored configuration wholesale; get returns the stored configuration; a
//! delete clears the slot and is idempotent.

use replistack_model::ValidatedReplicationConfiguration;
use replistack_model::input::{
    DeleteBucketReplicationInput, GetBucketReplicationInput, PutBucketReplicationInput,
};
use replistack_model::output::{
    DeleteBucketReplicationOutput, GetBucketReplicationOutput, PutBucketReplicationOutput,
};
use replistack_model::types::ReplicationConfiguration;
use replistack_xml::{from_xml, to_canonical_xml};
use tracing::debug;

use crate::error::ReplicationServiceError;
use crate::provider::ReplicationService;

impl ReplicationService {
    /// Attach a replication configuration to a bucket.
    ///
    /// The submitted configuration is validated under the service's rule
    /// limit, its canonical encoding is checked against the size ceiling,
    /// and it then replaces any previously stored configuration.
    ///
    /// # Errors
    ///
    /// - [`ReplicationServiceError::NoSuchBucket`] if the bucket is unknown.
    /// - [`ReplicationServiceError::InvalidArgument`] if validation fails.
    /// - [`ReplicationServiceError::ConfigurationTooLarge`] if the canonical
    ///   encoding exceeds the configured byte ceiling.
    pub fn put_bucket_replication(
        &self,
        input: PutBucketReplicationInput,
    ) -> Result<PutBucketReplicationOutput, ReplicationServiceError> {
        let bucket_name = input.bucket;

        let bucket = self.state.get_bucket(&bucket_name)?;

        let wire = input.replication_configuration;
        let validated = ValidatedReplicationConfiguration::with_limit(
            wire.role.unwrap_or_default(),
            wire.rules,
            self.config.rule_limit(),
        )?;

        let encoded = to_canonical_xml(&validated.to_wire())?;
        if encoded.len() > self.config.max_config_bytes {
            return Err(ReplicationServiceError::ConfigurationTooLarge {
                size: encoded.len(),
                limit: self.config.max_config_bytes,
            });
        }

        let rule_count = validated.rules().len();
        *bucket.replication.write() = Some(validated);

        debug!(bucket = %bucket_name, rules = rule_count, "put_bucket_replication completed");
        Ok(PutBucketReplicationOutput {})
    }

    /// Attach a replication configuration submitted as an XML body.
    ///
    /// Parses the body into the wire representation and delegates to
    /// [`Self::put_bucket_replication`].
    ///
    /// # Errors
    ///
    /// - [`ReplicationServiceError::MalformedXml`] if the body does not
    ///   parse.
    /// - Any error [`Self::put_bucket_replication`] can return.
    pub fn put_bucket_replication_xml(
        &self,
        bucket: &str,
        body: &[u8],
    ) -> Result<PutBucketReplicationOutput, ReplicationServiceError> {
        let wire: ReplicationConfiguration = from_xml(body)?;
        self.put_bucket_replication(PutBucketReplicationInput {
            bucket: bucket.to_owned(),
            replication_configuration: wire,
            ..PutBucketReplicationInput::default()
        })
    }

    /// Get the replication configuration for a bucket.
    ///
    /// # Errors
    ///
    /// - [`ReplicationServiceError::NoSuchBucket`] if the bucket is unknown.
    /// - [`ReplicationServiceError::ReplicationConfigurationNotFound`] if no
    ///   configuration is attached.
    pub fn get_bucket_replication(
        &self,
        input: GetBucketReplicationInput,
    ) -> Result<GetBucketReplicationOutput, ReplicationServiceError> {
        let bucket_name = input.bucket;

        let bucket = self.state.get_bucket(&bucket_name)?;

        let replication = bucket.replication.read();
        let config = replication.as_ref().ok_or_else(|| {
            ReplicationServiceError::ReplicationConfigurationNotFound {
                bucket: bucket_name.clone(),
            }
        })?;

        Ok(GetBucketReplicationOutput {
            replication_configuration: Some(config.to_wire()),
        })
    }

    /// Get the replication configuration for a bucket as its canonical XML
    /// encoding.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_bucket_replication`], plus
    /// [`ReplicationServiceError::MalformedXml`] if encoding fails.
    pub fn get_bucket_replication_xml(
        &self,
        bucket: &str,
    ) -> Result<String, ReplicationServiceError> {
        let output = self.get_bucket_replication(GetBucketReplicationInput {
            bucket: bucket.to_owned(),
            expected_bucket_owner: None,
        })?;

        // get_bucket_replication only succeeds with a configuration present.
        let config = output.replication_configuration.ok_or_else(|| {
            ReplicationServiceError::ReplicationConfigurationNotFound {
                bucket: bucket.to_owned(),
            }
        })?;

        Ok(to_canonical_xml(&config)?)
    }

    /// Delete the replication configuration for a bucket.
    ///
    /// Deleting when no configuration is attached succeeds; only the bucket
    /// itself must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationServiceError::NoSuchBucket`] if the bucket is
    /// unknown.
    pub fn delete_bucket_replication(
        &self,
        input: DeleteBucketReplicationInput,
    ) -> Result<DeleteBucketReplicationOutput, ReplicationServiceError> {
        let bucket_name = input.bucket;

        let bucket = self.state.get_bucket(&bucket_name)?;

        *bucket.replication.write() = None;

        debug!(bucket = %bucket_name, "delete_bucket_replication completed");
        Ok(DeleteBucketReplicationOutput {})
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
