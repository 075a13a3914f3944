//! Wire types for the bucket replication XML schema.
//!
//! These structs mirror the `ReplicationConfiguration` document element by
//! element. They are deliberately unchecked: every field is public, every
//! struct is `Default`, and nothing here enforces the construction-time
//! invariants. Validation lives in [`crate::validated`].

use serde::{Deserialize, Serialize};

/// Replication rule status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicationRuleStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl ReplicationRuleStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for ReplicationRuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ReplicationRuleStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// DeleteMarkerReplication status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeleteMarkerReplicationStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl DeleteMarkerReplicationStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for DeleteMarkerReplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DeleteMarkerReplicationStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// ExistingObjectReplication status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExistingObjectReplicationStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl ExistingObjectReplicationStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for ExistingObjectReplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ExistingObjectReplicationStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// SseKmsEncryptedObjects status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SseKmsEncryptedObjectsStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl SseKmsEncryptedObjectsStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for SseKmsEncryptedObjectsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SseKmsEncryptedObjectsStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// ReplicaModifications status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicaModificationsStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl ReplicaModificationsStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for ReplicaModificationsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ReplicaModificationsStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// ReplicationTime status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicationTimeStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl ReplicationTimeStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for ReplicationTimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ReplicationTimeStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// Metrics status enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricsStatus {
    /// Default variant.
    #[default]
    Enabled,
    Disabled,
}

impl MetricsStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for MetricsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MetricsStatus {
    fn from(s: &str) -> Self {
        match s {
            "Disabled" => Self::Disabled,
            _ => Self::default(),
        }
    }
}

/// Owner override enum for access control translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OwnerOverride {
    /// Default variant.
    #[default]
    Destination,
}

impl OwnerOverride {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Destination => "Destination",
        }
    }
}

impl std::fmt::Display for OwnerOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OwnerOverride {
    fn from(_: &str) -> Self {
        Self::Destination
    }
}

/// Storage class for replicated objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "REDUCED_REDUNDANCY")]
    ReducedRedundancy,
    #[serde(rename = "STANDARD_IA")]
    StandardIa,
    #[serde(rename = "ONEZONE_IA")]
    OnezoneIa,
    #[serde(rename = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[serde(rename = "GLACIER")]
    Glacier,
    #[serde(rename = "GLACIER_IR")]
    GlacierIr,
    #[serde(rename = "DEEP_ARCHIVE")]
    DeepArchive,
    #[serde(rename = "OUTPOSTS")]
    Outposts,
}

impl StorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::ReducedRedundancy => "REDUCED_REDUNDANCY",
            Self::StandardIa => "STANDARD_IA",
            Self::OnezoneIa => "ONEZONE_IA",
            Self::IntelligentTiering => "INTELLIGENT_TIERING",
            Self::Glacier => "GLACIER",
            Self::GlacierIr => "GLACIER_IR",
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::Outposts => "OUTPOSTS",
        }
    }
}

impl std::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StorageClass {
    fn from(s: &str) -> Self {
        match s {
            "REDUCED_REDUNDANCY" => Self::ReducedRedundancy,
            "STANDARD_IA" => Self::StandardIa,
            "ONEZONE_IA" => Self::OnezoneIa,
            "INTELLIGENT_TIERING" => Self::IntelligentTiering,
            "GLACIER" => Self::Glacier,
            "GLACIER_IR" => Self::GlacierIr,
            "DEEP_ARCHIVE" => Self::DeepArchive,
            "OUTPOSTS" => Self::Outposts,
            _ => Self::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A single key/value tag used in rule filters.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Conjunction of filter predicates; matches objects satisfying all of them.
#[derive(Debug, Clone, Default)]
pub struct ReplicationRuleAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

/// Selects the subset of objects a rule applies to.
///
/// Exactly one of `prefix`, `tag`, or `and` is expected on the wire; the
/// wire type does not enforce that.
#[derive(Debug, Clone, Default)]
pub struct ReplicationRuleFilter {
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
    pub and: Option<ReplicationRuleAndOperator>,
}

/// Ownership translation applied to replicas in the destination account.
#[derive(Debug, Clone, Default)]
pub struct AccessControlTranslation {
    pub owner: OwnerOverride,
}

/// Encryption settings for replicas.
#[derive(Debug, Clone, Default)]
pub struct EncryptionConfiguration {
    pub replica_kms_key_id: Option<String>,
}

/// A time threshold expressed in minutes.
#[derive(Debug, Clone, Default)]
pub struct ReplicationTimeValue {
    pub minutes: Option<i32>,
}

/// Replication Time Control settings.
#[derive(Debug, Clone, Default)]
pub struct ReplicationTime {
    pub status: ReplicationTimeStatus,
    pub time: Option<ReplicationTimeValue>,
}

/// Replication metrics settings.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    pub status: MetricsStatus,
    pub event_threshold: Option<ReplicationTimeValue>,
}

/// Where and how objects are replicated.
#[derive(Debug, Clone, Default)]
pub struct Destination {
    /// ARN of the destination bucket.
    pub bucket: String,
    pub account: Option<String>,
    pub storage_class: Option<StorageClass>,
    pub access_control_translation: Option<AccessControlTranslation>,
    pub encryption_configuration: Option<EncryptionConfiguration>,
    pub replication_time: Option<ReplicationTime>,
    pub metrics: Option<Metrics>,
}

/// Whether delete markers are replicated.
#[derive(Debug, Clone, Default)]
pub struct DeleteMarkerReplication {
    pub status: DeleteMarkerReplicationStatus,
}

/// Whether objects that existed before the rule was created are replicated.
#[derive(Debug, Clone, Default)]
pub struct ExistingObjectReplication {
    pub status: ExistingObjectReplicationStatus,
}

/// Replication of KMS-encrypted source objects.
#[derive(Debug, Clone, Default)]
pub struct SseKmsEncryptedObjects {
    pub status: SseKmsEncryptedObjectsStatus,
}

/// Replication of metadata-only changes made to replicas.
#[derive(Debug, Clone, Default)]
pub struct ReplicaModifications {
    pub status: ReplicaModificationsStatus,
}

/// Source-side selection criteria for a rule.
#[derive(Debug, Clone, Default)]
pub struct SourceSelectionCriteria {
    pub sse_kms_encrypted_objects: Option<SseKmsEncryptedObjects>,
    pub replica_modifications: Option<ReplicaModifications>,
}

/// One replication rule.
///
/// Rules are evaluated by the storage service in the order they appear in
/// the configuration; `priority` breaks ties when multiple rules match.
#[derive(Debug, Clone, Default)]
pub struct ReplicationRule {
    pub id: Option<String>,
    pub priority: Option<i32>,
    /// Legacy object key prefix; superseded by `filter` but still accepted
    /// on the wire.
    pub prefix: Option<String>,
    pub filter: Option<ReplicationRuleFilter>,
    pub status: ReplicationRuleStatus,
    pub source_selection_criteria: Option<SourceSelectionCriteria>,
    pub existing_object_replication: Option<ExistingObjectReplication>,
    pub delete_marker_replication: Option<DeleteMarkerReplication>,
    pub destination: Destination,
}

/// The bucket replication policy as it appears on the wire.
///
/// `role` is optional here because a parsed document may omit it; the
/// validated type requires it.
#[derive(Debug, Clone, Default)]
pub struct ReplicationConfiguration {
    /// Identifier of the permissions principal the storage service assumes
    /// to perform replication.
    pub role: Option<String>,
    /// Rules in evaluation order.
    pub rules: Vec<ReplicationRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_status_strings() {
        assert_eq!(ReplicationRuleStatus::from("Enabled").as_str(), "Enabled");
        assert_eq!(ReplicationRuleStatus::from("Disabled").as_str(), "Disabled");
        assert_eq!(StorageClass::from("GLACIER").as_str(), "GLACIER");
        assert_eq!(StorageClass::from("DEEP_ARCHIVE"), StorageClass::DeepArchive);
    }

    #[test]
    fn test_should_fall_back_to_default_for_unknown_values() {
        assert_eq!(
            ReplicationRuleStatus::from("bogus"),
            ReplicationRuleStatus::Enabled
        );
        assert_eq!(StorageClass::from("bogus"), StorageClass::Standard);
    }

    #[test]
    fn test_should_display_enum_values() {
        assert_eq!(MetricsStatus::Disabled.to_string(), "Disabled");
        assert_eq!(OwnerOverride::Destination.to_string(), "Destination");
    }
}
