//! Replication service configuration.
//!
//! Provides [`ReplicationServiceConfig`] for configuring the replication
//! control plane. Configuration values can be loaded from environment
//! variables.

use replistack_model::{HARD_MAX_RULES, RuleLimit};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Maximum size in bytes of a serialized replication configuration (2 MiB).
pub const MAX_CONFIG_BYTES: usize = 2 * 1024 * 1024;

/// Replication service configuration.
///
/// All fields have defaults matching the service-side ceilings. Configuration
/// can be loaded from environment variables via
/// [`ReplicationServiceConfig::from_env`].
///
/// # Examples
///
/// ```
/// use replistack_core::config::ReplicationServiceConfig;
///
/// let config = ReplicationServiceConfig::default();
/// assert_eq!(config.max_rules, 1000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationServiceConfig {
    /// Exclusive upper bound on the number of rules per configuration.
    #[builder(default = HARD_MAX_RULES)]
    pub max_rules: usize,

    /// Maximum size in bytes of the canonical encoding of a configuration.
    #[builder(default = MAX_CONFIG_BYTES)]
    pub max_config_bytes: usize,
}

impl Default for ReplicationServiceConfig {
    fn default() -> Self {
        Self {
            max_rules: HARD_MAX_RULES,
            max_config_bytes: MAX_CONFIG_BYTES,
        }
    }
}

impl ReplicationServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `REPLICATION_MAX_RULES` | `1000` |
    /// | `REPLICATION_MAX_CONFIG_BYTES` | `2097152` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("REPLICATION_MAX_RULES") {
            if let Ok(n) = v.parse::<usize>() {
                config.max_rules = n;
            }
        }
        if let Ok(v) = std::env::var("REPLICATION_MAX_CONFIG_BYTES") {
            if let Ok(n) = v.parse::<usize>() {
                config.max_config_bytes = n;
            }
        }

        config
    }

    /// The rule-count policy derived from this configuration.
    #[must_use]
    pub fn rule_limit(&self) -> RuleLimit {
        RuleLimit::custom(self.max_rules)
    }
}
