//! The replication service provider.
//!
//! [`ReplicationService`] owns the replication state and configuration and
//! exposes the bucket-replication operations implemented in [`crate::ops`].

use std::sync::Arc;

use crate::config::ReplicationServiceConfig;
use crate::state::ReplicationState;

/// The replication control-plane provider.
///
/// All fields are `Arc`-wrapped for cheap cloning and shared ownership
/// across handler tasks.
///
/// # Examples
///
/// ```
/// use replistack_core::ReplicationService;
/// use replistack_core::config::ReplicationServiceConfig;
///
/// let service = ReplicationService::new(ReplicationServiceConfig::default());
/// assert!(!service.state().bucket_exists("anything"));
/// ```
#[derive(Debug, Clone)]
pub struct ReplicationService {
    /// Bucket and replication-configuration state.
    pub(crate) state: Arc<ReplicationState>,
    /// Service configuration.
    pub(crate) config: Arc<ReplicationServiceConfig>,
}

impl Default for ReplicationService {
    fn default() -> Self {
        Self::new(ReplicationServiceConfig::default())
    }
}

impl ReplicationService {
    /// Create a new replication service with the given configuration.
    #[must_use]
    pub fn new(config: ReplicationServiceConfig) -> Self {
        Self {
            state: Arc::new(ReplicationState::new()),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the service state.
    #[must_use]
    pub fn state(&self) -> &ReplicationState {
        &self.state
    }

    /// Returns a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ReplicationServiceConfig {
        &self.config
    }
}
