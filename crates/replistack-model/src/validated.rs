//! Checked construction of replication configurations.
//!
//! [`ValidatedReplicationConfiguration`] is the only shape the control plane
//! stores or serializes for transmission. It can only be built through
//! [`ValidatedReplicationConfiguration::new`] (or `TryFrom` the wire type),
//! so holding one is proof the structural invariants held at construction
//! time. Fields are private and there are no mutators.

use crate::error::ValidationError;
use crate::types::{ReplicationConfiguration, ReplicationRule};

/// Ceiling enforced by the original SDK code path.
pub const HARD_MAX_RULES: usize = 1000;

/// Ceiling documented by the storage provider (100 rules per configuration).
pub const DOCUMENTED_MAX_RULES: usize = 100;

/// Rule-count policy applied at construction.
///
/// The provider documents a 100-rule limit while the original SDK enforced
/// 1000; both are real, so the ceiling is a policy value rather than a
/// constant. The default keeps the permissive coded limit for compatibility
/// with configurations that existing deployments accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLimit {
    max_rules: usize,
}

impl RuleLimit {
    /// Policy enforcing the documented provider limit.
    #[must_use]
    pub fn documented() -> Self {
        Self {
            max_rules: DOCUMENTED_MAX_RULES,
        }
    }

    /// Policy with an explicit ceiling.
    #[must_use]
    pub fn custom(max_rules: usize) -> Self {
        Self { max_rules }
    }

    /// The maximum number of rules this policy allows.
    #[must_use]
    pub fn max_rules(&self) -> usize {
        self.max_rules
    }
}

impl Default for RuleLimit {
    fn default() -> Self {
        Self {
            max_rules: HARD_MAX_RULES,
        }
    }
}

/// A replication configuration whose structural invariants are known to hold.
///
/// Invariants:
/// - the role is non-empty and not all whitespace;
/// - there is at least one rule;
/// - the rule count is strictly below the construction-time ceiling;
/// - rule order is exactly the order supplied by the caller.
#[derive(Debug, Clone)]
pub struct ValidatedReplicationConfiguration {
    role: String,
    rules: Vec<ReplicationRule>,
}

impl ValidatedReplicationConfiguration {
    /// Validate and construct a configuration under the default rule limit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRole`] for a blank role,
    /// [`ValidationError::NoRules`] for an empty rule list, and
    /// [`ValidationError::TooManyRules`] when the list reaches the ceiling.
    pub fn new(
        role: impl Into<String>,
        rules: Vec<ReplicationRule>,
    ) -> Result<Self, ValidationError> {
        Self::with_limit(role, rules, RuleLimit::default())
    }

    /// Validate and construct a configuration under an explicit rule limit.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`], with the ceiling taken from `limit`.
    pub fn with_limit(
        role: impl Into<String>,
        rules: Vec<ReplicationRule>,
        limit: RuleLimit,
    ) -> Result<Self, ValidationError> {
        let role = role.into();

        if role.trim().is_empty() {
            return Err(ValidationError::EmptyRole);
        }
        if rules.is_empty() {
            return Err(ValidationError::NoRules);
        }
        if rules.len() >= limit.max_rules() {
            return Err(ValidationError::TooManyRules {
                count: rules.len(),
                limit: limit.max_rules(),
            });
        }

        Ok(Self { role, rules })
    }

    /// The replication role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ReplicationRule] {
        &self.rules
    }

    /// Convert back into the unchecked wire representation.
    #[must_use]
    pub fn into_wire(self) -> ReplicationConfiguration {
        ReplicationConfiguration {
            role: Some(self.role),
            rules: self.rules,
        }
    }

    /// Borrowing view as the wire representation, for serialization.
    #[must_use]
    pub fn to_wire(&self) -> ReplicationConfiguration {
        self.clone().into_wire()
    }
}

impl TryFrom<ReplicationConfiguration> for ValidatedReplicationConfiguration {
    type Error = ValidationError;

    fn try_from(wire: ReplicationConfiguration) -> Result<Self, Self::Error> {
        Self::new(wire.role.unwrap_or_default(), wire.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Destination, ReplicationRuleStatus};

    fn rule(id: &str) -> ReplicationRule {
        ReplicationRule {
            id: Some(id.to_owned()),
            status: ReplicationRuleStatus::Enabled,
            destination: Destination {
                bucket: "arn:aws:s3:::dest".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_should_construct_valid_configuration() {
        let config = ValidatedReplicationConfiguration::new(
            "arn:aws:iam::123:role/repl",
            vec![rule("a"), rule("b")],
        )
        .expect("valid configuration");

        assert_eq!(config.role(), "arn:aws:iam::123:role/repl");
        assert_eq!(config.rules().len(), 2);
        assert_eq!(config.rules()[0].id.as_deref(), Some("a"));
        assert_eq!(config.rules()[1].id.as_deref(), Some("b"));
    }

    #[test]
    fn test_should_reject_empty_role() {
        let err = ValidatedReplicationConfiguration::new("", vec![rule("a")]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyRole);
    }

    #[test]
    fn test_should_reject_blank_role() {
        let err = ValidatedReplicationConfiguration::new("  \t ", vec![rule("a")]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyRole);
    }

    #[test]
    fn test_should_reject_empty_rules() {
        let err = ValidatedReplicationConfiguration::new("role", vec![]).unwrap_err();
        assert_eq!(err, ValidationError::NoRules);
    }

    #[test]
    fn test_should_reject_rule_count_at_hard_ceiling() {
        let rules: Vec<_> = (0..HARD_MAX_RULES).map(|i| rule(&i.to_string())).collect();
        let err = ValidatedReplicationConfiguration::new("role", rules).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManyRules {
                count: HARD_MAX_RULES,
                limit: HARD_MAX_RULES,
            }
        );
    }

    #[test]
    fn test_should_accept_rule_count_just_below_ceiling() {
        let rules: Vec<_> = (0..HARD_MAX_RULES - 1)
            .map(|i| rule(&i.to_string()))
            .collect();
        let config = ValidatedReplicationConfiguration::new("role", rules)
            .expect("999 rules fit under the hard ceiling");
        assert_eq!(config.rules().len(), HARD_MAX_RULES - 1);
    }

    #[test]
    fn test_should_enforce_documented_limit_when_selected() {
        let rules: Vec<_> = (0..DOCUMENTED_MAX_RULES)
            .map(|i| rule(&i.to_string()))
            .collect();
        let err = ValidatedReplicationConfiguration::with_limit(
            "role",
            rules.clone(),
            RuleLimit::documented(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRules { limit: 100, .. }));

        // The same list passes under the default policy.
        assert!(ValidatedReplicationConfiguration::new("role", rules).is_ok());
    }

    #[test]
    fn test_should_preserve_rule_order() {
        let config =
            ValidatedReplicationConfiguration::new("role", vec![rule("x"), rule("y"), rule("z")])
                .expect("valid configuration");
        let ids: Vec<_> = config
            .rules()
            .iter()
            .map(|r| r.id.clone().unwrap_or_default())
            .collect();
        assert_eq!(ids, ["x", "y", "z"]);
    }

    #[test]
    fn test_should_convert_wire_to_validated_and_back() {
        let wire = ReplicationConfiguration {
            role: Some("role".to_owned()),
            rules: vec![rule("a")],
        };
        let validated =
            ValidatedReplicationConfiguration::try_from(wire).expect("valid configuration");
        let back = validated.into_wire();
        assert_eq!(back.role.as_deref(), Some("role"));
        assert_eq!(back.rules.len(), 1);
    }

    #[test]
    fn test_should_reject_wire_config_without_role() {
        let wire = ReplicationConfiguration {
            role: None,
            rules: vec![rule("a")],
        };
        let err = ValidatedReplicationConfiguration::try_from(wire).unwrap_err();
        assert_eq!(err, ValidationError::EmptyRole);
    }
}
