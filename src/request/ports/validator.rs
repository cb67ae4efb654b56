//! Validator port and the validatable-request capability.
//!
//! Defines what a request must expose to pass through the validation gate,
//! and the configuration the gate evaluates rules against.

use serde::Deserialize;

use crate::request::{
    error::{GateError, Rejection},
    validation::rules::{RuleSet, evaluate},
};

/// Result of validating a request's own fields.
pub type ValidationResult = Result<(), Rejection>;

/// Capability implemented by every inbound request payload.
///
/// A request declares its field rules as data; it never evaluates them
/// itself. Rule declaration must be pure: no I/O, no mutation, and the same
/// field state always yields the same rule set.
pub trait Validatable {
    /// Stable name of the request kind, used in logs and defect reports.
    fn kind(&self) -> &'static str;

    /// Declares the rules that must hold for this request under `config`.
    fn rules(&self, config: &ValidationConfig) -> RuleSet<'_>;

    /// Validates the request against `config`.
    ///
    /// Every declared rule is evaluated; the rejection carries the full
    /// violation set in declaration order. For the same `config` this agrees
    /// with a gate built from it on every field violation.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection`] when at least one rule fails.
    fn validate_with(&self, config: &ValidationConfig) -> ValidationResult {
        evaluate(&self.rules(config))
    }

    /// Validates the request against [`ValidationConfig::default`].
    ///
    /// A gate configured otherwise (for example [`ValidationConfig::strict`])
    /// may reach a different verdict; use [`Self::validate_with`] to check
    /// against a specific configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection`] when at least one rule fails.
    fn validate(&self) -> ValidationResult {
        self.validate_with(&ValidationConfig::default())
    }
}

/// Port for the validation gate.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Evaluate every declared rule before returning (not fail-fast)
/// - Report malformed input as violations, never panic
/// - Be stateless and thread-safe
pub trait RequestValidator: Send + Sync {
    /// Validates a request against all of its declared rules.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Rejected`] with every violation found, or
    /// [`GateError::NoRulesDeclared`] when the configuration requires rules
    /// and the request declares none.
    fn validate(&self, request: &dyn Validatable) -> Result<(), GateError>;
}

/// Whether a profile update must carry a username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfilePolicy {
    /// Every profile field is optional; absent or blank means "unchanged".
    #[default]
    PartialUpdate,
    /// The username must be present and non-blank.
    RequireUsername,
}

/// Configuration for request validation rules.
///
/// # Examples
///
/// ```
/// use journey_gate::request::ports::validator::{ProfilePolicy, ValidationConfig};
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.profile_policy, ProfilePolicy::PartialUpdate);
///
/// let strict = ValidationConfig::strict();
/// assert!(strict.require_declared_rules);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Maximum length of journey and user identifiers, in characters.
    pub max_identifier_length: usize,
    /// Largest page a single message fetch may request.
    pub max_page_length: i64,
    /// Minimum username length, in characters.
    pub min_username_length: usize,
    /// Maximum username length, in characters.
    pub max_username_length: usize,
    /// Maximum avatar URL length, in characters.
    pub max_avatar_url_length: usize,
    /// Maximum bio length, in characters.
    pub max_bio_length: usize,
    /// Which profile fields an update must carry.
    pub profile_policy: ProfilePolicy,
    /// Treat a request kind that declares no rules as a defect.
    pub require_declared_rules: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_identifier_length: 64,
            max_page_length: 200,
            min_username_length: 3,
            max_username_length: 32,
            max_avatar_url_length: 2048,
            max_bio_length: 500,
            profile_policy: ProfilePolicy::PartialUpdate,
            require_declared_rules: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration with relaxed length limits.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_identifier_length: 256,
            max_page_length: 1_000,
            min_username_length: 1,
            max_username_length: 64,
            max_bio_length: 2_000,
            ..Default::default()
        }
    }

    /// Creates a strict configuration: usernames are mandatory, limits are
    /// reduced, and every request kind must declare rules.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_identifier_length: 36,
            max_page_length: 50,
            min_username_length: 3,
            max_username_length: 24,
            max_avatar_url_length: 512,
            max_bio_length: 160,
            profile_policy: ProfilePolicy::RequireUsername,
            require_declared_rules: true,
        }
    }

    /// Returns a copy of this configuration with the given profile policy.
    #[must_use]
    pub const fn with_profile_policy(mut self, policy: ProfilePolicy) -> Self {
        self.profile_policy = policy;
        self
    }
}
