//! Registry configuration.

use std::fmt;
use std::str::FromStr;

use tyname_ir::{TypeIdx, TypeTable};

/// Prefix of a schema component reference in an OpenAPI 3 document.
pub const DEFAULT_REFERENCE_PREFIX: &str = "#/components/schemas/";

/// What to do when two different types produce the same schema id.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Reject the second type.
    #[default]
    Error,
    /// Give the second type its fully qualified id instead.
    Qualify,
}

/// A `--on-conflict` value that is neither `error` nor `qualify`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown conflict policy `{0}` (expected `error` or `qualify`)")]
pub struct UnknownPolicy(pub String);

impl FromStr for ConflictPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(ConflictPolicy::Error),
            "qualify" => Ok(ConflictPolicy::Qualify),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

/// Caller-supplied schema ids. Returning `None` falls back to the resolver.
pub type CustomIdSelector = Box<dyn Fn(&TypeTable, TypeIdx) -> Option<String> + Send + Sync>;

/// Options for [`SchemaIdRegistry`](crate::SchemaIdRegistry).
pub struct RegistryOptions {
    /// Use fully qualified ids for every type, not only on conflict.
    pub use_full_type_names: bool,
    pub on_conflict: ConflictPolicy,
    /// Prepended to an id by [`SchemaIdRegistry::reference`](crate::SchemaIdRegistry::reference).
    pub reference_prefix: String,
    pub(crate) custom_ids: Option<CustomIdSelector>,
}

impl RegistryOptions {
    #[must_use]
    pub fn with_full_type_names(mut self, enabled: bool) -> Self {
        self.use_full_type_names = enabled;
        self
    }

    #[must_use]
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }

    #[must_use]
    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_custom_ids<F>(mut self, selector: F) -> Self
    where
        F: Fn(&TypeTable, TypeIdx) -> Option<String> + Send + Sync + 'static,
    {
        self.custom_ids = Some(Box::new(selector));
        self
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        RegistryOptions {
            use_full_type_names: false,
            on_conflict: ConflictPolicy::default(),
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_owned(),
            custom_ids: None,
        }
    }
}

impl fmt::Debug for RegistryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryOptions")
            .field("use_full_type_names", &self.use_full_type_names)
            .field("on_conflict", &self.on_conflict)
            .field("reference_prefix", &self.reference_prefix)
            .field("custom_ids", &self.custom_ids.is_some())
            .finish()
    }
}
