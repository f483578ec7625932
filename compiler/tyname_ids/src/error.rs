//! Errors for identifier resolution and registration.

use tyname_ir::TypeIdx;

use crate::Identifier;

/// The descriptor graph violates an invariant the resolver depends on.
///
/// These point at a defect in whatever built the table and are never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDescriptor {
    #[error("type {idx} has an empty simple name")]
    EmptyName { idx: TypeIdx },

    /// Only reported when the namespace is printed, i.e. in fully qualified mode.
    #[error("type `{name}` has an empty namespace segment")]
    EmptyNamespaceSegment { name: String },

    /// Resolution reached a type that is already being resolved.
    ///
    /// `path` lists simple names from the repeated type back to itself.
    #[error("cyclic type reference: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error("type handle {idx} does not belong to this table")]
    UnknownType { idx: TypeIdx },
}

/// Error returned by [`SchemaIdRegistry::register`](crate::SchemaIdRegistry::register).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Invalid(#[from] InvalidDescriptor),

    /// Two different types want the same schema id.
    #[error(
        "conflicting schema ids: `{id}` is already used by `{existing}`, cannot assign it to `{incoming}`; \
         enable full type names or supply custom ids"
    )]
    Conflict {
        id: Identifier,
        existing: Identifier,
        incoming: Identifier,
    },
}
