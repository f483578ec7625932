//! The type descriptor value.

use smallvec::SmallVec;

use crate::TypeIdx;

/// Description of a single type as seen by an introspection facility.
///
/// Built with a small fluent API:
///
/// ```
/// use tyname_ir::{TypeDescriptor, TypeTable};
///
/// let mut table = TypeTable::new();
/// let string = table.insert(TypeDescriptor::new("String").in_namespace_path("System"));
/// let list = table.insert(
///     TypeDescriptor::new("IEnumerable`1")
///         .in_namespace_path("System.Collections.Generic")
///         .with_args([string]),
/// );
/// assert_eq!(table[list].simple_name(), "IEnumerable");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDescriptor {
    simple_name: String,
    namespace: Vec<String>,
    declaring_type: Option<TypeIdx>,
    generic_args: SmallVec<[TypeIdx; 2]>,
}

impl TypeDescriptor {
    /// Create a top-level, non-generic descriptor.
    ///
    /// A trailing arity marker (`` `2 ``) is stripped from `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let mut simple_name = name.into();
        let stripped = strip_arity(&simple_name).len();
        simple_name.truncate(stripped);
        TypeDescriptor {
            simple_name,
            namespace: Vec::new(),
            declaring_type: None,
            generic_args: SmallVec::new(),
        }
    }

    /// Set the namespace from individual segments.
    #[must_use]
    pub fn in_namespace<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespace = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Set the namespace from a dotted path. An empty path clears it.
    #[must_use]
    pub fn in_namespace_path(mut self, path: &str) -> Self {
        self.namespace = if path.is_empty() {
            Vec::new()
        } else {
            path.split('.').map(str::to_owned).collect()
        };
        self
    }

    /// Mark this type as nested inside `declaring`.
    #[must_use]
    pub fn nested_in(mut self, declaring: TypeIdx) -> Self {
        self.declaring_type = Some(declaring);
        self
    }

    /// Set the generic arguments, in declaration order.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = TypeIdx>) -> Self {
        self.generic_args = args.into_iter().collect();
        self
    }

    /// Unqualified name, without arity marker.
    #[inline]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Namespace segments, outermost first.
    #[inline]
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// Enclosing type, if this type is nested.
    #[inline]
    pub fn declaring_type(&self) -> Option<TypeIdx> {
        self.declaring_type
    }

    /// Generic arguments in declaration order.
    #[inline]
    pub fn generic_args(&self) -> &[TypeIdx] {
        &self.generic_args
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generic_args.is_empty()
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        self.declaring_type.is_some()
    }

    pub(crate) fn set_declaring_type(&mut self, declaring: TypeIdx) {
        self.declaring_type = Some(declaring);
    }
}

/// Strip a trailing generic arity marker (`` `N ``) from a reflected name.
///
/// Names without a well-formed marker are returned unchanged.
///
/// ```
/// assert_eq!(tyname_ir::strip_arity("Dictionary`2"), "Dictionary");
/// assert_eq!(tyname_ir::strip_arity("String"), "String");
/// ```
pub fn strip_arity(name: &str) -> &str {
    match name.rsplit_once('`') {
        Some((base, arity))
            if !base.is_empty()
                && !arity.is_empty()
                && arity.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests;
