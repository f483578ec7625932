//! Resolved identifiers and rendering modes.

use std::borrow::Borrow;
use std::fmt;

/// How much of a type's path ends up in its identifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdMode {
    /// Declaring types and simple name only; namespaces are dropped.
    #[default]
    Friendly,
    /// Namespace, declaring types and simple name.
    FullyQualified,
}

impl IdMode {
    #[inline]
    pub const fn from_flag(fully_qualified: bool) -> Self {
        if fully_qualified {
            IdMode::FullyQualified
        } else {
            IdMode::Friendly
        }
    }

    #[inline]
    pub const fn is_fully_qualified(self) -> bool {
        matches!(self, IdMode::FullyQualified)
    }
}

/// An immutable schema identifier, usable verbatim as a component key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Identifier(Box<str>);

impl Identifier {
    pub fn new(value: impl Into<Box<str>>) -> Self {
        Identifier(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", &*self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier(value.into_boxed_str())
    }
}
