//! Type descriptors for schema identifier generation.
//!
//! This crate holds the input side of identifier resolution:
//! - [`TypeDescriptor`]: name, namespace, declaring type and generic arguments
//! - [`TypeTable`]: flat pool of descriptors addressed by [`TypeIdx`]
//! - [`parse_type_name`]: builds descriptors from textual type names such as
//!   ``System.Collections.Generic.IDictionary`2<System.String, System.Decimal>``
//!
//! # Design
//!
//! Descriptors reference each other by 32-bit index instead of by pointer.
//! Generic arguments always point at descriptors inserted earlier, while the
//! declaring-type edge can be attached after insertion with
//! [`TypeTable::declare_in`]. That makes forward references possible for
//! introspection code that discovers enclosing types late, and it is also the
//! only way a table can contain a cycle. Consumers walking the table must
//! detect cycles themselves.

mod descriptor;
mod idx;
mod parse;
pub mod stack;
mod table;

pub use descriptor::{strip_arity, TypeDescriptor};
pub use idx::TypeIdx;
pub use parse::{parse_type_name, ParseError};
pub use table::{TableError, TypeTable};
