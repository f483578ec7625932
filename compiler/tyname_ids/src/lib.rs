//! Schema component identifiers for type descriptors.
//!
//! An API document keys its reusable schemas by name. This crate turns a
//! [`TypeDescriptor`](tyname_ir::TypeDescriptor) into such a name in one of two
//! forms:
//!
//! | Type | Friendly | Fully qualified |
//! |------|----------|-----------------|
//! | `ComplexType` | `ComplexType` | `Swashbuckle.AspNetCore.SwaggerGen.Test.ComplexType` |
//! | `IEnumerable<string>` | `IEnumerable[String]` | `System.Collections.Generic.IEnumerable[System.String]` |
//! | `ContainingType+NestedType` | `ContainingType.NestedType` | `Swashbuckle.AspNetCore.SwaggerGen.Test.ContainingType.NestedType` |
//!
//! [`resolve`] is a pure function over a [`TypeTable`](tyname_ir::TypeTable).
//! [`SchemaIdRegistry`] sits on top of it and hands out one id per distinct
//! type, detecting collisions between friendly ids.

mod error;
mod identifier;
mod options;
mod registry;
mod resolve;

pub use error::{InvalidDescriptor, RegistryError};
pub use identifier::{IdMode, Identifier};
pub use options::{
    ConflictPolicy, CustomIdSelector, RegistryOptions, UnknownPolicy, DEFAULT_REFERENCE_PREFIX,
};
pub use registry::SchemaIdRegistry;
pub use resolve::{resolve, resolve_with_mode, TypeIds};
