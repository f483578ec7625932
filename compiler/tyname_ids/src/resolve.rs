//! Identifier resolution.
//!
//! An identifier is built by walking the descriptor as a tree:
//!
//! 1. the declaring type (same mode) followed by `.`, or in fully qualified
//!    mode the namespace segments each followed by `.` when the type is not
//!    nested,
//! 2. the simple name,
//! 3. `[`, the generic arguments (same mode) separated by `,`, and `]` when
//!    the type is generic.
//!
//! A nested type takes its namespace from the outermost declaring type, so
//! its own namespace is never printed. Names and namespace segments are
//! written verbatim, so an opaque leaf such as `Int32[]` keeps its brackets.

use rustc_hash::FxHashSet;
use tyname_ir::stack::ensure_sufficient_stack;
use tyname_ir::{TypeIdx, TypeTable};

use crate::{IdMode, Identifier, InvalidDescriptor};

/// Resolve the identifier of `idx`.
///
/// `fully_qualified` selects between [`IdMode::FullyQualified`] and
/// [`IdMode::Friendly`].
pub fn resolve(
    table: &TypeTable,
    idx: TypeIdx,
    fully_qualified: bool,
) -> Result<Identifier, InvalidDescriptor> {
    resolve_with_mode(table, idx, IdMode::from_flag(fully_qualified))
}

/// Resolve the identifier of `idx` in the given mode.
#[tracing::instrument(level = "trace", skip(table))]
pub fn resolve_with_mode(
    table: &TypeTable,
    idx: TypeIdx,
    mode: IdMode,
) -> Result<Identifier, InvalidDescriptor> {
    let mut resolver = Resolver {
        table,
        mode,
        buf: String::new(),
        path: Vec::new(),
        in_progress: FxHashSet::default(),
    };
    resolver.write_type(idx)?;
    tracing::trace!(id = %resolver.buf, "resolved");
    Ok(Identifier::from(resolver.buf))
}

/// Identifier shorthands on a descriptor table.
pub trait TypeIds {
    /// Namespace-free identifier for human-facing schema names.
    fn friendly_id(&self, idx: TypeIdx) -> Result<Identifier, InvalidDescriptor>;

    /// Identifier including namespace and declaring types.
    fn full_id(&self, idx: TypeIdx) -> Result<Identifier, InvalidDescriptor>;
}

impl TypeIds for TypeTable {
    fn friendly_id(&self, idx: TypeIdx) -> Result<Identifier, InvalidDescriptor> {
        resolve_with_mode(self, idx, IdMode::Friendly)
    }

    fn full_id(&self, idx: TypeIdx) -> Result<Identifier, InvalidDescriptor> {
        resolve_with_mode(self, idx, IdMode::FullyQualified)
    }
}

struct Resolver<'a> {
    table: &'a TypeTable,
    mode: IdMode,
    buf: String,
    /// Types currently being written, outermost first.
    path: Vec<TypeIdx>,
    in_progress: FxHashSet<TypeIdx>,
}

impl Resolver<'_> {
    fn write_type(&mut self, idx: TypeIdx) -> Result<(), InvalidDescriptor> {
        ensure_sufficient_stack(|| self.write_type_inner(idx))
    }

    fn write_type_inner(&mut self, idx: TypeIdx) -> Result<(), InvalidDescriptor> {
        let table = self.table;
        let desc = table
            .get(idx)
            .ok_or(InvalidDescriptor::UnknownType { idx })?;
        let name = desc.simple_name();
        if name.is_empty() {
            return Err(InvalidDescriptor::EmptyName { idx });
        }

        if !self.in_progress.insert(idx) {
            return Err(self.cycle_through(idx));
        }
        self.path.push(idx);

        match desc.declaring_type() {
            Some(outer) => {
                self.write_type(outer)?;
                self.buf.push('.');
            }
            None if self.mode.is_fully_qualified() => {
                for segment in desc.namespace() {
                    if segment.is_empty() {
                        return Err(InvalidDescriptor::EmptyNamespaceSegment {
                            name: name.to_owned(),
                        });
                    }
                    self.buf.push_str(segment);
                    self.buf.push('.');
                }
            }
            None => {}
        }

        self.buf.push_str(name);

        if let Some((&first, rest)) = desc.generic_args().split_first() {
            self.buf.push('[');
            self.write_type(first)?;
            for &arg in rest {
                self.buf.push(',');
                self.write_type(arg)?;
            }
            self.buf.push(']');
        }

        self.path.pop();
        self.in_progress.remove(&idx);
        Ok(())
    }

    fn cycle_through(&self, idx: TypeIdx) -> InvalidDescriptor {
        let start = self.path.iter().position(|&p| p == idx).unwrap_or(0);
        let path = self.path[start..]
            .iter()
            .chain(std::iter::once(&idx))
            .map(|&p| self.table[p].simple_name().to_owned())
            .collect();
        tracing::debug!(?idx, "cycle in descriptor graph");
        InvalidDescriptor::Cycle { path }
    }
}
