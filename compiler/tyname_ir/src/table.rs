//! Flat storage for type descriptors.

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{TypeDescriptor, TypeIdx};

/// Error returned by table mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The handle was not produced by this table.
    #[error("type handle {0} does not belong to this table")]
    UnknownType(TypeIdx),

    /// Every `u32` handle is taken.
    #[error("type table is full: every `u32` handle is taken")]
    Full,
}

/// Pool of type descriptors.
///
/// [`insert`](Self::insert) always appends, so structurally equal descriptors
/// may occupy several handles. [`intern`](Self::intern) reuses an existing
/// handle when an identical descriptor is already stored.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    entries: Vec<TypeDescriptor>,
    /// Structural dedup map used by `intern`.
    interned: FxHashMap<TypeDescriptor, TypeIdx>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TypeTable {
            entries: Vec::with_capacity(capacity),
            interned: FxHashMap::default(),
        }
    }

    /// Append a descriptor and return its handle.
    ///
    /// # Panics
    /// Panics once every `u32` handle is taken.
    /// Use [`try_insert`](Self::try_insert) for fallible insertion.
    pub fn insert(&mut self, desc: TypeDescriptor) -> TypeIdx {
        match self.try_insert(desc) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Append a descriptor, failing once the handle space is exhausted.
    pub fn try_insert(&mut self, desc: TypeDescriptor) -> Result<TypeIdx, TableError> {
        let raw = u32::try_from(self.entries.len()).map_err(|_| TableError::Full)?;
        let idx = TypeIdx::from_raw(raw);
        self.interned.entry(desc.clone()).or_insert(idx);
        self.entries.push(desc);
        Ok(idx)
    }

    /// Return the handle of an identical descriptor, inserting it if absent.
    ///
    /// # Panics
    /// Panics under the same condition as [`insert`](Self::insert).
    pub fn intern(&mut self, desc: TypeDescriptor) -> TypeIdx {
        if let Some(&idx) = self.interned.get(&desc) {
            return idx;
        }
        self.insert(desc)
    }

    /// Attach a declaring type to an already inserted descriptor.
    ///
    /// The edge is not checked for cycles; identifier resolution reports them.
    pub fn declare_in(&mut self, nested: TypeIdx, declaring: TypeIdx) -> Result<(), TableError> {
        if self.get(declaring).is_none() {
            return Err(TableError::UnknownType(declaring));
        }
        let entry = self
            .entries
            .get_mut(nested.index())
            .ok_or(TableError::UnknownType(nested))?;

        if self.interned.get(&*entry) == Some(&nested) {
            self.interned.remove(&*entry);
        }
        entry.set_declaring_type(declaring);
        self.interned.entry(entry.clone()).or_insert(nested);
        Ok(())
    }

    #[inline]
    pub fn get(&self, idx: TypeIdx) -> Option<&TypeDescriptor> {
        self.entries.get(idx.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeIdx, &TypeDescriptor)> {
        (0..)
            .zip(&self.entries)
            .map(|(raw, desc)| (TypeIdx::from_raw(raw), desc))
    }
}

impl Index<TypeIdx> for TypeTable {
    type Output = TypeDescriptor;

    fn index(&self, idx: TypeIdx) -> &TypeDescriptor {
        &self.entries[idx.index()]
    }
}
