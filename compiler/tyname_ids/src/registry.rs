//! Schema id assignment across a whole document.
//!
//! The resolver only promises determinism. Uniqueness across a document is
//! the registry's job: every distinct type (keyed by its fully qualified id)
//! gets exactly one schema id, and two distinct types asking for the same id
//! are handled according to [`ConflictPolicy`].

use rustc_hash::FxHashMap;
use tyname_ir::{TypeIdx, TypeTable};

use crate::{
    resolve_with_mode, ConflictPolicy, IdMode, Identifier, InvalidDescriptor, RegistryError,
    RegistryOptions,
};

struct Entry {
    id: Identifier,
    /// Fully qualified id of the registered type.
    key: Identifier,
}

/// Assigns schema ids to types and remembers them.
#[derive(Default)]
pub struct SchemaIdRegistry {
    options: RegistryOptions,
    entries: Vec<Entry>,
    by_id: FxHashMap<Identifier, usize>,
    by_key: FxHashMap<Identifier, usize>,
}

impl SchemaIdRegistry {
    pub fn new(options: RegistryOptions) -> Self {
        SchemaIdRegistry {
            options,
            entries: Vec::new(),
            by_id: FxHashMap::default(),
            by_key: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Return the schema id of `idx`, assigning one on first sight.
    ///
    /// Registering a type twice, or two structurally equal types, yields the
    /// same id.
    #[tracing::instrument(level = "debug", skip(self, table))]
    pub fn register(
        &mut self,
        table: &TypeTable,
        idx: TypeIdx,
    ) -> Result<Identifier, RegistryError> {
        let key = resolve_with_mode(table, idx, IdMode::FullyQualified)?;
        if let Some(&pos) = self.by_key.get(&key) {
            return Ok(self.entries[pos].id.clone());
        }

        let preferred = self.preferred_id(table, idx, &key)?;
        let id = match self.by_id.get(&preferred) {
            None => preferred,
            Some(&pos) => {
                let existing = &self.entries[pos].key;
                match self.options.on_conflict {
                    ConflictPolicy::Qualify if preferred != key => {
                        tracing::debug!(%preferred, %key, "schema id taken, qualifying");
                        if let Some(&taken) = self.by_id.get(&key) {
                            return Err(RegistryError::Conflict {
                                id: key.clone(),
                                existing: self.entries[taken].key.clone(),
                                incoming: key,
                            });
                        }
                        key.clone()
                    }
                    _ => {
                        return Err(RegistryError::Conflict {
                            id: preferred,
                            existing: existing.clone(),
                            incoming: key,
                        })
                    }
                }
            }
        };

        tracing::debug!(%id, %key, "registered schema id");
        let pos = self.entries.len();
        self.by_id.insert(id.clone(), pos);
        self.by_key.insert(key.clone(), pos);
        self.entries.push(Entry { id: id.clone(), key });
        Ok(id)
    }

    /// Schema id previously assigned to `idx` or a structurally equal type.
    ///
    /// `Ok(None)` means the type is valid but not registered.
    pub fn lookup(
        &self,
        table: &TypeTable,
        idx: TypeIdx,
    ) -> Result<Option<&Identifier>, InvalidDescriptor> {
        let key = resolve_with_mode(table, idx, IdMode::FullyQualified)?;
        Ok(self.by_key.get(&key).map(|&pos| &self.entries[pos].id))
    }

    /// Reference path for a schema id, e.g. `#/components/schemas/Order`.
    pub fn reference(&self, id: &Identifier) -> String {
        format!("{}{id}", self.options.reference_prefix)
    }

    /// Assigned ids in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.entries.iter().map(|entry| &entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn preferred_id(
        &self,
        table: &TypeTable,
        idx: TypeIdx,
        key: &Identifier,
    ) -> Result<Identifier, RegistryError> {
        if let Some(custom) = self.options.custom_ids.as_ref().and_then(|f| f(table, idx)) {
            return Ok(Identifier::from(custom));
        }
        if self.options.use_full_type_names {
            return Ok(key.clone());
        }
        Ok(resolve_with_mode(table, idx, IdMode::Friendly)?)
    }
}
