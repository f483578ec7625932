//! The `register` command: assign document-wide schema ids.

use tyname_ids::{ConflictPolicy, RegistryOptions, SchemaIdRegistry};
use tyname_ir::{parse_type_name, TypeTable};

use super::{require_names, unknown_option, CommandError};

/// Options for `tyname register`.
#[derive(Debug, Default)]
pub struct RegisterOptions {
    pub registry: RegistryOptions,
    pub names: Vec<String>,
}

/// Parse `register` arguments (everything after the command name).
pub fn parse_register_options(args: &[String]) -> Result<RegisterOptions, CommandError> {
    let mut registry = RegistryOptions::default();
    let mut names = Vec::new();

    for arg in args {
        if arg == "--full-names" {
            registry.use_full_type_names = true;
        } else if let Some(policy) = arg.strip_prefix("--on-conflict=") {
            registry.on_conflict = policy.parse::<ConflictPolicy>()?;
        } else if let Some(prefix) = arg.strip_prefix("--prefix=") {
            registry.reference_prefix = prefix.to_owned();
        } else if arg.starts_with('-') {
            return Err(unknown_option(arg));
        } else {
            names.push(arg.clone());
        }
    }

    Ok(RegisterOptions {
        registry,
        names: require_names(names, "register")?,
    })
}

/// Register every name in order and list `<reference>\t<input>` lines.
///
/// Stops at the first failure.
pub fn register_names(options: RegisterOptions) -> Result<Vec<String>, CommandError> {
    let mut table = TypeTable::new();
    let mut registry = SchemaIdRegistry::new(options.registry);
    let mut lines = Vec::with_capacity(options.names.len());

    for input in options.names {
        let idx = match parse_type_name(&mut table, &input) {
            Ok(idx) => idx,
            Err(source) => return Err(CommandError::Parse { input, source }),
        };
        let id = match registry.register(&table, idx) {
            Ok(id) => id,
            Err(source) => return Err(CommandError::Registry { input, source }),
        };
        tracing::debug!(%input, %id, "registered");
        lines.push(format!("{}\t{input}", registry.reference(&id)));
    }

    Ok(lines)
}
