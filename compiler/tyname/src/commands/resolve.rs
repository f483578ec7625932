//! The `resolve` command: print the identifier of each type name.

use tyname_ids::{resolve_with_mode, IdMode};
use tyname_ir::{parse_type_name, TypeTable};

use super::{require_names, unknown_option, CommandError};

/// Options for `tyname resolve`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub mode: IdMode,
    pub names: Vec<String>,
}

/// Parse `resolve` arguments (everything after the command name).
pub fn parse_resolve_options(args: &[String]) -> Result<ResolveOptions, CommandError> {
    let mut mode = IdMode::Friendly;
    let mut names = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--full" | "-f" => mode = IdMode::FullyQualified,
            "--friendly" => mode = IdMode::Friendly,
            flag if flag.starts_with('-') => return Err(unknown_option(flag)),
            name => names.push(name.to_owned()),
        }
    }

    Ok(ResolveOptions {
        mode,
        names: require_names(names, "resolve")?,
    })
}

/// Resolve every name, one output line each.
pub fn resolve_names(options: &ResolveOptions) -> Result<Vec<String>, CommandError> {
    let mut table = TypeTable::new();
    options
        .names
        .iter()
        .map(|input| {
            let idx = parse_type_name(&mut table, input).map_err(|source| CommandError::Parse {
                input: input.clone(),
                source,
            })?;
            let id = resolve_with_mode(&table, idx, options.mode).map_err(|source| {
                CommandError::Invalid {
                    input: input.clone(),
                    source,
                }
            })?;
            Ok(id.into_string())
        })
        .collect()
}
