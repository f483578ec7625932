//! Command handlers for the `tyname` CLI.
//!
//! Each submodule implements one command. Shared argument and error handling
//! lives here in the module root.

use tyname_ids::{InvalidDescriptor, RegistryError, UnknownPolicy};
use tyname_ir::ParseError;

mod register;
mod resolve;

pub use register::{parse_register_options, register_names, RegisterOptions};
pub use resolve::{parse_resolve_options, resolve_names, ResolveOptions};

/// Failure of a CLI command. Printed as `error: {self}`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Policy(#[from] UnknownPolicy),

    #[error("cannot parse `{input}`: {source}")]
    Parse { input: String, source: ParseError },

    #[error("invalid type `{input}`: {source}")]
    Invalid {
        input: String,
        source: InvalidDescriptor,
    },

    #[error("cannot register `{input}`: {source}")]
    Registry {
        input: String,
        source: RegistryError,
    },
}

/// Reject anything that looks like an option but was not recognized.
fn unknown_option(arg: &str) -> CommandError {
    CommandError::Usage(format!("unknown option `{arg}`"))
}

/// Require at least one positional type name.
fn require_names(names: Vec<String>, command: &str) -> Result<Vec<String>, CommandError> {
    if names.is_empty() {
        return Err(CommandError::Usage(format!(
            "missing type name\nUsage: tyname {command} [options] <type-name>..."
        )));
    }
    Ok(names)
}
