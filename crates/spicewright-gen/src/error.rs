//! Error types for netlist generation.

use thiserror::Error;

/// Errors that can occur while rendering a netlist.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenError {
    /// A component's connection mapping is incomplete.
    #[error(transparent)]
    Ir(#[from] spicewright_ir::IrError),

    /// An instance references a subcircuit that is neither defined in the
    /// netlist nor supplied with a positional port map of its own.
    #[error("instance '{instance}' references undefined subcircuit '{subckt}'")]
    UndefinedSubckt {
        /// The referencing instance name.
        instance: String,
        /// The missing definition name.
        subckt: String,
    },

    /// The requested dialect is not registered.
    #[error("unknown dialect '{name}': valid options are {valid:?}")]
    UnknownDialect {
        /// The requested name.
        name: String,
        /// Registered dialect names.
        valid: Vec<String>,
    },
}

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;
