//! Error types for PDK configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a PDK configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PdkError {
    /// Failed to read the configuration file.
    #[error("failed to read PDK config '{}': {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or structure error.
    #[error("invalid PDK config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A component could not be rewritten (e.g. a required port is absent).
    #[error(transparent)]
    Ir(#[from] spicewright_ir::IrError),

    /// The declared default corner is not a member of the corner set.
    #[error("default_corner '{corner}' is not in the corners list {corners:?}")]
    InvalidDefaultCorner {
        /// The declared default corner.
        corner: String,
        /// The valid corner set.
        corners: Vec<String>,
    },
}

/// Result type for PDK operations.
pub type PdkResult<T> = Result<T, PdkError>;
