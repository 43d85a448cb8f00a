//! Error types for cell loading and dependency resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading and validating cell descriptions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FrontendError {
    /// Failed to read a file from disk.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or structure error.
    #[error("YAML error in '{}': {source}", path.display())]
    Yaml {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// JSON syntax or structure error.
    #[error("JSON error in '{}': {source}", path.display())]
    Json {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Input file extension is not a recognized cell format.
    #[error(
        "unsupported file extension '{extension}' for '{}': expected .yaml, .yml, or .json",
        path.display()
    )]
    UnsupportedExtension {
        /// Offending file path.
        path: PathBuf,
        /// The extension found.
        extension: String,
    },

    /// Component id does not match the identifier syntax.
    #[error(
        "component id '{id}' is invalid: use letters, digits, or underscores, \
         starting with a letter or underscore"
    )]
    InvalidIdentifier {
        /// The offending id.
        id: String,
    },

    /// Two components in one cell share an id.
    #[error("duplicate component id '{id}' in cell '{cell}'")]
    DuplicateComponentId {
        /// Enclosing cell name.
        cell: String,
        /// The duplicated id.
        id: String,
    },

    /// A primitive component names a model outside the closed kind set.
    #[error("component '{id}': unknown primitive model '{model}'")]
    UnknownPrimitiveModel {
        /// Declaring component id.
        id: String,
        /// The unrecognized model name.
        model: String,
    },

    /// A cell declares no ports.
    #[error("cell '{cell}' declares no ports")]
    EmptyPortList {
        /// The offending cell name.
        cell: String,
    },

    /// A declared dependency could not be located on disk.
    #[error(
        "dependency '{declared}' of '{}' not found (resolved to '{}')",
        declared_by.display(),
        resolved.display()
    )]
    DependencyNotFound {
        /// Dependency string as declared in the cell file.
        declared: String,
        /// The location the declaration resolved to.
        resolved: PathBuf,
        /// The file that declared the dependency.
        declared_by: PathBuf,
    },

    /// The dependency graph contains a cycle through this location.
    #[error("circular dependency through '{}'", path.display())]
    CircularDependency {
        /// The location that closed the cycle.
        path: PathBuf,
    },
}

/// Result type for frontend operations.
pub type FrontendResult<T> = Result<T, FrontendError>;
