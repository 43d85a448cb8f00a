//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A component's connection mapping omits a required port.
    #[error("component '{instance}' is missing required port '{port}'")]
    MissingPort {
        /// Instance name of the offending component.
        instance: String,
        /// Name of the absent port.
        port: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
