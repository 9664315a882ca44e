//! Errors surfaced by the demo.

use std::io;

use compiler_args::ArgsError;
use thiserror::Error;

/// Result alias for the demo.
pub type Result<T> = std::result::Result<T, InvocationError>;

/// Failures while building or printing an invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// A `--define` value was not of the form `NAME=VALUE` or `NAME`.
    #[error("invalid define '{0}': expected NAME or NAME=VALUE")]
    InvalidDefine(String),
    /// A `--namespace` value was not of the form `URI=MANIFEST`.
    #[error("invalid namespace '{0}': expected URI=MANIFEST")]
    InvalidNamespace(String),
    /// Serialization failed.
    #[error(transparent)]
    Arguments(#[from] ArgsError),
    /// Writing to stdout failed.
    #[error("failed to write arguments: {0}")]
    Write(#[source] io::Error),
}
