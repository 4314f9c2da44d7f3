//! Bootstrap error types

use crate::config::ConfigError;
use thiserror::Error;

/// Process exit code reported for every fatal bootstrap error
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Fatal errors raised while bringing up the window and GL context
///
/// None of these are recoverable. The caller prints the diagnostic and exits
/// with [`FAILURE_EXIT_CODE`].
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The window system could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitFailed(String),

    /// The window (and its GL context) could not be created
    #[error("Failed to create the window.")]
    WindowCreationFailed,

    /// The GL function-pointer loader could not resolve the required entry points
    #[error("Failed to initialize the GL loader (missing: {0})")]
    LoaderInitFailed(String),

    /// The supplied configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BootstrapError {
    /// Exit code the process should terminate with
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

/// Result alias used throughout the bootstrap
pub type BootstrapResult<T> = Result<T, BootstrapError>;
