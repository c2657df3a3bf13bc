use std::io;

use thiserror::Error;

/// Failures raised by the terminal, input and logging collaborators.
///
/// Game logic itself has no error paths.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
