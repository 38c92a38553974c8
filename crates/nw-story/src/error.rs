//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while a session is talking to the terminal.
///
/// The domain itself is total: player mutations and ending rules never fail.
/// Everything here comes from the input and output collaborators.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input closed")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
}
