use thiserror::Error;

/// Message for an empty command line or a failed passthrough spawn.
pub const COMMAND_NOT_FOUND: &str = "The system cannot find the command specified.";

/// Message for a `dir`/`cd` target that does not resolve to a directory.
pub const PATH_NOT_FOUND: &str = "The system cannot find the path specified.";

/// Failure modes of the command interpreter.
///
/// These never cross the dispatch boundary as errors: every handler converts
/// them to the exact user-facing text cmd.exe would print, and the session
/// directory is left unchanged on every failure path.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("The system cannot find the path specified.")]
    PathNotFound,

    #[error("The system cannot find the command specified.")]
    CommandNotFound,

    #[error("Error: {0}")]
    Execution(String),
}
