//! The `cd`/`chdir` built-in.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ShellError;
use crate::shell::path::is_absolute_arg;

/// Resolve a `cd` target against the session directory and return the new
/// canonical directory. Windows `cd` prints nothing on success, so the caller
/// returns empty output and only mutates the session on `Ok`.
pub async fn change_dir(cwd: &Path, target: Option<&str>) -> Result<PathBuf, ShellError> {
    let candidate: PathBuf = match target {
        // No argument: target is the current directory, a no-op.
        None => cwd.to_path_buf(),
        // Literal `..` goes one level up regardless of canonicalization
        // quirks. The root's parent is itself.
        Some("..") => cwd.parent().unwrap_or(cwd).to_path_buf(),
        Some(arg) if is_absolute_arg(arg) => PathBuf::from(arg),
        Some(arg) => cwd.join(arg),
    };

    let resolved = tokio::fs::canonicalize(&candidate)
        .await
        .map_err(|_| ShellError::PathNotFound)?;
    let meta = tokio::fs::metadata(&resolved)
        .await
        .map_err(|_| ShellError::PathNotFound)?;
    if !meta.is_dir() {
        return Err(ShellError::PathNotFound);
    }

    debug!(from = %cwd.display(), to = %resolved.display(), "cd");
    Ok(resolved)
}
