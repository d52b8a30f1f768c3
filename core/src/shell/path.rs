//! Path rendering and resolution helpers shared by the built-in handlers.

use std::path::Path;

/// Render a path the way cmd.exe prints it: backslash separators.
pub fn to_windows_display(path: &Path) -> String {
    path.display().to_string().replace('/', "\\")
}

/// Decide whether a `cd` argument is already absolute.
///
/// Mirrors the reference behavior: a leading path-root marker, or a
/// drive-letter separator in the second position. The second-character probe
/// means a one-character argument is never classified as absolute; that edge
/// case is kept on purpose (see DESIGN.md).
pub fn is_absolute_arg(arg: &str) -> bool {
    let mut chars = arg.chars();
    let first = chars.next();
    if matches!(first, Some('/') | Some('\\')) {
        return true;
    }
    chars.next() == Some(':')
}
