//! `pwd` and `echo %cd%`: print the session directory, Windows-rendered.

use std::path::Path;

use crate::shell::path::to_windows_display;

pub fn current(cwd: &Path) -> String {
    to_windows_display(cwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_backslashes_and_no_trailing_content() {
        assert_eq!(current(Path::new("/home/web")), "\\home\\web");
    }
}
