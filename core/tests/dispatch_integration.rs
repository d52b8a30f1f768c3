//! End-to-end interpreter tests over real temporary directories.
//!
//! Passthrough behavior is covered with a mock spawner in the dispatch unit
//! tests; these exercise the built-ins against the actual filesystem.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use webcmd_core::shell::HostShellSpawner;
use webcmd_core::{Interpreter, SessionStore, COMMAND_NOT_FOUND, PATH_NOT_FOUND};

fn fixture() -> (tempfile::TempDir, SessionStore, Interpreter) {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    let store = SessionStore::new(canonical);
    let interp = Interpreter::new(Arc::new(HostShellSpawner::new()));
    (dir, store, interp)
}

fn windows_display(path: &Path) -> String {
    path.display().to_string().replace('/', "\\")
}

#[tokio::test]
async fn cd_then_pwd_reports_the_canonical_target() {
    let (guard, store, interp) = fixture();
    fs::create_dir_all(guard.path().join("a/b")).unwrap();

    let cd = interp.dispatch(&store, "s", "cd a/b").await;
    assert_eq!(cd.text, "");

    let expected = guard.path().join("a/b").canonicalize().unwrap();
    let pwd = interp.dispatch(&store, "s", "pwd").await;
    assert_eq!(pwd.text, windows_display(&expected));
}

#[tokio::test]
async fn cd_dot_dot_moves_one_level_up() {
    let (guard, store, interp) = fixture();
    fs::create_dir_all(guard.path().join("a/b")).unwrap();

    interp.dispatch(&store, "s", "cd a").await;
    interp.dispatch(&store, "s", "cd b").await;
    interp.dispatch(&store, "s", "cd ..").await;

    let expected = guard.path().join("a").canonicalize().unwrap();
    assert_eq!(store.current_dir("s"), expected);
}

#[tokio::test]
async fn chdir_is_an_alias_for_cd() {
    let (guard, store, interp) = fixture();
    fs::create_dir(guard.path().join("docs")).unwrap();

    let result = interp.dispatch(&store, "s", "chdir docs").await;
    assert_eq!(result.text, "");
    assert_eq!(
        store.current_dir("s"),
        guard.path().join("docs").canonicalize().unwrap()
    );
}

#[tokio::test]
async fn failed_cd_keeps_prior_directory_for_later_commands() {
    let (_guard, store, interp) = fixture();
    let before = store.current_dir("s");

    let result = interp.dispatch(&store, "s", "cd nonexistent-path").await;
    assert_eq!(result.text, PATH_NOT_FOUND);

    let pwd = interp.dispatch(&store, "s", "pwd").await;
    assert_eq!(pwd.text, windows_display(&before));
}

#[tokio::test]
async fn dir_reports_counts_sizes_and_synthetic_entries_first() {
    let (guard, store, interp) = fixture();
    fs::write(guard.path().join("a.txt"), vec![b'x'; 10]).unwrap();
    fs::write(guard.path().join("b.txt"), vec![b'x'; 2048]).unwrap();
    fs::create_dir(guard.path().join("sub")).unwrap();

    let out = interp.dispatch(&store, "s", "dir").await.text;
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with(" Directory of "));
    assert!(lines[2].ends_with("<DIR>          ."));
    assert!(lines[3].ends_with("<DIR>          .."));
    // Real entries only after the synthetic pair.
    let first_real = lines
        .iter()
        .position(|l| l.ends_with("a.txt") || l.ends_with("b.txt") || l.ends_with("sub"))
        .unwrap();
    assert!(first_real >= 4);

    assert!(out.contains("     2 File(s)    2,058 bytes"));
    assert!(out.contains("     1 Dir(s)     "));
    assert!(out.trim_end().ends_with("bytes free"));
}

#[tokio::test]
async fn dir_on_missing_path_does_not_move_the_session() {
    let (_guard, store, interp) = fixture();
    let before = store.current_dir("s");

    let out = interp.dispatch(&store, "s", "dir missing").await;
    assert_eq!(out.text, PATH_NOT_FOUND);
    assert_eq!(store.current_dir("s"), before);
}

#[tokio::test]
async fn whitespace_only_command_is_not_found_and_touches_nothing() {
    let (_guard, store, interp) = fixture();
    let before = store.current_dir("s");

    let result = interp.dispatch(&store, "s", " \t ").await;
    assert_eq!(result.text, COMMAND_NOT_FOUND);
    assert_eq!(store.current_dir("s"), before);
}

#[cfg(unix)]
#[tokio::test]
async fn passthrough_runs_in_the_session_directory() {
    let (guard, store, interp) = fixture();
    fs::create_dir(guard.path().join("inner")).unwrap();
    interp.dispatch(&store, "s", "cd inner").await;

    // `/bin/pwd` is not the builtin, so it asks the real shell, which must
    // have been started inside the session directory.
    let out = interp.dispatch(&store, "s", "/bin/pwd").await;
    let expected = guard.path().join("inner").canonicalize().unwrap();
    assert_eq!(out.text.trim(), expected.display().to_string());
}

#[cfg(unix)]
#[tokio::test]
async fn passthrough_stderr_gets_the_error_prefix() {
    let (_guard, store, interp) = fixture();

    let out = interp.dispatch(&store, "s", "echo broken 1>&2").await;
    assert_eq!(out.text, "Error: broken\n");
}

#[cfg(unix)]
#[tokio::test]
async fn passthrough_stdout_has_no_prefix() {
    let (_guard, store, interp) = fixture();

    let out = interp.dispatch(&store, "s", "printf hello").await;
    assert_eq!(out.text, "hello");
}
