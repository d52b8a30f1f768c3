//! webcmd-core: a Windows Command Prompt interpreter over a per-session
//! virtual working directory.
//!
//! The transport layer hands `dispatch` a session identifier and a raw
//! command line; `dir`, `cd`/`chdir`, `pwd` and `echo %cd%` are emulated
//! with exact cmd.exe output, everything else goes to the host shell via a
//! mockable [`shell::ProcessSpawner`]. All failures come back as the literal
//! cmd.exe error strings, never as structured errors.

pub mod config;
pub mod error;
pub mod session;
pub mod shell;

pub use error::{ShellError, COMMAND_NOT_FOUND, PATH_NOT_FOUND};
pub use session::SessionStore;
pub use shell::{CommandKind, CommandResult, Interpreter, ParsedCommand, ProcessSpawner};
