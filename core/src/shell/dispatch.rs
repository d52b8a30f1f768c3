//! Command dispatch: the core's single entry point.
//!
//! The transport hands over a session identifier and a raw command line; the
//! dispatcher returns output text plus the (possibly updated) current
//! directory. Every failure mode is converted to user-facing text here or in
//! the handlers — nothing structured crosses this boundary.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::ShellConfig;
use crate::error::{ShellError, COMMAND_NOT_FOUND};
use crate::session::SessionStore;
use crate::shell::builtins::{cd, dir, pwd};
use crate::shell::parser::{classify, CommandKind, ParsedCommand};
use crate::shell::spawn::{HostShellSpawner, ProcessSpawner};

/// Outcome of a single dispatch call.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Textual output, possibly empty (`cd` prints nothing on success).
    pub text: String,
    /// The session's current directory after the command.
    pub cwd: PathBuf,
}

pub struct Interpreter {
    spawner: Arc<dyn ProcessSpawner>,
    /// No timeout by default: a hung passthrough command blocks its request,
    /// matching the reference behavior. Deployments can bound it via config.
    passthrough_timeout: Option<Duration>,
}

impl Interpreter {
    pub fn new(spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self {
            spawner,
            passthrough_timeout: None,
        }
    }

    pub fn with_passthrough_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.passthrough_timeout = timeout;
        self
    }

    pub fn from_config(cfg: &ShellConfig) -> Self {
        let spawner = match (&cfg.shell_program, &cfg.shell_flag) {
            (Some(program), Some(flag)) => HostShellSpawner::with_shell(program, flag),
            _ => HostShellSpawner::new(),
        };
        Self::new(Arc::new(spawner))
            .with_passthrough_timeout(cfg.passthrough_timeout_secs.map(Duration::from_secs))
    }

    /// Dispatch one command line for `session_id`.
    ///
    /// The session directory is read once up front and written back only
    /// after a successful `cd`; it is unchanged on every failure path.
    pub async fn dispatch(
        &self,
        store: &SessionStore,
        session_id: &str,
        raw: &str,
    ) -> CommandResult {
        let cwd = store.current_dir(session_id);
        let parsed = ParsedCommand::parse(raw);

        if parsed.is_empty() {
            return CommandResult {
                text: COMMAND_NOT_FOUND.to_string(),
                cwd,
            };
        }

        debug!(session = %session_id, base = %parsed.base, "dispatch");
        match classify(&parsed) {
            CommandKind::Dir { target } => {
                let text = dir::list(&cwd, target.as_deref())
                    .await
                    .unwrap_or_else(|e| e.to_string());
                CommandResult { text, cwd }
            }
            CommandKind::ChangeDir { target } => match cd::change_dir(&cwd, target.as_deref()).await
            {
                Ok(new_dir) => {
                    store.set_current_dir(session_id, &new_dir);
                    CommandResult {
                        text: String::new(),
                        cwd: new_dir,
                    }
                }
                Err(e) => CommandResult {
                    text: e.to_string(),
                    cwd,
                },
            },
            CommandKind::Pwd | CommandKind::EchoCwd => CommandResult {
                text: pwd::current(&cwd),
                cwd,
            },
            CommandKind::Passthrough { raw } => {
                let text = self
                    .run_passthrough(&raw, &cwd)
                    .await
                    .unwrap_or_else(|e| e.to_string());
                CommandResult { text, cwd }
            }
        }
    }

    /// Non-empty stderr wins over stdout regardless of exit code; otherwise
    /// the result is stdout, possibly empty.
    async fn run_passthrough(&self, raw: &str, cwd: &std::path::Path) -> Result<String, ShellError> {
        let fut = self.spawner.run(raw, cwd);
        let spawned = match self.passthrough_timeout {
            Some(limit) => match tokio::time::timeout(limit, fut).await {
                Ok(res) => res,
                Err(_) => {
                    warn!(command = raw, timeout_secs = limit.as_secs(), "passthrough timed out");
                    return Err(ShellError::Execution(format!(
                        "command timed out after {}s\n",
                        limit.as_secs()
                    )));
                }
            },
            None => fut.await,
        };

        match spawned {
            Ok(out) if !out.stderr.is_empty() => Err(ShellError::Execution(out.stderr)),
            Ok(out) => Ok(out.stdout),
            Err(e) => {
                warn!(command = raw, error = %e, "passthrough spawn failed");
                Err(ShellError::CommandNotFound)
            }
        }
    }
}
