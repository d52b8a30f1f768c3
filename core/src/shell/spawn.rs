//! Host shell passthrough.
//!
//! The spawning capability is a narrow trait so dispatcher tests can run
//! against a mock without forking real processes.

use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Complete captured output of a finished child process.
#[derive(Debug, Clone)]
pub struct SpawnedOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Run `command` through the host shell with the working directory forced
    /// to `cwd`, blocking until the process terminates. Both output streams
    /// are captured as complete buffers; there is no streaming and no way to
    /// abort a spawned process mid-flight.
    async fn run(&self, command: &str, cwd: &Path) -> io::Result<SpawnedOutput>;
}

/// Production spawner: `cmd /C` on Windows, `sh -c` elsewhere.
pub struct HostShellSpawner {
    program: String,
    flag: String,
}

impl HostShellSpawner {
    pub fn new() -> Self {
        let (program, flag) = default_shell();
        Self {
            program: program.to_string(),
            flag: flag.to_string(),
        }
    }

    pub fn with_shell(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }
}

impl Default for HostShellSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(windows)]
fn default_shell() -> (&'static str, &'static str) {
    ("cmd", "/C")
}

#[cfg(not(windows))]
fn default_shell() -> (&'static str, &'static str) {
    ("sh", "-c")
}

#[async_trait]
impl ProcessSpawner for HostShellSpawner {
    async fn run(&self, command: &str, cwd: &Path) -> io::Result<SpawnedOutput> {
        debug!(shell = %self.program, cwd = %cwd.display(), command, "spawning passthrough");
        let output = Command::new(&self.program)
            .arg(&self.flag)
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(SpawnedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
