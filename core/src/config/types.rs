use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Interpreter knobs. Everything defaults to the reference behavior: the
/// platform shell, the server's startup directory, and no passthrough
/// timeout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    /// Directory fresh sessions start in. Defaults to the server process's
    /// working directory at startup.
    #[serde(default)]
    pub default_dir: Option<String>,

    /// Host shell program override (e.g. `bash`). Both program and flag must
    /// be set for the override to take effect.
    #[serde(default)]
    pub shell_program: Option<String>,

    /// Flag that makes the shell take a command string (`/C`, `-c`).
    #[serde(default)]
    pub shell_flag: Option<String>,

    /// Upper bound on a passthrough child's lifetime, in seconds. Unset means
    /// no timeout, matching the reference.
    #[serde(default)]
    pub passthrough_timeout_secs: Option<u64>,
}
