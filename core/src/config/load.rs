//! Config IO: optional `webcmd.toml` plus `WEBCMD_*` env overrides.

use tracing::warn;

use super::types::Config;

const CONFIG_FILE: &str = "webcmd.toml";

/// Load the config file from the working directory if present, then apply
/// env overrides. A malformed file is reported and ignored rather than
/// aborting startup.
pub fn load_default() -> Config {
    let mut cfg = match std::fs::read_to_string(CONFIG_FILE) {
        Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
            warn!(file = CONFIG_FILE, error = %e, "ignoring malformed config file");
            Config::default()
        }),
        Err(_) => Config::default(),
    };
    apply_env_overrides(&mut cfg);
    cfg
}

fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("WEBCMD_DEFAULT_DIR") {
        cfg.shell.default_dir = Some(v);
    }
    if let Ok(v) = std::env::var("WEBCMD_SHELL") {
        cfg.shell.shell_program = Some(v);
    }
    if let Ok(v) = std::env::var("WEBCMD_SHELL_FLAG") {
        cfg.shell.shell_flag = Some(v);
    }
    if let Ok(v) = std::env::var("WEBCMD_PASSTHROUGH_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(secs) => cfg.shell.passthrough_timeout_secs = Some(secs),
            Err(_) => warn!(value = %v, "ignoring non-numeric WEBCMD_PASSTHROUGH_TIMEOUT_SECS"),
        }
    }
}
