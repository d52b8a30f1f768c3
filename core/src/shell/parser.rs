//! Command-line tokenization and classification.
//!
//! No quoting or escaping rules are applied here: built-ins only need the
//! whitespace-split tokens, and passthrough commands keep their raw string so
//! the host shell sees the original internal structure.

/// A raw command line split into tokens.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub raw: String,
    pub tokens: Vec<String>,
    /// First token lowercased, or the empty string when there are no tokens.
    pub base: String,
}

impl ParsedCommand {
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        let base = tokens.first().map(|t| t.to_lowercase()).unwrap_or_default();
        Self { raw, tokens, base }
    }

    /// Argument at `idx` (zero-based, not counting the command itself).
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx + 1).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Closed set of things the dispatcher can do with a command line.
///
/// `echo` only resolves to a built-in when its single argument is `%cd%`
/// (case-insensitive); any other echo goes to the host shell like every
/// unrecognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Dir { target: Option<String> },
    ChangeDir { target: Option<String> },
    Pwd,
    EchoCwd,
    Passthrough { raw: String },
}

pub fn classify(cmd: &ParsedCommand) -> CommandKind {
    match cmd.base.as_str() {
        "dir" => CommandKind::Dir {
            target: cmd.arg(0).map(str::to_string),
        },
        "cd" | "chdir" => CommandKind::ChangeDir {
            target: cmd.arg(0).map(str::to_string),
        },
        "pwd" => CommandKind::Pwd,
        "echo" if cmd.tokens.len() == 2 && cmd.tokens[1].to_lowercase() == "%cd%" => {
            CommandKind::EchoCwd
        }
        _ => CommandKind::Passthrough {
            raw: cmd.raw.clone(),
        },
    }
}
