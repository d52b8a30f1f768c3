pub mod builtins;
mod dispatch;
mod parser;
pub mod path;
mod spawn;

pub use dispatch::{CommandResult, Interpreter};
pub use parser::{classify, CommandKind, ParsedCommand};
pub use spawn::{HostShellSpawner, ProcessSpawner, SpawnedOutput};
