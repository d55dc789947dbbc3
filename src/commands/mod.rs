//! CLI commands, one module per subcommand.
//!
//! Each command struct holds its parsed clap arguments and implements the
//! `CommandExecutor` trait, keeping argument parsing and execution together
//! per command.

mod decode;
mod encode;
mod interactive;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use interactive::InteractiveCommand;

use anyhow::Result;

/// Trait for command execution.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
