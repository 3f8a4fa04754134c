//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler opens what it needs from the [`Context`], calls into the
//! library and formats the result. Handlers do not write to the repository.

mod completion;
mod config_cmd;
mod log_cmd;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::list as config_list;
pub use log_cmd::log;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Log {
            limit,
            json,
            no_uncommitted,
        } => log_cmd::log(ctx, limit, json, no_uncommitted),
        Command::Config { action } => match action {
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
