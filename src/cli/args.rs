//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--log-level <level>`: Set the log level explicitly
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// lanegraph - Draw a Git repository's commit graph as lanes
#[derive(Parser, Debug)]
#[command(name = "lanegraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if lanegraph was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log level for diagnostics on stderr (overrides --debug and LANEGRAPH_LOG)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the commit graph
    #[command(
        name = "log",
        long_about = "Show the commit graph of the repository.\n\n\
            Walks every commit reachable from HEAD, local and remote branches, tags \
            and stash entries, newest first, and draws each on a lane. A commit \
            continues its first parent's lane; every further parent of a merge opens \
            a new lane. When the working tree has uncommitted changes, the first \
            lane is reserved for them.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show the graph (limited to the configured number of commits)
    lanegraph log

    # Only the 20 newest commits
    lanegraph log -n 20

    # Machine-readable rows with lane data
    lanegraph log --json

    # Ignore the working tree state
    lanegraph log --no-uncommitted

LEGEND:
    *   commit          s   stash entry
    |   passing lane    /   lane joining this commit
    \\   lane opened by this merge"
    )]
    Log {
        /// Maximum number of commits to show (overrides commits_limit)
        #[arg(short = 'n', long = "limit", value_name = "COUNT")]
        limit: Option<usize>,

        /// Output rows as JSON
        #[arg(long)]
        json: bool,

        /// Do not reserve a lane for uncommitted changes
        #[arg(long)]
        no_uncommitted: bool,
    },

    /// Show configuration values
    #[command(
        name = "config",
        long_about = "Show lanegraph configuration.\n\n\
            Global configuration is read from $LANEGRAPH_CONFIG, \
            $XDG_CONFIG_HOME/lanegraph/config.toml or ~/.lanegraph/config.toml. \
            Repository configuration is read from .git/lanegraph/config.toml and \
            overrides the global file.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List effective configuration values and where they came from
    lanegraph config list"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for lanegraph commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    lanegraph completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    lanegraph completion zsh >> ~/.zshrc

    # Fish
    lanegraph completion fish > ~/.config/fish/completions/lanegraph.fish

    # PowerShell
    lanegraph completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_flags_parse() {
        let cli = Cli::try_parse_from([
            "lanegraph",
            "--log-level",
            "trace",
            "log",
            "-n",
            "5",
            "--json",
            "--no-uncommitted",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LogLevel::Trace));
        match cli.command {
            Command::Log {
                limit,
                json,
                no_uncommitted,
            } => {
                assert_eq!(limit, Some(5));
                assert!(json);
                assert!(no_uncommitted);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lanegraph", "log", "--debug", "-q"]).unwrap();
        assert!(cli.debug);
        assert!(cli.quiet);
    }

    #[test]
    fn negative_limit_rejected() {
        assert!(Cli::try_parse_from(["lanegraph", "log", "-n", "-1"]).is_err());
    }
}
