//! log command - Show the lane-annotated commit graph

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::Context;
use crate::core::config::Config;
use crate::git::Git;
use crate::graph::{load_log, LogOptions};
use crate::ui::{output, render};

/// Show the commit graph.
///
/// `limit` overrides the configured `commits_limit`; `no_uncommitted`
/// overrides `show_uncommitted`.
pub fn log(ctx: &Context, limit: Option<usize>, json: bool, no_uncommitted: bool) -> Result<()> {
    let cwd = ctx.cwd()?;
    let git = Git::open(&cwd).context("Failed to open repository")?;
    let config = Config::load(Some(git.git_dir()))
        .context("Failed to load config")?
        .config;

    let limit = limit.unwrap_or_else(|| config.commits_limit());
    let options = LogOptions {
        limit: Some(limit),
        show_uncommitted: !no_uncommitted && config.show_uncommitted(),
    };
    debug!(?options, "loading log");

    let log = load_log(&git, options).context("Failed to build commit graph")?;

    if json {
        return output::json(&log);
    }

    // `-n 0` asks for no rows; only an unborn HEAD means there are no commits.
    if log.graph.is_empty() && !log.has_uncommitted_changes {
        if limit > 0 {
            output::warn("no commits yet", ctx.verbosity());
        }
        return Ok(());
    }

    print!("{}", render::render_log(&log));
    Ok(())
}
