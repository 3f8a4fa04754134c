//! config command - List effective configuration values

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;
use crate::git::Git;
use crate::ui::output;

/// List all configuration values.
///
/// Works outside a repository too; only the global file is read then.
pub fn list(ctx: &Context) -> Result<()> {
    let cwd = ctx.cwd()?;
    let git = Git::open(&cwd).ok();
    let config = Config::load(git.as_ref().map(|g| g.git_dir()))
        .context("Failed to load config")?
        .config;
    let verbosity = ctx.verbosity();

    println!("commits_limit = {}", config.commits_limit());
    println!("show_uncommitted = {}", config.show_uncommitted());

    match config.global_config_loaded_from() {
        Some(path) => output::print(format!("# global: {}", path.display()), verbosity),
        None => output::print("# global: (defaults)", verbosity),
    }
    match (config.repo_config_loaded_from(), git.is_some()) {
        (Some(path), _) => output::print(format!("# repo: {}", path.display()), verbosity),
        (None, true) => output::print("# repo: (none)", verbosity),
        (None, false) => output::print("# repo: (not in a repository)", verbosity),
    }

    Ok(())
}
