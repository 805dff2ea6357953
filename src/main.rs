//! `dot`: show where your dotfiles live and list what is queued for backup.
//!
//! # Overview
//!
//! Reads `~/.dot.toml` (or the file given with `--config`), lets environment
//! variables override any key, expands the two configured paths, and prints
//! every entry found under the backup directory.
//!
//! # Usage
//!
//! ```text
//! dot                        # use ~/.dot.toml
//! dot --config other.toml    # use a specific file
//! DOTFILES_BACKUP=~/x dot    # override a single key
//! RUST_LOG=debug dot         # trace config discovery on stderr
//! ```
//!
//! # Module layout
//!
//! | Module            | Responsibility                                  |
//! |-------------------|-------------------------------------------------|
//! | [`cli`]           | Argument types parsed by clap                   |
//! | [`config`]        | TOML discovery, env overlay, typed accessors    |
//! | [`paths`]         | `~` expansion                                   |
//! | [`walk`]          | Recursive directory listing                     |
//! | [`ui`]            | Status lines, listing, spinner, error output    |
//! | [`commands::run`] | The default action                              |
//! | [`error`]         | Shared error type                               |

mod cli;
mod commands;
mod config;
mod error;
mod paths;
mod ui;
mod walk;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::filter::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the listing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "aborting");
            ui::print_error(&err);
            ExitCode::FAILURE
        },
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    if cli.toggle {
        tracing::debug!("--toggle is reserved and has no effect");
    }

    // Looked up once; both config discovery and `~` expansion use it.
    let home = dirs::home_dir();

    let settings = config::load_from_process(cli.config.as_deref(), home.as_deref())?;

    let stdout = std::io::stdout();
    commands::run::run(&settings, home.as_deref(), &mut stdout.lock())
}
