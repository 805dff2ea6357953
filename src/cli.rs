//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  `Cli` is parsed once in `main`.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments.  There are no subcommands: `dot` always runs the
/// listing.
#[derive(Parser, Debug)]
#[command(
    name    = "dot",
    about   = "Show where your dotfiles live and list what is queued for backup",
    version,
    // Show a compact two-column help layout.
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// config file (default is $HOME/.dot.toml)
    ///
    /// When given, the file must exist and be valid TOML.  Without it,
    /// `~/.dot.toml` is used if present, otherwise only environment
    /// variables such as `DOTFILES_PATH` are consulted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reserved for future use; currently has no effect.
    #[arg(short, long)]
    pub toggle: bool,
}
