//! Default action: runs when `dot` is invoked.
//!
//! # Steps
//!
//! | # | Step                                                   | Fails with                   |
//! |---|--------------------------------------------------------|------------------------------|
//! | 1 | Announce the config file, if one was read              | —                            |
//! | 2 | Print the raw `dotfiles.path`                          | `MissingRequiredConfigValue` |
//! | 3 | Expand `dotfiles.path` and `dotfiles.backup`           | `HomeExpansion`              |
//! | 4 | Print the expanded dotfiles path and the list header   | —                            |
//! | 5 | Walk the backup directory behind a spinner             | `Walk`                       |
//! | 6 | Print every entry below the backup root, numbered 1..N | —                            |
//!
//! Nothing from step 6 is printed unless the walk completed.

use std::{io::Write, path::Path};

use anyhow::Result;

use crate::{
    config::Settings,
    error::DotError,
    paths::expand_home,
    ui,
    walk::{FileList, walk_with},
};

pub const DOTFILES_PATH_KEY: &str = "dotfiles.path";
pub const DOTFILES_BACKUP_KEY: &str = "dotfiles.backup";

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Resolve the configured paths and list everything under the backup path.
///
/// `home` is used to expand a leading `~` in either path.
pub fn run(settings: &Settings, home: Option<&Path>, out: &mut impl Write) -> Result<()> {
    if let Some(path) = settings.file_used() {
        ui::config_notice(out, path)?;
    }

    let raw_dotfiles = settings.get_str(DOTFILES_PATH_KEY)?;
    ui::dotfiles_location(out, &raw_dotfiles)?;

    let dotfiles = expand_home(&raw_dotfiles, home)?;
    let backup = expand_home(&settings.get_str(DOTFILES_BACKUP_KEY)?, home)?;

    ui::dotfiles_location(out, &dotfiles)?;
    ui::listing_header(out)?;
    out.flush()?;

    let files = scan(backup.as_path())?;
    tracing::debug!(
        root = %files.root().display(),
        entries = files.entry_count(),
        "walk complete"
    );

    ui::listing(out, &files)?;
    Ok(())
}

/// Walk `root` while a spinner counts visited entries.
///
/// Each visited entry bumps the spinner, which also redraws it.
fn scan(root: &Path) -> Result<FileList, DotError> {
    let spinner = ui::make_spinner(&format!("Scanning {}", root.display()));
    let result = walk_with(root, |_| spinner.inc(1));
    spinner.finish_and_clear();
    result
}

// ─── Tests ────────────────────────────────────────────────────────────────────
