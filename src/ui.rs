//! Terminal output: status lines, the enumerated listing, the walk spinner,
//! and error reporting.
//!
//! Everything that goes to stdout is plain text written through a
//! `&mut impl Write`, so tests can render into a `Vec<u8>`.  Styling is only
//! applied on stderr (spinner, error prefix).

use std::{
    fmt,
    io::{self, Write},
    path::Path,
};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::walk::FileList;

/// Braille spinner frames, same style as indicatif's default.
static SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

// ─── Status lines ─────────────────────────────────────────────────────────────

pub fn config_notice(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "Using config file: {}", path.display())
}

/// `Current location of your dotfiles: <location>`
pub fn dotfiles_location(out: &mut impl Write, location: &dyn fmt::Display) -> io::Result<()> {
    writeln!(out, "Current location of your dotfiles: {location}")
}

pub fn listing_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "We're currently backing up:")
}

// ─── Listing ──────────────────────────────────────────────────────────────────

/// Print one indented, 1-based line per entry below the root.
///
/// The root itself is never printed.
pub fn listing(out: &mut impl Write, files: &FileList) -> io::Result<()> {
    for (index, path) in files.descendants().iter().enumerate() {
        writeln!(out, "\t {} : {}", index + 1, path.display())?;
    }
    Ok(())
}

// ─── Spinner ──────────────────────────────────────────────────────────────────

/// Create an indeterminate spinner on stderr.
///
/// There is no background ticker: the spinner advances each time the caller
/// calls `inc`, so the walk stays on one thread.  indicatif hides it when
/// stderr is not a terminal, so piped output stays clean.
pub fn make_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::with_template("  {spinner:.cyan}  {msg} ({pos} entries)")
        .map_or_else(
            |_| ProgressStyle::default_spinner(),
            |s| s.tick_chars(SPINNER_CHARS),
        );
    pb.set_style(spinner_style);
    pb.set_message(format!("{}", style(label).dim()));
    pb
}

// ─── Errors ───────────────────────────────────────────────────────────────────

/// Print `Error: <message>` to stderr, cause chain joined on one line.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("Error:").red().bold());
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn dots() -> FileList {
        let root = PathBuf::from("/tmp/dots");
        FileList::new(root.clone(), vec![
            root.join("a.txt"),
            root.join("sub"),
            root.join("sub/b.txt"),
        ])
    }

    #[test]
    fn listing_skips_root_and_starts_at_one() {
        let out = render(|w| listing(w, &dots()));
        let lines: Vec<&str> = out.lines().collect();
        insta::assert_debug_snapshot!(lines, @r#"
        [
            "\t 1 : /tmp/dots/a.txt",
            "\t 2 : /tmp/dots/sub",
            "\t 3 : /tmp/dots/sub/b.txt",
        ]
        "#);
    }

    #[test]
    fn listing_of_empty_directory_prints_nothing() {
        let files = FileList::new("/tmp/empty".into(), Vec::new());
        assert_eq!(render(|w| listing(w, &files)), "");
    }

    #[test]
    fn status_lines() {
        let out = render(|w| {
            config_notice(w, Path::new("/home/alice/.dot.toml"))?;
            dotfiles_location(w, &"~/dots")?;
            listing_header(w)
        });
        insta::assert_snapshot!(out.trim_end(), @r"
        Using config file: /home/alice/.dot.toml
        Current location of your dotfiles: ~/dots
        We're currently backing up:
        ");
    }

    #[test]
    fn spinner_can_be_started_and_cleared() {
        let pb = make_spinner("Scanning");
        pb.inc(3);
        assert_eq!(pb.position(), 3);
        assert!(!pb.is_finished());
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
