//! Error type shared by the config loader, path resolver, and walker.
//!
//! Every variant maps to exactly one failure condition.  None of them are
//! recovered from locally: they bubble up to `main`, which prints the message
//! and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotError {
    /// `--config` pointed at a file that does not exist.
    #[error("config file '{}' not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("reading config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid TOML.
    #[error("parsing config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("cannot expand '{input}': {reason}")]
    HomeExpansion { input: String, reason: &'static str },

    /// A required key is absent from both the file and the environment, or
    /// holds something other than a string.
    #[error("required config value '{key}' is missing or not a string")]
    MissingRequiredConfigValue { key: String },

    #[error("walking '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
