//! Configuration loading: one TOML file overlaid with environment variables.
//!
//! # File format
//!
//! ```toml
//! [dotfiles]
//! path   = "~/dotfiles"          # where the dotfiles live
//! backup = "~/.config"           # what gets listed for backup
//! ```
//!
//! # Sources
//!
//! 1. `--config <path>` if given.  The file must exist and parse; there is no
//!    fallback.
//! 2. Otherwise `~/.dot.toml`.  A missing default file is fine (only the
//!    environment is consulted); a malformed one is an error.
//!
//! Every lookup checks the environment first.  `dotfiles.backup` is read from
//! `DOTFILES_BACKUP`, matched case-insensitively, and beats the file value
//! unless it is empty.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use toml::Value;

use crate::error::DotError;

/// File name looked up in the home directory when `--config` is omitted.
pub const DEFAULT_CONFIG_NAME: &str = ".dot.toml";

// ─── Source ───────────────────────────────────────────────────────────────────

/// Where the file-sourced values came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found at `~/.dot.toml`.
    Discovered(PathBuf),
    /// No file: only environment variables are available.
    EnvironmentOnly,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Discovered(p) => Some(p),
            Self::EnvironmentOnly => None,
        }
    }
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Read-only view over the merged configuration.
///
/// Built once in `main` and handed to the command by reference.
#[derive(Debug)]
pub struct Settings {
    /// Flattened file values keyed by lower-case dotted path.
    values: BTreeMap<String, Value>,
    /// Environment snapshot keyed by upper-case variable name.
    env: BTreeMap<String, String>,
    source: ConfigSource,
}

impl Settings {
    /// Assemble settings from an already-parsed table and an environment
    /// snapshot.
    pub fn from_parts<I>(table: toml::Table, env: I, source: ConfigSource) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = BTreeMap::new();
        flatten("", table, &mut values);

        let env = env
            .into_iter()
            .map(|(name, value)| (name.to_uppercase(), value))
            .collect();

        Self {
            values,
            env,
            source,
        }
    }

    /// Look up `key` (e.g. `dotfiles.path`), environment first.
    ///
    /// A variable that is set but empty does not override the file.
    pub fn get(&self, key: &str) -> Option<Value> {
        let key = key.to_lowercase();
        let var = env_var_name(&key);
        if let Some(value) = self.env.get(&var).filter(|v| !v.is_empty()) {
            tracing::debug!(key = %key, var = %var, "using environment override");
            return Some(Value::String(value.clone()));
        }
        self.values.get(&key).cloned()
    }

    /// Like [`Settings::get`] but the value must be present and a string.
    pub fn get_str(&self, key: &str) -> Result<String, DotError> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s),
            _ => Err(DotError::MissingRequiredConfigValue { key: key.into() }),
        }
    }

    /// The config file that was read, if any.
    pub fn file_used(&self) -> Option<&Path> {
        self.source.path()
    }
}

/// Map a dotted key to the environment variable that overrides it.
///
/// `dotfiles.backup` → `DOTFILES_BACKUP`.
pub fn env_var_name(key: &str) -> String {
    key.replace(['.', '-'], "_").to_uppercase()
}

fn flatten(prefix: &str, table: toml::Table, out: &mut BTreeMap<String, Value>) {
    for (name, value) in table {
        let name = name.to_lowercase();
        let key = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::Table(inner) => flatten(&key, inner, out),
            other => {
                out.insert(key, other);
            },
        }
    }
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Load settings from the process environment.
///
/// `home` is only consulted when `explicit` is `None`.
pub fn load_from_process(
    explicit: Option<&Path>,
    home: Option<&Path>,
) -> Result<Settings, DotError> {
    load(explicit, home, std::env::vars())
}

/// Locate, read, and parse the config file, then overlay `env`.
pub fn load<I>(
    explicit: Option<&Path>,
    home: Option<&Path>,
    env: I,
) -> Result<Settings, DotError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let source = match explicit {
        Some(path) => ConfigSource::Explicit(path.to_path_buf()),
        None => {
            let home = home.ok_or(DotError::HomeDirUnavailable)?;
            let candidate = home.join(DEFAULT_CONFIG_NAME);
            let found = candidate
                .try_exists()
                .map_err(|source| DotError::ConfigRead {
                    path: candidate.clone(),
                    source,
                })?;
            if found {
                ConfigSource::Discovered(candidate)
            } else {
                tracing::debug!(path = %candidate.display(), "no default config file");
                ConfigSource::EnvironmentOnly
            }
        },
    };

    let table = match source.path() {
        Some(path) => read_table(path)?,
        None => toml::Table::new(),
    };

    tracing::debug!(?source, keys = table.len(), "configuration loaded");
    Ok(Settings::from_parts(table, env, source))
}

fn read_table(path: &Path) -> Result<toml::Table, DotError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            DotError::ConfigNotFound(path.to_path_buf())
        } else {
            DotError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&text).map_err(|source| DotError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
