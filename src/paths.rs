//! Home-directory expansion for configured paths.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::error::DotError;

/// A path with any leading `~` already replaced by the home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Expand a leading `~` in `input` using `home`.
///
/// - `~` and `~/rest` become `<home>` and `<home>/rest`.
/// - Anything not starting with `~` is returned unchanged.
/// - `~user/...` is rejected; only the current user's home is supported.
pub fn expand_home(input: &str, home: Option<&Path>) -> Result<ResolvedPath, DotError> {
    let fail = |reason| DotError::HomeExpansion {
        input: input.into(),
        reason,
    };

    if input.is_empty() {
        return Err(fail("path is empty"));
    }

    let Some(rest) = input.strip_prefix('~') else {
        return Ok(ResolvedPath(PathBuf::from(input)));
    };

    if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
        return Err(fail("user-specific home directories are not supported"));
    }

    let home = home.ok_or_else(|| fail("home directory unavailable"))?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Ok(ResolvedPath(home.to_path_buf()))
    } else {
        Ok(ResolvedPath(home.join(rest)))
    }
}
