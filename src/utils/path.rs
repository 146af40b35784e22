//! Path helpers for user-supplied file arguments.

use std::path::PathBuf;

/// Resolve a user-typed path: expand a leading `~/` against the home
/// directory, leave absolute and relative paths as-is.
pub fn resolve_user_path(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
