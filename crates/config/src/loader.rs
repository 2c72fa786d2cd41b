//! Parse and load the user's action tree.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{ActionTree, Error, validate};

/// Parse an action tree from JSON text.
///
/// Validation findings (duplicate sibling keys, shadowed `?` bindings) are
/// logged as warnings; they never fail the load since dispatch has defined
/// behavior for both.
pub fn load_from_str(source: &str) -> Result<ActionTree, Error> {
    load_inner(source, None)
}

/// Load an action tree from a JSON file at `path`.
pub fn load_from_path(path: &Path) -> Result<ActionTree, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_inner(&source, Some(path))
}

/// Shared parse + validate step.
fn load_inner(source: &str, path: Option<&Path>) -> Result<ActionTree, Error> {
    let tree: ActionTree = serde_json::from_str(source).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        line: e.line(),
        col: e.column(),
        message: e.to_string(),
    })?;
    for issue in validate(&tree) {
        warn!("config: {}", issue);
    }
    Ok(tree)
}

/// The preferred user config path
/// (`~/Library/Application Support/Leader Key/config.json`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push("Library");
    p.push("Application Support");
    p.push("Leader Key");
    p.push("config.json");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use the default path when it exists.
/// 3) Else return a clear "no config found" error.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let preferred = default_config_path();
    if preferred.exists() {
        return Ok(preferred);
    }

    Err(Error::Read {
        path: Some(preferred),
        message: "No config found. Create config.json in the app support directory".to_string(),
    })
}
