//! Shared helpers used across gardengraph crates.

use crate::{Error, Result};

/// Generic JSON serialization with consistent error handling
pub fn to_json_string<T: serde::Serialize + ?Sized>(
    data: &T,
    context: &str,
    pretty: bool,
) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    };
    result.map_err(|e| Error::other(format!("Failed to serialize {} as JSON: {}", context, e)))
}

/// Split a path stem into its `/`-separated segments, keeping empty ones.
pub fn path_segments(path_stem: &str) -> Vec<&str> {
    path_stem.split('/').collect()
}
