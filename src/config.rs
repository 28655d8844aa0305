use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Default forge registry base URL.
pub const DEFAULT_FORGE_URL: &str = "https://forgeapi.puppet.com";

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "deps.toml";

/// Default ignore file name.
pub const DEFAULT_IGNORE_FILE: &str = ".modauditignore";

/// Timeout for `git ls-remote` in seconds.
pub const GIT_TIMEOUT_SECS: u64 = 30;

/// Loads the ignore list: one dependency name per line, trimmed, blank
/// lines skipped. A missing file yields an empty set.
pub fn load_ignore_list(path: &Path) -> io::Result<HashSet<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(err) => return Err(err),
    };

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
