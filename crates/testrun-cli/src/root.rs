use std::path::{Path, PathBuf};
use testrun_core::rules::{default_rules, marker_present};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `TESTRUN_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for any recognized marker file
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.clone();
    loop {
        let marked = default_rules()
            .iter()
            .flat_map(|r| r.markers.iter())
            .any(|m| marker_present(&dir, m));
        if marked {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}
