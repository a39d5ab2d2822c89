// src/store.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::SNAPSHOT_EXT;
use crate::error::RankError;

/// Path of snapshot `n` inside `dir`: `<dir>/<n>.txt`.
pub fn snapshot_path(dir: &Path, n: u32) -> PathBuf {
    dir.join(join!(n.to_string(), ".", SNAPSHOT_EXT))
}

/// Highest numbered snapshot already on disk, if any. Non-numeric
/// stems and other extensions are ignored.
pub fn latest_index(dir: &Path) -> Option<u32> {
    let mut latest: Option<u32> = None;
    for entry in fs::read_dir(dir).ok()?.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some(SNAPSHOT_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Ok(n) = stem.parse::<u32>() {
            latest = Some(latest.map_or(n, |m| m.max(n)));
        }
    }
    latest
}

/// Write raw table rows as the next numbered snapshot: one row per
/// line, cells joined with single spaces. Well-formed six-column rows
/// round-trip through `snapshot::parse_line`. Returns the path written.
pub fn save_next_snapshot(dir: &Path, rows: &[Vec<String>]) -> Result<PathBuf, RankError> {
    ensure_directory(dir)?;
    let n = latest_index(dir).map_or(1, |m| m + 1);
    let path = snapshot_path(dir, n);

    let mut buf = s!();
    for row in rows {
        buf.push_str(&row.join(" "));
        buf.push('\n');
    }
    fs::write(&path, buf)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), RankError> {
    if dir.exists() && !dir.is_dir() {
        return Err(RankError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
