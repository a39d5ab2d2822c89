// src/snapshot.rs

use std::fs;
use std::path::Path;

use crate::error::RankError;

/// One participant's row in a rank snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreEntry {
    pub id: String,
    pub name: String,
    pub status: String,
    pub time: f64,
    pub best: f64,
    pub team: String,
}

/// Parse one snapshot line:
///
/// ```text
/// <id> <name> <status> <time> <best> <team tokens...>
/// ```
///
/// Fields are separated by runs of whitespace. Lines with fewer than
/// six fields are not records (headers, blanks, separators) and yield
/// `None`; that is a filter, not an error. Trailing fields past the
/// fifth all belong to the team name and are concatenated as-is.
pub fn parse_line(line: &str) -> Option<ScoreEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 6 {
        return None;
    }

    Some(ScoreEntry {
        id: s!(parts[0]),
        name: s!(parts[1]),
        status: s!(parts[2]),
        time: lenient_f64(parts[3]),
        best: lenient_f64(parts[4]),
        team: parts[5..].concat(),
    })
}

/// Lenient numeric field: junk becomes NaN instead of killing the row.
/// Captured pages put placeholder dashes in the time columns; dropping
/// those rows would silently shift the positional alignment the differ
/// depends on.
pub fn lenient_f64(tok: &str) -> f64 {
    tok.parse::<f64>().unwrap_or(f64::NAN)
}

/// Read every valid entry from a snapshot file, in file order.
/// File order is load-bearing: the differ pairs two snapshots by index.
pub fn read(path: &Path) -> Result<Vec<ScoreEntry>, RankError> {
    let text = fs::read_to_string(path).map_err(|source| RankError::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().filter_map(parse_line).collect())
}
