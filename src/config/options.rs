// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where one contest's rank page lives. Handed to the fetcher at call
/// time; nothing in here is process-global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub host: String,
    pub port: u16,
    pub page: String,
    pub contest_id: String,
    pub task_id: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            host: s!(HOST),
            port: PORT,
            page: s!(RANK_PAGE),
            contest_id: s!(DEFAULT_CONTEST_ID),
            task_id: s!(DEFAULT_TASK_ID),
        }
    }
}

impl FetchOptions {
    /// Path + query string for the rank page.
    pub fn rank_query(&self) -> String {
        format!(
            "{}?contestID={}&taskID={}",
            self.page, self.contest_id, self.task_id
        )
    }
}

/// What one invocation should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Diff snapshots `n` and `n + 1`.
    Compare(u32),
    /// Fetch the live rank page and print/export it.
    Fetch,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub mode: Mode,
    pub dir: PathBuf,          // snapshot directory
    pub threshold: f64,        // minimum |delta| worth reporting
    pub out: Option<PathBuf>,  // fetch mode: also export CSV here
    pub save: bool,            // fetch mode: write next snapshot file
    pub fetch: FetchOptions,
}

impl Params {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            threshold: DEFAULT_THRESHOLD,
            out: None,
            save: false,
            fetch: FetchOptions::default(),
        }
    }
}
