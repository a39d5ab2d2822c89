// src/config/consts.rs

// Net config
pub const HOST: &str = "course.educg.net";
pub const PORT: u16 = 80;
pub const RANK_PAGE: &str = "/pages/contest/contest_rank_more.jsp";
pub const DEFAULT_CONTEST_ID: &str = "y9s9zPhwJPE";
pub const DEFAULT_TASK_ID: &str = "7090546";

// Snapshots
pub const DEFAULT_SNAPSHOT_DIR: &str = "rank";
pub const SNAPSHOT_EXT: &str = "txt";

// Compare
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// Rank table layout. Snapshot lines use the same order:
//   <id> <name> <status> <time> <best> <team...>
pub const COL_NAME: usize = 1;
pub const COL_SELF_TIME: usize = 3;
pub const COL_BEST_TIME: usize = 4;
