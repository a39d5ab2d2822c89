// src/runner.rs

use std::fs;

use crate::config::options::{Mode, Params};
use crate::error::RankError;
use crate::{diff, snapshot, specs, store};

/// Top-level runner: dispatch on mode and run.
pub fn run(params: &Params) -> Result<(), RankError> {
    match params.mode {
        Mode::Compare(n) => compare(params, n),
        Mode::Fetch => fetch(params),
    }
}

/* ---------------- Compare ---------------- */

fn compare(params: &Params, n: u32) -> Result<(), RankError> {
    let path_old = store::snapshot_path(&params.dir, n);
    let path_new = store::snapshot_path(&params.dir, n + 1);

    // Sequential reads; each file handle is closed before the next open.
    let old = snapshot::read(&path_old)?;
    let new = snapshot::read(&path_new)?;
    logf!(
        "compare {} ({} entries) vs {} ({} entries)",
        path_old.display(),
        old.len(),
        path_new.display(),
        new.len()
    );

    // The differ pairs entries by index and does not defend against
    // mismatched lengths, so gate here.
    if old.len() != new.len() {
        return Err(RankError::LengthMismatch {
            left: old.len(),
            right: new.len(),
        });
    }

    println!("Significant changes:");
    for change in diff::significant_changes(&old, &new, params.threshold) {
        println!("{}", diff::format_change(&change));
    }
    Ok(())
}

/* ---------------- Fetch ---------------- */

fn fetch(params: &Params) -> Result<(), RankError> {
    let bundle = specs::rank::fetch_and_extract(&params.fetch)?;
    logf!("rank page yielded {} rows", bundle.rows.len());

    let mut csv = s!();
    for (name, time, best) in bundle.triples() {
        csv.push_str(&format!("{},{},{}\n", name, time, best));
    }
    print!("{}", csv);

    if let Some(out) = &params.out {
        fs::write(out, &csv)?;
        println!("Wrote {}", out.display());
    }

    if params.save {
        let path = store::save_next_snapshot(&params.dir, &bundle.rows)?;
        logf!("saved snapshot {}", path.display());
        println!("Wrote {}", path.display());
    }
    Ok(())
}
