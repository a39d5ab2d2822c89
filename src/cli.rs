// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Mode, Params};
use crate::error::RankError;
use crate::runner;

const USAGE: &str = "usage: cg_rank <snapshot index> | cg_rank --fetch  (try --help)";

pub fn run() -> Result<(), RankError> {
    if env::args().len() == 1 {
        // bare invocation: show help instead of a usage error
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    let params = parse_args(env::args().skip(1))?;
    runner::run(&params)
}

/// Parse one invocation's arguments. Split out from `run` so tests can
/// feed argument vectors directly.
pub fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Params, RankError> {
    let mut index: Option<u32> = None;
    let mut fetch_mode = false;
    let mut params = Params::new(Mode::Fetch); // mode fixed up below

    while let Some(a) = args.next() {
        match a.as_str() {
            "--fetch" | "-f" => fetch_mode = true,
            "--save" => params.save = true,
            "-d" | "--dir" => {
                let v = args.next().ok_or_else(|| usage("missing value for --dir"))?;
                params.dir = PathBuf::from(v);
            }
            "--threshold" => {
                let v = args.next().ok_or_else(|| usage("missing value for --threshold"))?;
                let t: f64 = v
                    .parse()
                    .map_err(|_| usage(&format!("invalid threshold: {}", v)))?;
                if !(t >= 0.0) {
                    return Err(usage("threshold must be >= 0"));
                }
                params.threshold = t;
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage("missing value for --out"))?;
                params.out = Some(PathBuf::from(v));
            }
            "--contest" => {
                params.fetch.contest_id =
                    args.next().ok_or_else(|| usage("missing value for --contest"))?;
            }
            "--task" => {
                params.fetch.task_id =
                    args.next().ok_or_else(|| usage("missing value for --task"))?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => {
                if index.is_some() {
                    return Err(usage(&format!("unexpected extra argument: {}", other)));
                }
                index = Some(
                    other
                        .parse()
                        .map_err(|_| usage(&format!("unknown arg: {}", other)))?,
                );
            }
        }
    }

    params.mode = match (fetch_mode, index) {
        (true, None) => Mode::Fetch,
        (true, Some(_)) => return Err(usage("--fetch does not take a snapshot index")),
        (false, Some(n)) => Mode::Compare(n),
        (false, None) => return Err(usage("missing snapshot index")),
    };
    Ok(params)
}

fn usage(why: &str) -> RankError {
    RankError::Usage(format!("{}\n{}", why, USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Params, RankError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn positional_index_selects_compare_mode() {
        let p = parse(&["3"]).unwrap();
        assert_eq!(p.mode, Mode::Compare(3));
        assert_eq!(p.dir, PathBuf::from("rank"));
        assert_eq!(p.threshold, 0.1);
    }

    #[test]
    fn flags_override_defaults() {
        let p = parse(&["3", "--dir", "snaps", "--threshold", "0.25"]).unwrap();
        assert_eq!(p.dir, PathBuf::from("snaps"));
        assert_eq!(p.threshold, 0.25);
    }

    #[test]
    fn fetch_mode_with_ids_and_save() {
        let p = parse(&["--fetch", "--contest", "abc", "--task", "42", "--save"]).unwrap();
        assert_eq!(p.mode, Mode::Fetch);
        assert_eq!(p.fetch.contest_id, "abc");
        assert_eq!(p.fetch.task_id, "42");
        assert!(p.save);
    }

    #[test]
    fn missing_index_is_a_usage_error() {
        assert!(matches!(parse(&[]), Err(RankError::Usage(_))));
        assert!(matches!(parse(&["--dir", "snaps"]), Err(RankError::Usage(_))));
    }

    #[test]
    fn extra_positional_is_a_usage_error() {
        assert!(matches!(parse(&["3", "4"]), Err(RankError::Usage(_))));
    }

    #[test]
    fn non_numeric_positional_is_a_usage_error() {
        let err = parse(&["three"]).unwrap_err();
        assert!(err.to_string().contains("unknown arg: three"));
    }

    #[test]
    fn fetch_plus_index_is_rejected() {
        assert!(matches!(parse(&["--fetch", "3"]), Err(RankError::Usage(_))));
    }

    #[test]
    fn bad_threshold_is_rejected() {
        assert!(matches!(parse(&["3", "--threshold", "x"]), Err(RankError::Usage(_))));
        assert!(matches!(parse(&["3", "--threshold", "-1"]), Err(RankError::Usage(_))));
    }
}
