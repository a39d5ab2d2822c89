// src/diff.rs

use crate::snapshot::ScoreEntry;

/// One significant timing change between two snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct Change {
    pub index: usize,
    pub name: String,
    pub from: f64,
    pub to: f64,
    pub delta: f64,
}

/// Positional diff: entry `i` in `old` is taken to be the same
/// participant as entry `i` in `new`. That is an ordering assumption,
/// not an identity join; snapshots are expected to list participants
/// in a stable order.
///
/// Caller must have verified `old.len() == new.len()`; this indexes
/// `new[i]` without defending against a short right-hand side.
pub fn significant_changes(old: &[ScoreEntry], new: &[ScoreEntry], threshold: f64) -> Vec<Change> {
    let mut out = Vec::new();
    for (i, a) in old.iter().enumerate() {
        let b = &new[i];
        let delta = b.time - a.time;
        if delta.abs() >= threshold {
            out.push(Change {
                index: i,
                name: a.name.clone(),
                from: a.time,
                to: b.time,
                delta,
            });
        }
    }
    out
}

/// Render one change the way the report prints it:
///
/// ```text
/// alice           1.00 -> 1.15     (+0.15)
/// ```
///
/// Name from the OLD snapshot, both times at two decimals, delta signed
/// with an explicit `+` for gains.
pub fn format_change(c: &Change) -> String {
    let sign = if c.delta > 0.0 { "+" } else { "" };
    let transition = format!("{:.2} -> {:.2}", c.from, c.to);
    format!("{:<15} {:<16} ({}{:.2})", c.name, transition, sign, c.delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, time: f64) -> ScoreEntry {
        ScoreEntry {
            id: s!("0"),
            name: s!(name),
            status: s!("AC"),
            time,
            best: time,
            team: s!("t"),
        }
    }

    #[test]
    fn reports_only_deltas_at_or_over_threshold() {
        let old = vec![entry("a", 1.0), entry("b", 2.0), entry("c", 3.0)];
        let new = vec![entry("a", 1.05), entry("b", 2.10), entry("c", 2.80)];

        let changes = significant_changes(&old, &new, 0.1);
        let names: Vec<&str> = changes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]); // 0.05 below, 0.10 boundary in, 0.20 in
        assert_eq!(changes[0].index, 1);
        assert_eq!(changes[1].index, 2);
    }

    #[test]
    fn boundary_delta_is_inclusive() {
        let old = vec![entry("a", 1.0)];
        let new = vec![entry("a", 1.1)];
        assert_eq!(significant_changes(&old, &new, 1.1 - 1.0).len(), 1);
    }

    #[test]
    fn name_comes_from_the_old_snapshot() {
        let old = vec![entry("before", 1.0)];
        let new = vec![entry("after", 2.0)];
        let changes = significant_changes(&old, &new, 0.1);
        assert_eq!(changes[0].name, "before");
    }

    #[test]
    fn nan_times_never_report() {
        let old = vec![entry("a", f64::NAN)];
        let new = vec![entry("a", 1.0)];
        assert!(significant_changes(&old, &new, 0.1).is_empty());
    }

    #[test]
    fn formats_positive_with_plus_and_padding() {
        let c = Change {
            index: 0,
            name: s!("Alice"),
            from: 1.0,
            to: 1.15,
            delta: 0.15,
        };
        assert_eq!(format_change(&c), "Alice           1.00 -> 1.15     (+0.15)");
    }

    #[test]
    fn formats_negative_with_its_own_sign() {
        let c = Change {
            index: 0,
            name: s!("bob"),
            from: 2.5,
            to: 2.1,
            delta: -0.4,
        };
        assert_eq!(format_change(&c), "bob             2.50 -> 2.10     (-0.40)");
    }

    #[test]
    fn zero_delta_at_zero_threshold_is_unsigned() {
        let old = vec![entry("a", 1.0)];
        let new = vec![entry("a", 1.0)];
        let changes = significant_changes(&old, &new, 0.0);
        assert_eq!(changes.len(), 1);
        assert_eq!(
            format_change(&changes[0]),
            "a               1.00 -> 1.00     (0.00)"
        );
    }
}
