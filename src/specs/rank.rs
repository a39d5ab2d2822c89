// src/specs/rank.rs

use crate::config::consts::{COL_BEST_TIME, COL_NAME, COL_SELF_TIME};
use crate::config::options::FetchOptions;
use crate::core::{html, net};
use crate::error::RankError;
use crate::snapshot::lenient_f64;

/// Raw rank table: optional header row plus one Vec of cell texts per
/// participant row, in page order.
#[derive(Debug)]
pub struct RankBundle {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl RankBundle {
    /// `(name, self time, best time)` display triples. Rows too short
    /// to carry the time columns are skipped, mirroring the snapshot
    /// line filter.
    pub fn triples(&self) -> Vec<(String, f64, f64)> {
        self.rows
            .iter()
            .filter(|row| row.len() > COL_BEST_TIME)
            .map(|row| {
                (
                    row[COL_NAME].clone(),
                    lenient_f64(&row[COL_SELF_TIME]),
                    lenient_f64(&row[COL_BEST_TIME]),
                )
            })
            .collect()
    }
}

/// GET the rank page for one contest/task and extract its table.
pub fn fetch_and_extract(opts: &FetchOptions) -> Result<RankBundle, RankError> {
    let doc = net::http_get(&opts.host, opts.port, &opts.rank_query())?;
    logd!("fetched {} bytes from {}", doc.len(), opts.host);
    extract(&doc)
}

/// Pure extraction, testable offline against captured pages.
///
/// Takes the first `<table>` in the document (the rank page has only
/// one), prefers its `<tbody>` when present, reads a `<th>` header row
/// if the page ships one, then one row of cell texts per `<tr>`.
pub fn extract(doc: &str) -> Result<RankBundle, RankError> {
    let (ts, te) = html::tag_block(doc, "table", 0).ok_or(RankError::Extract { what: "rank table" })?;
    let table = &doc[ts..te];

    // The header row usually sits in a <thead> outside the body, so
    // look for it across the whole table.
    let headers = html::tag_blocks(table, "tr")
        .map(|tr| html::tag_blocks(tr, "th").map(html::block_text).collect::<Vec<_>>())
        .find(|cells| !cells.is_empty());

    let body = match html::tag_block(table, "tbody", 0) {
        Some((bs, be)) => &table[bs..be],
        None => table,
    };

    let mut rows = Vec::new();
    for tr in html::tag_blocks(body, "tr") {
        if html::tag_block(tr, "th", 0).is_some() {
            continue; // header row repeated inside the body
        }
        let cells: Vec<String> = html::tag_blocks(tr, "td").map(html::block_text).collect();
        if cells.is_empty() {
            continue;
        }
        rows.push(cells);
    }

    Ok(RankBundle { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h3>Contest rank</h3>
        <table class="rank-table">
          <thead><tr><th>#</th><th>Name</th><th>Status</th><th>Self</th><th>Best</th><th>Team</th></tr></thead>
          <tbody>
            <tr><td>1</td><td><a href="u?1">alice</a></td><td>AC</td><td>1.50</td><td>1.25</td><td>red&nbsp;one</td></tr>
            <tr><td>2</td><td>bob</td><td>WA</td><td>--</td><td>2.00</td><td>blue</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn extracts_headers_and_rows() {
        let bundle = extract(PAGE).unwrap();
        assert_eq!(
            bundle.headers.as_deref(),
            Some(&["#", "Name", "Status", "Self", "Best", "Team"].map(String::from)[..])
        );
        assert_eq!(bundle.rows.len(), 2);
        assert_eq!(bundle.rows[0], vec!["1", "alice", "AC", "1.50", "1.25", "red one"]);
        assert_eq!(bundle.rows[1][1], "bob");
    }

    #[test]
    fn triples_use_name_and_time_columns() {
        let bundle = extract(PAGE).unwrap();
        let t = bundle.triples();
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].0, "alice");
        assert_eq!(t[0].1, 1.50);
        assert_eq!(t[0].2, 1.25);
        assert!(t[1].1.is_nan()); // "--" placeholder
    }

    #[test]
    fn short_rows_are_dropped_from_triples() {
        let bundle = RankBundle {
            headers: None,
            rows: vec![vec![s!("only"), s!("two")]],
        };
        assert!(bundle.triples().is_empty());
    }

    #[test]
    fn missing_table_is_an_extract_error() {
        let err = extract("<html><body>login required</body></html>").unwrap_err();
        assert!(matches!(err, RankError::Extract { .. }));
    }

    #[test]
    fn table_without_tbody_still_extracts() {
        let doc = "<table><tr><td>1</td><td>x</td></tr></table>";
        let bundle = extract(doc).unwrap();
        assert_eq!(bundle.rows, vec![vec![s!("1"), s!("x")]]);
        assert!(bundle.headers.is_none());
    }
}
