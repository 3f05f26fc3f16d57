//! Rewrite `COPY ... FROM stdin` bulk-load blocks as row-by-row INSERTs.
//!
//! SQLite's loader does not understand the COPY protocol, so each block is
//! replaced with one INSERT per data row. Column order is recovered from
//! the table's `CREATE TABLE` definition earlier in the same text, which is
//! why this pass runs after schema-qualifier stripping and statement
//! reshaping.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::warnings::{ConvertWarning, WarningCollector};

/// A COPY block: header through the lone `\.` terminator line. The data
/// region may be empty.
static COPY_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)COPY (\w+) \([^)]+\) FROM stdin;(.*?)\n\\\.").unwrap());

/// Per-pass counters for COPY conversion
#[derive(Debug, Default)]
pub struct CopyStats {
    /// Blocks rewritten as INSERT statements
    pub blocks_converted: u64,
    /// Data rows emitted
    pub rows_converted: u64,
    /// Blocks dropped because no table definition was found
    pub blocks_dropped: u64,
}

/// Recover a table's column order from its `CREATE TABLE` body in `text`.
///
/// Each non-blank body line not starting with `CONSTRAINT` or `CHECK`
/// contributes its first whitespace-delimited token as a column name,
/// unless that token opens a multi-word constraint (`PRIMARY`, `FOREIGN`,
/// `UNIQUE`, `CHECK`). Returns None when the table has no definition.
pub fn table_columns(text: &str, table: &str) -> Option<Vec<String>> {
    // Table names come from a \w+ capture, so interpolation is regex-safe.
    let re = Regex::new(&format!(r"(?s)CREATE TABLE {table} \((.*?)\);")).ok()?;
    let body = re.captures(text)?.get(1)?.as_str();

    let mut columns = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("CONSTRAINT") || line.starts_with("CHECK") {
            continue;
        }
        let name = match line.split_whitespace().next() {
            Some(token) => token,
            None => continue,
        };
        if matches!(name, "PRIMARY" | "FOREIGN" | "UNIQUE" | "CHECK") {
            continue;
        }
        columns.push(name.to_string());
    }

    Some(columns)
}

/// Replace every COPY block in `text` with per-row INSERT statements.
///
/// A block whose table has no `CREATE TABLE` in the text is replaced with
/// nothing at all; the INSERT names only the first `values.len()` columns
/// when a row's width differs from the table's. Both degradations keep the
/// output shape and are recorded as warnings.
pub fn convert_copy_blocks(text: &str, warnings: &mut WarningCollector) -> (String, CopyStats) {
    let mut stats = CopyStats::default();

    let result = COPY_BLOCK.replace_all(text, |caps: &Captures| {
        let table = &caps[1];
        let data = &caps[2];

        let columns = match table_columns(text, table) {
            Some(columns) => columns,
            None => {
                stats.blocks_dropped += 1;
                warnings.add(ConvertWarning::DroppedCopyBlock {
                    table: table.to_string(),
                });
                return String::new();
            }
        };

        let mut inserts = Vec::new();
        for line in data.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let values: Vec<String> = line.split('\t').map(format_value).collect();
            if values.len() != columns.len() {
                warnings.add(ConvertWarning::RowWidthMismatch {
                    table: table.to_string(),
                    columns: columns.len(),
                    values: values.len(),
                });
            }

            let named: Vec<&str> = columns
                .iter()
                .take(values.len())
                .map(|c| c.as_str())
                .collect();
            inserts.push(format!(
                "INSERT INTO {} ({}) VALUES ({});",
                table,
                named.join(", "),
                values.join(", ")
            ));
        }

        stats.blocks_converted += 1;
        stats.rows_converted += inserts.len() as u64;
        inserts.join("\n")
    });

    (result.into_owned(), stats)
}

/// Format a single tab-separated value for an INSERT.
///
/// `\N` is the COPY NULL marker and is emitted unquoted; every other value
/// becomes a single-quoted literal with embedded quotes doubled, numerics
/// and booleans included. SQLite's type coercion on insert makes the
/// all-quoted form tolerable.
fn format_value(raw: &str) -> String {
    if raw == r"\N" {
        "NULL".to_string()
    } else {
        format!("'{}'", raw.replace('\'', "''"))
    }
}
