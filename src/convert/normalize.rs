//! Statement reshaping and the final cosmetic cleanup pass.

use once_cell::sync::Lazy;
use regex::Regex;

static CREATE_TABLE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CREATE TABLE (\w+) \(\s*").unwrap());
static USING_BTREE: Lazy<Regex> = Lazy::new(|| Regex::new(r" USING btree").unwrap());
static ALTER_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"ALTER TABLE ONLY ").unwrap());

/// Adjust statement shapes that PostgreSQL emits but SQLite rejects or does
/// not need: the first column of a CREATE TABLE moves to its own indented
/// line (cosmetic, and COPY conversion relies on one declaration per line),
/// the `USING btree` index method goes away, and `ALTER TABLE ONLY` loses
/// the ONLY.
pub fn reshape_statements(text: &str) -> String {
    let result = CREATE_TABLE_OPEN.replace_all(text, "CREATE TABLE ${1} (\n    ");
    let result = USING_BTREE.replace_all(&result, "");
    ALTER_ONLY.replace_all(&result, "ALTER TABLE ").into_owned()
}

static EXCESS_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"--.*\n").unwrap());

/// Cosmetic cleanup after all structural rewrites: collapse runs of blank
/// lines to a single blank line and strip `--` line comments. No awareness
/// of string-literal context; a `--` inside data is stripped too.
pub fn cleanup(text: &str) -> String {
    let result = EXCESS_BLANKS.replace_all(text, "\n\n");
    LINE_COMMENT.replace_all(&result, "").into_owned()
}
