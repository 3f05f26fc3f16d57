//! Column type remapping from PostgreSQL to SQLite storage classes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered rewrite table, applied top to bottom. Parameterized forms must
/// come before their bare counterparts: if `varchar` fired before
/// `varchar(n)`, the output would keep a stray parameter suffix
/// (`TEXT(255)`).
static TYPE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)character varying\(\d+\)", "TEXT"),
        (r"(?i)character varying", "TEXT"),
        (r"(?i)varchar\(\d+\)", "TEXT"),
        (r"(?i)varchar", "TEXT"),
        (r"(?i)timestamp without time zone", "DATETIME"),
        (r"(?i)timestamp with time zone", "DATETIME"),
        (r"(?i)timestamp", "DATETIME"),
        (r"(?i)boolean", "INTEGER"),
        (r"(?i)text", "TEXT"),
        (r"(?i)integer", "INTEGER"),
        (r"(?i)bigint", "INTEGER"),
        (r"(?i)smallint", "INTEGER"),
        (r"(?i)numeric\(\d+,\d+\)", "REAL"),
        (r"(?i)numeric", "REAL"),
        (r"(?i)real", "REAL"),
        (r"(?i)double precision", "REAL"),
    ]
    .iter()
    .map(|(pattern, target)| (Regex::new(pattern).unwrap(), *target))
    .collect()
});

/// Type mapper for the PostgreSQL → SQLite direction
pub struct TypeMapper;

impl TypeMapper {
    /// Replace every occurrence of each source type token, in table order.
    ///
    /// Replacement is blind text substitution, not scoped to type position:
    /// a matching token inside a string literal or identifier is rewritten
    /// too. Accepted trade-off for dumps of known shape.
    pub fn remap(text: &str) -> String {
        let mut result = text.to_string();

        for (re, target) in TYPE_RULES.iter() {
            result = re.replace_all(&result, *target).into_owned();
        }

        result
    }
}
