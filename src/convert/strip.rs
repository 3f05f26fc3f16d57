//! Removal passes for dump content with no SQLite equivalent.
//!
//! Covers PostgreSQL-only statements (session settings, catalog calls,
//! extensions, function bodies, sequences, privileges) and the `public`
//! schema qualifier.

use once_cell::sync::Lazy;
use regex::Regex;

/// Statement patterns removed outright, in application order. The character
/// classes (`[^;]`, `[^$]`) match newlines, so function bodies and other
/// multi-line statements are consumed without a multi-line flag.
///
/// An unterminated dollar-quoted body makes the CREATE FUNCTION pattern eat
/// greedily up to the next `$$;` in the dump. Known limitation.
static POSTGRES_ONLY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"SET\s+[^;]+;",
        r"SELECT pg_catalog\.[^;]+;",
        r"CREATE EXTENSION[^;]+;",
        r"COMMENT ON[^;]+;",
        r"CREATE FUNCTION[^;$]+\$\$[^$]*\$\$;",
        r"CREATE SEQUENCE[^;]+;",
        r"ALTER SEQUENCE[^;]+;",
        r"ALTER TABLE[^;]*SET DEFAULT nextval[^;]+;",
        r"GRANT[^;]+;",
        r"REVOKE[^;]+;",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Remove every PostgreSQL-only statement from the dump text.
///
/// Returns the rewritten text and the number of statements removed.
pub fn strip_postgres_only(text: &str) -> (String, usize) {
    let mut result = text.to_string();
    let mut removed = 0;

    for re in POSTGRES_ONLY.iter() {
        removed += re.find_iter(&result).count();
        result = re.replace_all(&result, "").into_owned();
    }

    (result, removed)
}

static SCHEMA_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"public\.").unwrap());
static SCHEMA_CREATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"SCHEMA public").unwrap());

/// Remove the default-schema qualifier; SQLite has no schema namespace.
///
/// Must run before COPY conversion so that `public.tablename` references
/// match the unqualified `CREATE TABLE` lookup.
pub fn strip_schema_qualifier(text: &str) -> String {
    let result = SCHEMA_PREFIX.replace_all(text, "");
    SCHEMA_CREATE.replace_all(&result, "").into_owned()
}
