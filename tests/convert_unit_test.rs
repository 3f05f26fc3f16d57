//! Unit tests for the convert pipeline against the library API.

use pg2sqlite::convert::{convert_dump, table_columns, ConvertWarning, TypeMapper};

#[test]
fn test_supported_types_map_to_storage_classes() {
    let input = "\
a character varying(120), b character varying, c varchar(64), d varchar, \
e timestamp without time zone, f timestamp with time zone, g timestamp, \
h boolean, i text, j integer, k bigint, l smallint, \
m numeric(10,2), n numeric, o real, p double precision";
    let output = TypeMapper::remap(input);

    assert_eq!(
        output,
        "a TEXT, b TEXT, c TEXT, d TEXT, \
e DATETIME, f DATETIME, g DATETIME, \
h INTEGER, i TEXT, j INTEGER, k INTEGER, l INTEGER, \
m REAL, n REAL, o REAL, p REAL"
    );
}

#[test]
fn test_no_leftover_parameter_suffixes() {
    let output = TypeMapper::remap("a varchar(255), b numeric(8,3), c character varying(40)");

    assert!(!output.contains('('), "parameter suffix survived: {output}");
}

#[test]
fn test_copy_block_three_columns_with_null() {
    let dump = "\
CREATE TABLE t (
    a INTEGER,
    b TEXT,
    c TEXT
);

COPY t (a, b, c) FROM stdin;
1\tfoo\t\\N
\\.
";
    let (out, _) = convert_dump(dump);

    assert!(out.contains("INSERT INTO t (a, b, c) VALUES ('1', 'foo', NULL);"));
}

#[test]
fn test_quote_doubling_round_trip() {
    let dump = "\
CREATE TABLE people (
    name TEXT
);

COPY people (name) FROM stdin;
O'Brien
\\.
";
    let (out, _) = convert_dump(dump);

    assert!(out.contains("'O''Brien'"));
}

#[test]
fn test_unmatched_copy_block_vanishes() {
    let dump = "\
CREATE TABLE known (
    id INTEGER
);

COPY unknown (id, name) FROM stdin;
1\tlost
\\.
";
    let (out, stats) = convert_dump(dump);

    assert!(!out.contains("INSERT"));
    assert!(!out.contains("lost"));
    assert_eq!(stats.copy_blocks_dropped, 1);
    assert_eq!(
        stats.warnings,
        vec![ConvertWarning::DroppedCopyBlock {
            table: "unknown".to_string()
        }]
    );
}

#[test]
fn test_blank_line_collapse_and_idempotence() {
    let dump = "CREATE TABLE a (\n    x INTEGER\n);\n\n\n\n\n\nCREATE TABLE b (\n    y TEXT\n);\n";
    let (once, _) = convert_dump(dump);
    let (twice, _) = convert_dump(&once);

    assert!(once.contains(");\n\nCREATE TABLE b"));
    assert_eq!(once, twice);
}

#[test]
fn test_alter_only_and_using_btree() {
    let dump = "\
ALTER TABLE ONLY users ADD CONSTRAINT users_pkey PRIMARY KEY (id);
CREATE INDEX idx_users_username ON users USING btree (username);
";
    let (out, _) = convert_dump(dump);

    assert!(out.contains("ALTER TABLE users ADD CONSTRAINT"));
    assert!(!out.contains("ONLY"));
    assert!(out.contains("ON users (username);"));
    assert!(!out.contains("USING btree"));
}

#[test]
fn test_dump_comments_stripped() {
    let dump = "\
--
-- PostgreSQL database dump
--

CREATE TABLE t (
    id integer
);
";
    let (out, _) = convert_dump(dump);

    assert!(!out.contains("--"));
    assert!(out.contains("CREATE TABLE t"));
}

#[test]
fn test_table_columns_sees_converted_text() {
    // Column recovery runs against the same text the pipeline rewrote, so
    // qualified names resolve after the qualifier strip.
    let dump = "\
CREATE TABLE public.reviews (
    id integer NOT NULL,
    rating integer
);

COPY public.reviews (id, rating) FROM stdin;
7\t5
\\.
";
    let (out, stats) = convert_dump(dump);

    assert!(out.contains("INSERT INTO reviews (id, rating) VALUES ('7', '5');"));
    assert_eq!(stats.copy_blocks_dropped, 0);
}

#[test]
fn test_table_columns_excludes_constraint_lines() {
    let text = "\
CREATE TABLE likes (
    user_id INTEGER,
    review_id INTEGER,
    CONSTRAINT likes_pkey PRIMARY KEY (user_id, review_id),
    UNIQUE (user_id, review_id)
);";
    let columns = table_columns(text, "likes").unwrap();

    assert_eq!(columns, vec!["user_id", "review_id"]);
}

#[test]
fn test_row_width_mismatch_preserved_and_flagged() {
    let dump = "\
CREATE TABLE t (
    a INTEGER,
    b TEXT,
    c TEXT
);

COPY t (a, b, c) FROM stdin;
1\tx
\\.
";
    let (out, stats) = convert_dump(dump);

    // Output keeps the truncated column list; the mismatch only warns.
    assert!(out.contains("INSERT INTO t (a, b) VALUES ('1', 'x');"));
    assert_eq!(stats.warnings.len(), 1);
}

#[test]
fn test_type_tokens_rewritten_inside_data() {
    // Characterized trade-off of blind substitution: a type token inside a
    // quoted value is remapped along with everything else.
    let dump = "\
CREATE TABLE notes (
    body text
);

COPY notes (body) FROM stdin;
thinking about boolean algebra
\\.
";
    let (out, _) = convert_dump(dump);

    assert!(out.contains("'thinking about INTEGER algebra'"));
}
