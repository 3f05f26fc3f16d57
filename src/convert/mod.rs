//! Convert command for translating a PostgreSQL dump into SQLite SQL.
//!
//! The converter is a stateless text pipeline: the whole dump is read into
//! memory as one string and rewritten pass by pass:
//! - PostgreSQL-only statement removal (SET, pg_catalog, sequences, ...)
//! - Column type remapping to SQLite storage classes
//! - `public.` schema qualifier removal
//! - Statement reshaping (CREATE TABLE layout, USING btree, ALTER TABLE ONLY)
//! - COPY FROM stdin → INSERT conversion
//! - Cosmetic cleanup (blank lines, line comments)
//!
//! Pass order matters in two places only: qualifier stripping and statement
//! reshaping must both run before COPY conversion, which recovers each
//! table's column list from the reshaped, unqualified CREATE TABLE text.
//!
//! The output is written exactly once, at the end, from the fully
//! transformed in-memory string. A failed run never leaves a partial file.

mod copy_to_insert;
mod normalize;
mod strip;
mod types;
mod warnings;

pub use copy_to_insert::{convert_copy_blocks, table_columns, CopyStats};
pub use types::TypeMapper;
pub use warnings::{ConvertWarning, WarningCollector};

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Configuration for the convert command
#[derive(Debug)]
pub struct ConvertConfig {
    /// Input PostgreSQL dump file
    pub input: PathBuf,
    /// Output SQL file (None for stdout)
    pub output: Option<PathBuf>,
    /// Show progress
    pub progress: bool,
    /// Dry run mode
    pub dry_run: bool,
}

/// Statistics from a convert run
#[derive(Debug, Default)]
pub struct ConvertStats {
    /// Size of the input dump
    pub bytes_read: u64,
    /// Size of the transformed output
    pub bytes_written: u64,
    /// PostgreSQL-only statements removed
    pub statements_stripped: u64,
    /// COPY blocks rewritten as INSERTs
    pub copy_blocks_converted: u64,
    /// Data rows emitted as INSERT statements
    pub rows_converted: u64,
    /// COPY blocks dropped for lack of a table definition
    pub copy_blocks_dropped: u64,
    /// Warnings generated
    pub warnings: Vec<ConvertWarning>,
}

/// Apply the full rewrite pipeline to a dump held in memory.
///
/// Pure function over the text; file handling lives in [`run`].
pub fn convert_dump(dump: &str) -> (String, ConvertStats) {
    let mut stats = ConvertStats::default();
    let mut warnings = WarningCollector::new();

    let (text, stripped) = strip::strip_postgres_only(dump);
    stats.statements_stripped = stripped as u64;

    let text = TypeMapper::remap(&text);
    let text = strip::strip_schema_qualifier(&text);
    let text = normalize::reshape_statements(&text);

    let (text, copy_stats) = convert_copy_blocks(&text, &mut warnings);
    stats.copy_blocks_converted = copy_stats.blocks_converted;
    stats.rows_converted = copy_stats.rows_converted;
    stats.copy_blocks_dropped = copy_stats.blocks_dropped;

    let text = normalize::cleanup(&text);

    stats.warnings = warnings.into_warnings();
    (text, stats)
}

/// Run the convert command
pub fn run(config: ConvertConfig) -> anyhow::Result<ConvertStats> {
    let progress_bar = if config.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Converting...");
        Some(pb)
    } else {
        None
    };

    let dump = fs::read_to_string(&config.input)?;

    let (converted, mut stats) = convert_dump(&dump);
    stats.bytes_read = dump.len() as u64;
    stats.bytes_written = converted.len() as u64;

    if !config.dry_run {
        match &config.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(path, &converted)?;
            }
            None => {
                std::io::stdout().write_all(converted.as_bytes())?;
            }
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!(
            "Converted {} COPY blocks ({} rows)",
            stats.copy_blocks_converted, stats.rows_converted
        ));
    }

    Ok(stats)
}
