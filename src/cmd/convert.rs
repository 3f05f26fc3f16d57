//! Convert command CLI handler.

use crate::convert::{self, ConvertConfig, ConvertStats};
use std::path::PathBuf;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    progress: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    let config = ConvertConfig {
        input: file,
        output,
        progress,
        dry_run,
    };

    let stats = convert::run(config)?;

    print_stats(&stats, dry_run);

    Ok(())
}

fn print_stats(stats: &ConvertStats, dry_run: bool) {
    eprintln!();
    eprintln!("Conversion statistics:");
    eprintln!("  Bytes read: {}", stats.bytes_read);
    eprintln!("  Bytes written: {}", stats.bytes_written);
    eprintln!(
        "  PostgreSQL-only statements removed: {}",
        stats.statements_stripped
    );
    eprintln!(
        "  COPY blocks converted: {} ({} rows)",
        stats.copy_blocks_converted, stats.rows_converted
    );
    if stats.copy_blocks_dropped > 0 {
        eprintln!(
            "  COPY blocks dropped (no table definition): {}",
            stats.copy_blocks_dropped
        );
    }

    if !stats.warnings.is_empty() {
        eprintln!();
        eprintln!("Warnings ({}):", stats.warnings.len());
        for warning in &stats.warnings {
            eprintln!("  ⚠ {}", warning);
        }
    }

    if dry_run {
        eprintln!();
        eprintln!("(Dry run - no output written)");
    }
}
