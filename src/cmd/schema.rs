//! Schema command CLI handler.

use crate::schema;
use std::path::PathBuf;

pub fn run(output: PathBuf) -> anyhow::Result<()> {
    schema::write_baseline_schema(&output)?;

    eprintln!("Schema written: {}", output.display());
    eprintln!("Create the database with:");
    eprintln!(
        "  sqlite3 database/dev/tuneboxd_dev.db < {}",
        output.display()
    );

    Ok(())
}
