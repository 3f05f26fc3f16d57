mod convert;
mod schema;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pg2sqlite")]
#[command(version)]
#[command(about = "Convert a PostgreSQL dump into SQLite-compatible SQL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a PostgreSQL dump file to SQLite-compatible SQL
    Convert {
        /// Input PostgreSQL dump file (pg_dump plain-text format)
        file: PathBuf,

        /// Output SQL file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress during conversion
        #[arg(short, long)]
        progress: bool,

        /// Run the pipeline without writing output (dry run)
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the baseline SQLite schema for the review app
    Schema {
        /// Output path for the schema document
        #[arg(short, long, default_value = crate::schema::DEFAULT_SCHEMA_PATH)]
        output: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Convert {
            file,
            output,
            progress,
            dry_run,
        } => convert::run(file, output, progress, dry_run),
        Commands::Schema { output } => schema::run(output),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pg2sqlite", &mut io::stdout());
            Ok(())
        }
    }
}
