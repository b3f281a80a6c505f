use clap::{Parser, Subcommand};
use sqlseed::cli;
use sqlseed::error::SeedResult;
use sqlseed::generator::IdBaseline;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlseed")]
#[command(about = "Turn an exhibition roster spreadsheet into bulk SQL INSERT statements")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Generate bulk INSERT statements from a roster .xlsx file.

Reads the first worksheet, maps bilingual headers onto the canonical
columns (분반 → category_name, 작품명 → post_title, ...), assigns
sequential IDs above the supplied per-table maxima, and writes one SQL
document seeding the category, post, exhibition and file tables.

The --*-max options take the current MAX(id) of each target table so the
generated IDs continue where the database left off.

EXAMPLES:
  sqlseed generate roster.xlsx
  sqlseed generate roster.xlsx --cat-max 12 --post-max 340 -o seed.sql
  sqlseed generate roster.xlsx --year 20252 --dry-run")]
    /// Generate bulk INSERT statements from a roster .xlsx
    Generate {
        /// Path to the roster Excel file (.xlsx)
        excel: PathBuf,

        /// Current maximum id of the category table
        #[arg(long, default_value_t = 0)]
        cat_max: i64,

        /// Current maximum id of the post table
        #[arg(long, default_value_t = 0)]
        post_max: i64,

        /// Current maximum id of the exhibition table
        #[arg(long, default_value_t = 0)]
        exh_max: i64,

        /// Current maximum id of the file table
        #[arg(long, default_value_t = 0)]
        file_max: i64,

        /// Output SQL file path
        #[arg(short, long, default_value = "bulk_insert.sql")]
        out: PathBuf,

        /// Year segment used in generated upload paths
        #[arg(long, default_value = "20251")]
        year: String,

        /// Print the SQL document to stdout instead of writing a file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose generation steps
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> SeedResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            excel,
            cat_max,
            post_max,
            exh_max,
            file_max,
            out,
            year,
            dry_run,
            verbose,
        } => cli::generate(
            excel,
            IdBaseline {
                category: cat_max,
                post: post_max,
                exhibition: exh_max,
                file: file_max,
            },
            year,
            out,
            dry_run,
            verbose,
        ),
    }
}
