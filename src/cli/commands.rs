use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::error::SeedResult;
use crate::excel::RosterImporter;
use crate::generator::{IdBaseline, SqlGenerator};
use crate::normalize::normalize;
use crate::sql;

/// Execute the generate command: roster .xlsx in, bulk INSERT document
/// out (or to stdout with --dry-run).
pub fn generate(
    input: PathBuf,
    baseline: IdBaseline,
    year_segment: String,
    out: PathBuf,
    dry_run: bool,
    verbose: bool,
) -> SeedResult<()> {
    println!("{}", "🌱 sqlseed - Generating bulk INSERT statements".bold().green());
    println!("   Roster: {}", input.display());
    println!("   Year segment: {}", year_segment.bright_blue());
    println!();

    if dry_run {
        println!("{}", "📋 DRY RUN MODE - No file will be written\n".yellow());
    }

    if verbose {
        println!("{}", "📖 Reading first worksheet...".cyan());
    }
    let table = RosterImporter::new(&input).import()?;
    if verbose {
        println!(
            "   Found {} data rows, {} columns\n",
            table.row_count(),
            table.column_names().count()
        );
    }

    let rows = normalize(&table)?;

    let generated = SqlGenerator::new(baseline, year_segment).generate(&rows);
    if verbose {
        println!("{}", "🧮 Allocated IDs:".cyan());
        println!("   categories:  {}", generated.categories.len());
        println!("   posts:       {}", generated.posts.len());
        println!("   exhibitions: {}", generated.exhibitions.len());
        println!("   files:       {}\n", generated.files.len());
    }

    let document = sql::render_document(&generated);

    if dry_run {
        print!("{document}");
        println!("{}", "📋 Dry run complete - no file written".yellow());
    } else {
        fs::write(&out, &document)?;
        println!(
            "{} {}",
            "✅ SQL written to".bold().green(),
            out.display()
        );
        println!(
            "   {} categories, {} posts, {} exhibitions, {} files",
            generated.categories.len(),
            generated.posts.len(),
            generated.exhibitions.len(),
            generated.files.len()
        );
    }

    Ok(())
}
