use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::roster::Roster;
use crate::matching::engine::{ProgressEvent, Reconciler, RunOutcome};
use crate::parsing::column::score_column_index;
use crate::parsing::table::{parse_grade_file, parse_roster_file};
use crate::report;
use crate::report::writer::{append_with_banner, write_overwrite, ArtifactPaths};

#[derive(Args)]
pub struct ReconcileArgs {
    /// Grade sheet CSV: name in column A, score in --score-column
    #[arg(required = true)]
    pub grades: PathBuf,

    /// Roster CSV: identifier in column A, full name in column B
    #[arg(required = true)]
    pub roster: PathBuf,

    /// Spreadsheet letter of the score column (e.g. 'N' or 'P')
    #[arg(short = 'c', long)]
    pub score_column: String,

    /// Series label, used in artifact names and banners
    #[arg(long)]
    pub series: String,

    /// Exam label, used in artifact names and banners
    #[arg(long)]
    pub exam: String,

    /// Directory the artifacts are written to
    #[arg(long, default_value = "results")]
    pub out_dir: PathBuf,

    /// Preamble rows of the grade sheet to skip before reading data
    #[arg(long, default_value = "0")]
    pub skip_rows: usize,
}

/// Execute the reconcile subcommand.
///
/// # Errors
///
/// Returns an error for an invalid score column, unreadable inputs, an empty
/// grade sheet, or a failed artifact write.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Validated before any file is opened
    let column = score_column_index(&args.score_column)?;

    let sheet = parse_grade_file(&args.grades, column, args.skip_rows)
        .with_context(|| format!("cannot read grade sheet {}", args.grades.display()))?;
    let entries = parse_roster_file(&args.roster)
        .with_context(|| format!("cannot read roster {}", args.roster.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} grade rows ({} dropped without a valid score), {} roster entries",
            sheet.rows.len(),
            sheet.dropped_rows,
            entries.len()
        );
    }

    let roster = Roster::from_entries(entries);
    let engine = Reconciler::new(&roster);

    let outcome = engine
        .reconcile_with_progress(&sheet.rows, |event| {
            if verbose {
                if let ProgressEvent::Record {
                    index,
                    total,
                    raw_name,
                } = event
                {
                    eprintln!("[{}/{total}] {raw_name}", index + 1);
                }
            }
        })
        .with_context(|| format!("grade sheet {} yielded nothing to reconcile", args.grades.display()))?;

    let label = format!("{} - {}", args.series, args.exam);
    let written = write_artifacts(&outcome, &args.out_dir, &label)?;

    // Mirror the not-found list to the live status stream
    if !outcome.not_found.is_empty() {
        eprintln!("\nStudents not found:");
        eprintln!("-------------------------");
        for name in &outcome.not_found {
            eprintln!("{name}");
        }
    }

    match format {
        OutputFormat::Text => print_text_summary(&outcome, sheet.dropped_rows, &written),
        OutputFormat::Json => print_json_summary(&outcome, sheet.dropped_rows, &written)?,
    }

    Ok(())
}

/// Write each non-empty artifact; returns the paths actually written.
fn write_artifacts(
    outcome: &RunOutcome,
    out_dir: &std::path::Path,
    label: &str,
) -> anyhow::Result<Vec<PathBuf>> {
    let paths = ArtifactPaths::new(out_dir, label);
    let mut written = Vec::new();

    if outcome.import_rows.is_empty() {
        eprintln!("Warning: no uniquely matched students; import file not written.");
    } else {
        write_overwrite("import", &paths.import, &report::render_import(&outcome.import_rows))?;
        written.push(paths.import.clone());
    }

    if !outcome.ambiguous.is_empty() {
        write_overwrite(
            "ambiguities",
            &paths.ambiguities,
            &report::render_ambiguities(&outcome.ambiguous),
        )?;
        written.push(paths.ambiguities.clone());
    }

    if !outcome.partial.is_empty() {
        append_with_banner(
            "partial matches",
            &paths.partials,
            &format!("Partial matches in {label}"),
            &report::render_partials(&outcome.partial),
        )?;
        written.push(paths.partials.clone());
    }

    if !outcome.not_found.is_empty() {
        append_with_banner(
            "students not found",
            &paths.not_found,
            &format!("Students not found in {label}"),
            &report::render_not_found(&outcome.not_found),
        )?;
        written.push(paths.not_found.clone());
    }

    Ok(written)
}

fn print_text_summary(outcome: &RunOutcome, dropped_rows: usize, written: &[PathBuf]) {
    let s = &outcome.summary;
    println!("Reconciliation finished.");
    println!(
        "  {} source rows ({} dropped without a valid score), {} unique names",
        s.source_rows, dropped_rows, s.unique_names
    );
    println!(
        "  matched: {}, partial: {}, ambiguous: {}, not found: {}",
        s.matched, s.partial, s.ambiguous, s.not_found
    );
    if s.duplicates_skipped > 0 {
        println!("  duplicates skipped: {}", s.duplicates_skipped);
    }
    if s.empty_names_skipped > 0 {
        println!("  empty names skipped: {}", s.empty_names_skipped);
    }

    if s.partial > 0 {
        println!("  NOTE: partial name matches were imported; review the partial matches file.");
    }
    if s.ambiguous > 0 {
        println!("  NOTE: ambiguous names need manual resolution; see the ambiguities file.");
    }

    if written.is_empty() {
        println!("  no artifacts written");
    } else {
        println!("  artifacts:");
        for path in written {
            println!("    {}", path.display());
        }
    }
}

fn print_json_summary(
    outcome: &RunOutcome,
    dropped_rows: usize,
    written: &[PathBuf],
) -> anyhow::Result<()> {
    let json = serde_json::json!({
        "summary": outcome.summary,
        "dropped_rows": dropped_rows,
        "import_rows": outcome.import_rows,
        "partial": outcome.partial,
        "ambiguous": outcome.ambiguous,
        "not_found": outcome.not_found,
        "artifacts": written,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
