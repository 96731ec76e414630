use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::roster::Roster;
use crate::core::types::MatchOutcome;
use crate::matching::engine::Reconciler;
use crate::parsing::table::parse_roster_file;

#[derive(Args)]
pub struct ProbeArgs {
    /// Name to classify, as it appears in a grade sheet
    #[arg(required = true)]
    pub name: String,

    /// Roster CSV: identifier in column A, full name in column B
    #[arg(required = true)]
    pub roster: PathBuf,

    /// Score to carry through the classification
    #[arg(long, default_value = "0")]
    pub score: f64,
}

/// Execute the probe subcommand.
///
/// # Errors
///
/// Returns an error if the roster cannot be read or the name is empty after
/// normalization.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ProbeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let entries = parse_roster_file(&args.roster)
        .with_context(|| format!("cannot read roster {}", args.roster.display()))?;
    let roster = Roster::from_entries(entries);
    let engine = Reconciler::new(&roster);

    let outcome = engine
        .classify(&args.name, args.score)
        .ok_or_else(|| anyhow::anyhow!("name {:?} is empty after normalization", args.name))?;

    match format {
        OutputFormat::Text => print_text(&args.name, &outcome),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

fn print_text(name: &str, outcome: &MatchOutcome) {
    match outcome {
        MatchOutcome::Matched { id, .. } => {
            println!("{name}: matched -> id {id}");
        }
        MatchOutcome::PartialMatched {
            id,
            matched_full_name,
            ..
        } => {
            println!("{name}: partial -> id {id} ('{matched_full_name}')");
        }
        MatchOutcome::Ambiguous { candidates, .. } => {
            println!("{name}: ambiguous, {} candidates:", candidates.len());
            for candidate in candidates {
                println!("- id: {}, name: '{}'", candidate.id, candidate.full_name);
            }
        }
        MatchOutcome::NotFound { .. } => {
            println!("{name}: not found");
        }
    }
}
