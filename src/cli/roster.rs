use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::roster::Roster;
use crate::parsing::table::parse_roster_file;

#[derive(Args)]
pub struct RosterArgs {
    /// Roster CSV: identifier in column A, full name in column B
    #[arg(required = true)]
    pub roster: PathBuf,
}

/// Execute the roster subcommand: entry count plus any entries that collide
/// on a normalized name. The engine never deduplicates the roster, so
/// collisions guarantee ambiguous classifications for those names.
///
/// # Errors
///
/// Returns an error if the roster cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RosterArgs, format: OutputFormat) -> anyhow::Result<()> {
    let entries = parse_roster_file(&args.roster)
        .with_context(|| format!("cannot read roster {}", args.roster.display()))?;
    let roster = Roster::from_entries(entries);
    let collisions = roster.normalized_collisions();

    match format {
        OutputFormat::Text => {
            println!("{} roster entries", roster.len());
            if collisions.is_empty() {
                println!("no normalized-name collisions");
            } else {
                println!("{} normalized-name collision(s):", collisions.len());
                for (name, entries) in &collisions {
                    println!("  {name}");
                    for entry in entries {
                        println!("  - id: {}, name: '{}'", entry.id, entry.full_name);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries": roster.len(),
                "collisions": collisions
                    .iter()
                    .map(|(name, entries)| serde_json::json!({
                        "normalized_name": name,
                        "entries": entries,
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
