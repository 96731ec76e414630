//! Command-line interface for grade-recon.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reconcile**: Match a grade sheet against a roster and write the four
//!   output artifacts
//! - **probe**: Classify a single name against a roster (debugging aid)
//! - **roster**: Inspect a roster (entry count, normalized-name collisions)
//!
//! ## Usage
//!
//! ```text
//! # Reconcile a grade sheet, scores in column N
//! grade-recon reconcile grades.csv roster.csv --score-column N \
//!     --series "3rd Series" --exam "Final Exam" --out-dir results
//!
//! # Check where one name would land
//! grade-recon probe "Maria da Silva" roster.csv
//!
//! # JSON summary for scripting
//! grade-recon reconcile grades.csv roster.csv -c N \
//!     --series 3A --exam P1 --format json
//! ```

use clap::{Parser, Subcommand};

pub mod probe;
pub mod reconcile;
pub mod roster;

#[derive(Parser)]
#[command(name = "grade-recon")]
#[command(version)]
#[command(about = "Reconcile class grade sheets against a master student roster")]
#[command(
    long_about = "grade-recon maps free-text student names from a class grade sheet to canonical roster identifiers, tolerating accents, truncation, and partial spellings.\n\nEach unique name lands in exactly one bucket:\n- matched: unique exact roster hit, emitted to the import file\n- partial: a unique roster name extends the sheet name, emitted and logged for review\n- ambiguous: several roster candidates, logged for manual resolution\n- not found: no usable roster match"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for run summaries
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a grade sheet against a roster
    Reconcile(reconcile::ReconcileArgs),

    /// Classify a single name against a roster
    Probe(probe::ProbeArgs),

    /// Inspect a roster
    Roster(roster::RosterArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
