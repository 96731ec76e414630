use clap::Parser;
use tracing_subscriber::EnvFilter;

use grade_recon::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("grade_recon=debug,info")
    } else {
        EnvFilter::new("grade_recon=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Reconcile(args) => {
            cli::reconcile::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Probe(args) => {
            cli::probe::run(args, cli.format)?;
        }
        cli::Commands::Roster(args) => {
            cli::roster::run(args, cli.format)?;
        }
    }

    Ok(())
}
