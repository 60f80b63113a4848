use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use truco_bench::config::{ResolvedOutputs, SweepConfig};
use truco_bench::logging::{init_logging, init_stderr_logging};
use truco_bench::report::DecisionReport;
use truco_bench::sweep::SweepRunner;
use truco_bot::MachinePolicy;
use truco_core::game::serialization::IntelSnapshot;

/// Decision harness for the Truco bot.
#[derive(Debug, Parser)]
#[command(
    name = "truco-bench",
    author,
    version,
    about = "Deterministic Truco decision harness"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sample snapshots from seeded deals and record every decision.
    Sweep {
        /// Path to the YAML configuration file.
        #[arg(short, long, value_name = "FILE", default_value = "bench/sweep.yaml")]
        config: PathBuf,

        /// Override the run identifier (substitutes {run_id} templates).
        #[arg(long, value_name = "RUN_ID")]
        run_id: Option<String>,

        /// Override the number of snapshots to sample.
        #[arg(long, value_name = "HANDS")]
        hands: Option<usize>,

        /// Override the RNG seed for deal generation.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Exit after validating the configuration (no sweep is run).
        #[arg(long)]
        validate_only: bool,
    },
    /// Print all four decisions for one snapshot file.
    Decide {
        /// Path to an intel snapshot in JSON.
        #[arg(short, long, value_name = "FILE")]
        intel: PathBuf,

        /// Trace the rule behind each decision on stderr.
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sweep {
            config,
            run_id,
            hands,
            seed,
            validate_only,
        } => sweep(config, run_id, hands, seed, validate_only),
        Command::Decide { intel, verbose } => decide(intel, verbose),
    }
}

fn sweep(
    path: PathBuf,
    run_id: Option<String>,
    hands: Option<usize>,
    seed: Option<u64>,
    validate_only: bool,
) -> anyhow::Result<()> {
    let mut config = SweepConfig::from_path(&path)?;

    if let Some(run_id) = run_id {
        config.run_id = run_id;
    }

    if let Some(hands) = hands {
        config.deals.hands = hands;
    }

    if let Some(seed) = seed {
        config.deals.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    println!(
        "Loaded configuration '{run_id}' ({} snapshots, seed {})",
        config.deals.hands,
        config.deals.seed.unwrap_or(0)
    );

    if validate_only {
        println!("Validation-only mode: sweep execution skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = SweepRunner::new(config, outputs);
    let summary = runner.run()?;

    println!(
        "Sweep complete for '{run_id}': {} snapshots → {} rows at {}",
        summary.snapshots,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    println!(
        "  Truco called on {:.1}% of snapshots, raised back on {:.1}%",
        summary.tally.rate(summary.tally.escalations),
        summary.tally.rate(summary.tally.raises)
    );
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}

fn decide(path: PathBuf, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        init_stderr_logging(Level::INFO);
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading intel snapshot {}", path.display()))?;
    let snapshot = IntelSnapshot::from_json(&text)
        .with_context(|| format!("parsing intel snapshot {}", path.display()))?;
    let intel = snapshot
        .restore()
        .with_context(|| format!("decoding cards in {}", path.display()))?;

    let policy = MachinePolicy::from_env();
    let report = DecisionReport::evaluate(&policy, &intel)
        .with_context(|| format!("deciding for {}", path.display()))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
