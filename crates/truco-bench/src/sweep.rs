use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};
use truco_bot::{BotParams, DecisionError, MachinePolicy, Policy};
use truco_core::game::serialization::IntelSnapshot;

use crate::analytics::{AnalyticsError, DecisionTally};
use crate::config::{ResolvedOutputs, SweepConfig};
use crate::report::DecisionReport;
use crate::sampler::ScenarioSampler;

/// Runs the policy over a seeded batch of sampled snapshots.
pub struct SweepRunner {
    config: SweepConfig,
    outputs: ResolvedOutputs,
    policy: MachinePolicy,
    logging_enabled: bool,
}

/// Summary details returned after a run.
pub struct SweepSummary {
    pub snapshots: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub tally: DecisionTally,
}

impl SweepRunner {
    /// Environment thresholds first, then any `params` block from the config.
    pub fn new(config: SweepConfig, outputs: ResolvedOutputs) -> Self {
        let params = config.params.apply(BotParams::from_env());
        Self {
            logging_enabled: config.logging.enable_structured,
            config,
            outputs,
            policy: MachinePolicy::new(params),
        }
    }

    pub fn policy(&self) -> &MachinePolicy {
        &self.policy
    }

    /// Execute the sweep, streaming JSONL rows to disk.
    pub fn run(&self) -> Result<SweepSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut sampler = ScenarioSampler::new(self.config.deals.seed.unwrap_or(0));
        let mut tally = DecisionTally::new();
        let mut rows_written = 0usize;

        for deal_index in 0..self.config.deals.hands {
            let deal = sampler.next_deal().ok_or(RunnerError::EmptyDeck { deal_index })?;

            let start = Instant::now();
            let report = DecisionReport::evaluate(&self.policy, &deal.intel)
                .map_err(|source| RunnerError::Decision { deal_index, source })?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            tally.record(&report, elapsed_ms);

            if self.logging_enabled && tracing::enabled!(Level::INFO) {
                event!(
                    target: "truco_bench::sweep",
                    Level::INFO,
                    run_id = %self.config.run_id,
                    deal_index = deal_index as u32,
                    deal_seed = deal.seed,
                    card = %report.card,
                    escalate = report.initiate_escalation,
                    response = %report.response,
                    elapsed_ms
                );
            }

            let row = SweepLogRow {
                run_id: &self.config.run_id,
                deal_id: format!("D{deal_index:05}"),
                deal_index,
                deal_seed: deal.seed,
                snapshot: IntelSnapshot::capture(&deal.intel),
                decisions: &report,
                elapsed_ms,
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }

        writer.flush()?;
        tally.write_markdown(
            &self.config.run_id,
            self.policy.identify(),
            &self.outputs.summary_md,
        )?;

        Ok(SweepSummary {
            snapshots: self.config.deals.hands,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            tally,
        })
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SweepLogRow<'a> {
    run_id: &'a str,
    deal_id: String,
    deal_index: usize,
    deal_seed: u64,
    snapshot: IntelSnapshot,
    decisions: &'a DecisionReport,
    elapsed_ms: f64,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("deal {deal_index} ran out of cards")]
    EmptyDeck { deal_index: usize },
    #[error("deal {deal_index} was rejected: {source}")]
    Decision {
        deal_index: usize,
        #[source]
        source: DecisionError,
    },
    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}
