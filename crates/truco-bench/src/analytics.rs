use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::report::DecisionReport;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Running counts of what the policy answered across a sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecisionTally {
    pub snapshots: usize,
    pub sudden_death_accepts: usize,
    pub escalations: usize,
    pub plays: usize,
    pub discards: usize,
    pub raises: usize,
    pub accepts: usize,
    pub declines: usize,
    pub total_ms: f64,
}

impl DecisionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &DecisionReport, elapsed_ms: f64) {
        self.snapshots += 1;
        self.total_ms += elapsed_ms;
        if report.accept_sudden_death {
            self.sudden_death_accepts += 1;
        }
        if report.initiate_escalation {
            self.escalations += 1;
        }
        if report.discard {
            self.discards += 1;
        } else {
            self.plays += 1;
        }
        match report.response_code {
            1 => self.raises += 1,
            0 => self.accepts += 1,
            _ => self.declines += 1,
        }
    }

    /// Share of recorded snapshots, as a percentage.
    pub fn rate(&self, count: usize) -> f64 {
        if self.snapshots == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.snapshots as f64
        }
    }

    pub fn average_ms(&self) -> f64 {
        if self.snapshots == 0 {
            0.0
        } else {
            self.total_ms / self.snapshots as f64
        }
    }

    pub fn write_markdown(
        &self,
        run_id: &str,
        bot: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), AnalyticsError> {
        let mut rows = String::new();
        rows.push_str("# Decision Sweep Summary\n\n");
        rows.push_str(&format!(
            "Run `{run_id}`: {} snapshots decided by {bot}, {:.4} ms average for all four decisions\n\n",
            self.snapshots,
            self.average_ms()
        ));
        rows.push_str("| Decision | Count | Rate |\n");
        rows.push_str("|----------|-------|------|\n");
        for (label, count) in [
            ("Accept hand of eleven", self.sudden_death_accepts),
            ("Call truco", self.escalations),
            ("Play to win the round", self.plays),
            ("Discard", self.discards),
            ("Raise back", self.raises),
            ("Accept truco", self.accepts),
            ("Decline truco", self.declines),
        ] {
            rows.push_str(&format!(
                "| {label} | {count} | {rate:.1}% |\n",
                rate = self.rate(count)
            ));
        }

        fs::write(path.as_ref(), rows).map_err(|e| AnalyticsError::Io {
            context: "writing summary markdown",
            source: e,
        })?;
        Ok(())
    }
}
