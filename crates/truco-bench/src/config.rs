use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;
use truco_bot::BotParams;
use truco_core::model::intel::MATCH_POINT;

const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root sweep configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SweepConfig {
    pub run_id: String,
    pub deals: DealConfig,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub params: ParamsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SweepConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SweepConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        self.deals.validate()?;
        self.outputs.validate(&self.run_id)?;
        self.params.validate()?;
        self.logging.normalize();
        Ok(())
    }

    /// Resolve output templates (e.g., `{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

/// Snapshot sampling block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DealConfig {
    pub seed: Option<u64>,
    pub hands: usize,
}

impl DealConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.hands == 0 {
            return Err(ValidationError::InvalidField {
                field: "deals.hands".to_string(),
                message: "number of hands must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
    pub summary_md: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        for (label, value) in [
            ("outputs.jsonl", &self.jsonl),
            ("outputs.summary_md", &self.summary_md),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "resolved path is invalid".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Optional threshold overrides layered over the environment-derived params.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ParamsConfig {
    #[serde(default)]
    pub eleven_manilha_ceiling: Option<u8>,
    #[serde(default)]
    pub eleven_strong_floor: Option<u8>,
    #[serde(default)]
    pub raise_lead_margin: Option<u8>,
}

impl ParamsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        for (label, value) in [
            ("params.eleven_manilha_ceiling", self.eleven_manilha_ceiling),
            ("params.eleven_strong_floor", self.eleven_strong_floor),
            ("params.raise_lead_margin", self.raise_lead_margin),
        ] {
            if value.is_some_and(|score| score > MATCH_POINT) {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: format!("score threshold must be between 0 and {MATCH_POINT}"),
                });
            }
        }
        Ok(())
    }

    pub fn apply(&self, base: BotParams) -> BotParams {
        BotParams {
            eleven_manilha_ceiling: self
                .eleven_manilha_ceiling
                .unwrap_or(base.eleven_manilha_ceiling),
            eleven_strong_floor: self.eleven_strong_floor.unwrap_or(base.eleven_strong_floor),
            raise_lead_margin: self.raise_lead_margin.unwrap_or(base.raise_lead_margin),
        }
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        parse_level(&self.tracing_level)
    }
}

pub fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub jsonl: PathBuf,
    pub summary_md: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_YAML: &str = r#"
run_id: "sweep_smoke"
deals:
  seed: 123
  hands: 64
outputs:
  jsonl: "bench/out/{run_id}/decisions.jsonl"
  summary_md: "bench/out/{run_id}/summary.md"
params:
  raise_lead_margin: 4
logging:
  enable_structured: true
  tracing_level: "debug"
"#;

    #[test]
    fn loads_and_validates_basic_config() {
        let mut cfg: SweepConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");

        assert_eq!(cfg.deals.hands, 64);
        assert!(cfg.logging.enable_structured);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));

        let outputs = cfg.resolved_outputs();
        assert_eq!(
            outputs.jsonl,
            PathBuf::from("bench/out/sweep_smoke/decisions.jsonl")
        );
    }

    #[test]
    fn params_overlay_only_named_fields() {
        let mut cfg: SweepConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");
        let params = cfg.params.apply(BotParams::default());
        assert_eq!(params.raise_lead_margin, 4);
        assert_eq!(
            params.eleven_manilha_ceiling,
            BotParams::default().eleven_manilha_ceiling
        );
    }

    #[test]
    fn sections_default_when_omitted() {
        let yaml = BASIC_YAML
            .replace("params:\n  raise_lead_margin: 4\n", "")
            .replace(
                "logging:\n  enable_structured: true\n  tracing_level: \"debug\"\n",
                "",
            );
        let mut cfg: SweepConfig = serde_yaml::from_str(&yaml).expect("parse");
        cfg.validate().expect("valid");
        assert_eq!(cfg.params, ParamsConfig::default());
        assert!(!cfg.logging.enable_structured);
        assert_eq!(cfg.logging.level(), Some(Level::INFO));
    }

    #[test]
    fn rejects_zero_hands() {
        let yaml = BASIC_YAML.replace("hands: 64", "hands: 0");
        let mut cfg: SweepConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("zero hands should fail");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "deals.hands"
        ));
    }

    #[test]
    fn rejects_threshold_above_match_point() {
        let yaml = BASIC_YAML.replace("raise_lead_margin: 4", "raise_lead_margin: 12");
        let mut cfg: SweepConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("threshold too high");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "params.raise_lead_margin"
        ));
    }

    #[test]
    fn rejects_invalid_run_id() {
        let yaml = BASIC_YAML.replace("sweep_smoke", "sweep smoke");
        let mut cfg: SweepConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("invalid run id");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "run_id"
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SweepConfig::from_path("does/not/exist.yaml").expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.path(), Path::new("does/not/exist.yaml"));
    }
}
