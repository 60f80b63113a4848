use std::fs;

use tempfile::tempdir;
use truco_bench::config::SweepConfig;
use truco_bench::sweep::SweepRunner;
use truco_core::game::serialization::IntelSnapshot;

fn load_config(output_dir: &std::path::Path, seed: u64) -> SweepConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
deals:
  seed: {seed}
  hands: 40
outputs:
  jsonl: "{jsonl}"
  summary_md: "{summary}"
logging:
  enable_structured: false
"#,
        jsonl = output_dir.join("decisions.jsonl").display(),
        summary = output_dir.join("summary.md").display(),
    );

    let mut cfg: SweepConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

fn normalized_rows(path: &std::path::Path) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .expect("jsonl readable")
        .lines()
        .map(|line| {
            let mut value: serde_json::Value = serde_json::from_str(line).expect("row is JSON");
            if let Some(obj) = value.as_object_mut() {
                obj.remove("elapsed_ms");
            }
            value
        })
        .collect()
}

#[test]
fn sweep_writes_one_row_per_snapshot() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path(), 4242);
    let outputs = config.resolved_outputs();

    let summary = SweepRunner::new(config, outputs).run().expect("sweep completes");
    assert_eq!(summary.snapshots, 40);
    assert_eq!(summary.rows_written, 40);
    assert_eq!(summary.tally.snapshots, 40);
    assert_eq!(summary.tally.plays + summary.tally.discards, 40);
    assert_eq!(
        summary.tally.raises + summary.tally.accepts + summary.tally.declines,
        40
    );

    let rows = normalized_rows(&summary.jsonl_path);
    assert_eq!(rows.len(), 40);
    for row in &rows {
        assert_eq!(row["run_id"], "test_smoke");
        assert_eq!(row["decisions"]["bot"], "Truco Machine");
        let snapshot: IntelSnapshot =
            serde_json::from_value(row["snapshot"].clone()).expect("snapshot decodes");
        let intel = snapshot.restore().expect("snapshot restores");
        let card = row["decisions"]["card"].as_str().expect("card text");
        assert!(intel.hand().iter().any(|c| c.to_string() == card));
    }

    let markdown = fs::read_to_string(&summary.summary_path).expect("summary readable");
    assert!(markdown.contains("# Decision Sweep Summary"));
    assert!(markdown.contains("test_smoke"));
}

#[test]
fn sweep_is_reproducible_for_a_seed() {
    let first_dir = tempdir().expect("temp dir");
    let second_dir = tempdir().expect("temp dir");

    let first = load_config(first_dir.path(), 77);
    let first_outputs = first.resolved_outputs();
    let first = SweepRunner::new(first, first_outputs).run().expect("first run");

    let second = load_config(second_dir.path(), 77);
    let second_outputs = second.resolved_outputs();
    let second = SweepRunner::new(second, second_outputs)
        .run()
        .expect("second run");

    assert_eq!(
        normalized_rows(&first.jsonl_path),
        normalized_rows(&second.jsonl_path)
    );
}
