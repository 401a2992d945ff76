//! Handler-level CLI tests over temp-file-backed JSON tables.

use bom_merge::cli::{exit_codes, run_compare, run_flatten, run_rename, run_search, run_tree};
use bom_merge::config::AppConfig;
use bom_merge::reports::ReportFormat;
use bom_merge::table::{FlatRow, FlatTable};
use bom_merge::tabular::{read_table, write_table};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_sample(dir: &TempDir, name: &str, extra_rows: &[FlatRow]) -> PathBuf {
    let mut rows = vec![
        FlatRow::plain(1, "ROOT-A", "4", "ASSY1-A", "upper assy", "1", "EA"),
        FlatRow::plain(2, "ASSY1-A", "1", "161-00345A", "bracket", "2", "EA"),
    ];
    rows.extend_from_slice(extra_rows);
    let path = dir.path().join(name);
    write_table(&path, &FlatTable::new(rows)).unwrap();
    path
}

#[test]
fn tree_command_succeeds_on_a_valid_table() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "bom.json", &[]);
    assert_eq!(run_tree(&input).unwrap(), exit_codes::SUCCESS);
}

#[test]
fn flatten_writes_a_normalized_table() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "bom.json", &[]);
    let output = dir.path().join("normalized.json");

    let code = run_flatten(&input, Some(&output), ReportFormat::Table).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let normalized = read_table(&output).unwrap();
    assert_eq!(normalized, read_table(&input).unwrap());
}

#[test]
fn rename_rewrites_the_table_with_propagation() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "bom.json", &[]);
    let output = dir.path().join("renamed.json");

    let code = run_rename(
        &input,
        "161-00345A",
        "161-00345B",
        Some(&output),
        ReportFormat::Table,
    )
    .unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let table = read_table(&output).unwrap();
    assert_eq!(table.rows[0].itm.text, "ASSY1-B");
    assert_eq!(table.rows[0].parent, "ROOT-B");
    assert_eq!(table.rows[1].itm.text, "161-00345B");
}

#[test]
fn rename_with_no_match_passes_the_table_through() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "bom.json", &[]);
    let output = dir.path().join("renamed.json");

    let code = run_rename(&input, "NOPE", "NEW", Some(&output), ReportFormat::Table).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(read_table(&output).unwrap(), read_table(&input).unwrap());
}

#[test]
fn search_exit_code_reflects_matches() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir, "bom.json", &[]);

    assert_eq!(run_search(&input, "bracket").unwrap(), exit_codes::SUCCESS);
    assert_eq!(
        run_search(&input, "no-such-part").unwrap(),
        exit_codes::DIFFERENCES
    );
}

#[test]
fn compare_exit_code_reflects_differences() {
    let dir = TempDir::new().unwrap();
    let old = write_sample(&dir, "old.json", &[]);
    let grown = write_sample(
        &dir,
        "new.json",
        &[FlatRow::plain(2, "ASSY1-A", "1", "161-00346A", "bolt", "8", "EA")],
    );
    let config = AppConfig::default();

    assert_eq!(
        run_compare(&old, &old, &config).unwrap(),
        exit_codes::SUCCESS
    );
    assert_eq!(
        run_compare(&old, &grown, &config).unwrap(),
        exit_codes::DIFFERENCES
    );
}

#[test]
fn compare_writes_json_report_to_file() {
    let dir = TempDir::new().unwrap();
    let old = write_sample(&dir, "old.json", &[]);
    let grown = write_sample(
        &dir,
        "new.json",
        &[FlatRow::plain(2, "ASSY1-A", "1", "161-00346A", "bolt", "8", "EA")],
    );

    let mut config = AppConfig::default();
    config.output.format = ReportFormat::Json;
    config.output.file = Some(dir.path().join("report.json"));
    run_compare(&old, &grown, &config).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["missing_from_old"][0], 2);
    assert_eq!(report["summary"]["inserted"], 1);
}

#[test]
fn compare_rejects_identical_slot_names() {
    let dir = TempDir::new().unwrap();
    let old = write_sample(&dir, "old.json", &[]);

    let mut config = AppConfig::default();
    config.slots.new = config.slots.old.clone();
    assert!(run_compare(&old, &old, &config).is_err());
}

#[test]
fn missing_input_file_is_an_error() {
    assert!(run_tree(std::path::Path::new("/nonexistent/bom.json")).is_err());
}
