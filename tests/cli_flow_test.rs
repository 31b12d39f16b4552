//! フォルダ読み込み → スナップショット → export-diff の一連の流れのテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::indexing_slicing)]

use std::fs;
use std::path::Path;

use googletest::prelude::*;
use resx_snapshot_diff::commands::{
    export_diff,
    snapshot,
};
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn seed_catalog(root: &Path) {
    write_file(root, "app/Strings.json", r#"{"greeting": "Hello", "farewell": "Bye"}"#);
    write_file(root, "app/Strings.de.json", r#"{"greeting": "Hallo", "farewell": "Tschuess"}"#);
    write_file(root, "app/Strings.fr.json", r#"{"greeting": "Bonjour", "farewell": "Au revoir"}"#);
}

fn run_snapshot(folder: &Path, output: &Path) {
    let args = snapshot::SnapshotArgs {
        folder: folder.to_path_buf(),
        output: output.to_path_buf(),
    };
    snapshot::execute(&args).unwrap();
}

fn run_export_diff(folder: &Path, snapshot_file: &Path, output: &Path) {
    let args = export_diff::ExportDiffArgs {
        folder: folder.to_path_buf(),
        snapshot: snapshot_file.to_path_buf(),
        output: output.to_path_buf(),
    };
    export_diff::execute(&args).unwrap();
}

/// スナップショット直後の export-diff は空のレポートになる
#[googletest::test]
fn test_snapshot_then_diff_is_empty() {
    let dir = TempDir::new().unwrap();
    seed_catalog(dir.path());
    let snapshot_file = dir.path().join("baseline.snapshot");
    let report_file = dir.path().join("report.json");

    run_snapshot(dir.path(), &snapshot_file);
    run_export_diff(dir.path(), &snapshot_file, &report_file);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_file).unwrap()).unwrap();
    assert_that!(report.as_array().unwrap(), is_empty());
}

/// 変更後の export-diff は加工済みの行を出力する
#[googletest::test]
fn test_diff_after_changes_reports_processed_rows() {
    let dir = TempDir::new().unwrap();
    seed_catalog(dir.path());
    let snapshot_file = dir.path().join("baseline.snapshot");
    let report_file = dir.path().join("report.json");

    run_snapshot(dir.path(), &snapshot_file);

    // greeting: Neutral と German を同時に変更（French はそのまま）
    // welcome: 新規キー（Neutral のみ）
    write_file(
        dir.path(),
        "app/Strings.json",
        r#"{"greeting": "Hello!", "farewell": "Bye", "welcome": "Welcome"}"#,
    );
    write_file(
        dir.path(),
        "app/Strings.de.json",
        r#"{"greeting": "Hallo!", "farewell": "Tschuess"}"#,
    );

    run_export_diff(dir.path(), &snapshot_file, &report_file);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_file).unwrap()).unwrap();
    let rows = report.as_array().unwrap();

    // farewell は未変更なので行にならない
    assert_that!(rows, len(eq(2)));

    let greeting = rows
        .iter()
        .find(|r| r.get("key").and_then(|v| v.as_str()) == Some("greeting"))
        .unwrap();
    // 同時変更により French の reported 値は空になる
    expect_that!(
        greeting.get("neutralValue").and_then(|v| v.as_str()),
        some(eq("Hello!"))
    );
    expect_that!(greeting.get("frenchValue").and_then(|v| v.as_str()), some(eq("")));

    let welcome = rows
        .iter()
        .find(|r| r.get("key").and_then(|v| v.as_str()) == Some("welcome"))
        .unwrap();
    expect_that!(welcome.get("neutralValue").and_then(|v| v.as_str()), some(eq("Welcome")));
    expect_that!(welcome.get("germanValue").and_then(|v| v.as_str()), some(eq("")));
}

/// CSV 出力はヘッダー行 + データ行になる
#[googletest::test]
fn test_csv_report_has_header_and_rows() {
    let dir = TempDir::new().unwrap();
    seed_catalog(dir.path());
    let snapshot_file = dir.path().join("baseline.snapshot");
    let report_file = dir.path().join("report.csv");

    run_snapshot(dir.path(), &snapshot_file);
    write_file(
        dir.path(),
        "app/Strings.fr.json",
        r#"{"greeting": "Bonjour", "farewell": ""}"#,
    );
    // farewell の Neutral を変更し、French 訳を落とす → 素通りで残る
    write_file(
        dir.path(),
        "app/Strings.json",
        r#"{"greeting": "Hello", "farewell": "Goodbye"}"#,
    );

    run_export_diff(dir.path(), &snapshot_file, &report_file);

    let content = fs::read_to_string(&report_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_that!(lines.len(), ge(2));
    expect_that!(*lines.first().unwrap(), starts_with("ProjectName,ResourceFileName,Key"));
    expect_that!(content, contains_substring("farewell"));
}

/// 拡張子が `.snapshot` でないスナップショットは拒否される
#[googletest::test]
fn test_export_diff_rejects_invalid_snapshot_extension() {
    let dir = TempDir::new().unwrap();
    seed_catalog(dir.path());
    let bogus = dir.path().join("baseline.json");
    fs::write(&bogus, "[]").unwrap();

    let args = export_diff::ExportDiffArgs {
        folder: dir.path().to_path_buf(),
        snapshot: bogus,
        output: dir.path().join("report.json"),
    };

    let result = export_diff::execute(&args);

    assert_that!(result.is_err(), eq(true));
}
