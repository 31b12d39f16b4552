//! export-diff コマンド
//!
//! リソースフォルダとスナップショットを読み込み、分類 + 抑制の
//! パイプラインを実行して、生き残った変更をレポートファイルへ
//! 書き出します。

use std::path::PathBuf;

use clap::Args;

use super::CommandError;
use crate::catalog::{
    Catalog,
    snapshot,
};
use crate::config;
use crate::diff::run_diff;
use crate::export::{
    ExportRow,
    exporter_for,
};

#[derive(Debug, Args)]
pub struct ExportDiffArgs {
    /// Folder containing the resource files
    #[arg(long)]
    pub folder: PathBuf,

    /// Snapshot file (.snapshot) to compare against
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Report output file (.csv or .json)
    #[arg(long)]
    pub output: PathBuf,
}

/// コマンド本体
///
/// # Errors
/// - 設定・カタログ・スナップショットの読み込みエラー
/// - レポートの書き出しエラー
pub fn execute(args: &ExportDiffArgs) -> Result<(), CommandError> {
    let settings = config::load_settings(&args.folder)?;

    tracing::info!(folder = %args.folder.display(), "Loading resource folder into the catalog");
    let mut catalog = Catalog::load(&args.folder, &settings)?;

    tracing::info!(snapshot = %args.snapshot.display(), "Loading snapshot into the catalog");
    let records = snapshot::load(&args.snapshot)?;
    snapshot::apply(&mut catalog, records);

    let report = run_diff(catalog.entries(), settings.uniform_values_are_invariant);

    let rows: Vec<ExportRow> = report.records.iter().map(ExportRow::from_record).collect();
    exporter_for(&args.output)?.export(&rows)?;

    tracing::info!(
        rows = rows.len(),
        warnings = report.warnings.len(),
        output = %args.output.display(),
        "Exported snapshot diff"
    );

    Ok(())
}
