//! snapshot コマンド
//!
//! カタログの現在値をベースラインとして `.snapshot` ファイルへ
//! 書き出します。次回以降の export-diff の比較基準になります。

use std::path::PathBuf;

use clap::Args;

use super::CommandError;
use crate::catalog::{
    Catalog,
    snapshot,
};
use crate::config;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Folder containing the resource files
    #[arg(long)]
    pub folder: PathBuf,

    /// Snapshot output file (.snapshot)
    #[arg(long)]
    pub output: PathBuf,
}

/// コマンド本体
///
/// # Errors
/// - 設定・カタログの読み込みエラー
/// - スナップショットの書き出しエラー
pub fn execute(args: &SnapshotArgs) -> Result<(), CommandError> {
    let settings = config::load_settings(&args.folder)?;

    tracing::info!(folder = %args.folder.display(), "Loading resource folder into the catalog");
    let catalog = Catalog::load(&args.folder, &settings)?;

    let records = snapshot::capture(&catalog);
    snapshot::write(&records, &args.output)?;

    Ok(())
}
