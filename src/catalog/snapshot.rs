//! スナップショットの読み込み・適用・書き出し
//!
//! スナップショットは全エントリの値のベースラインで、変更検出の
//! 比較基準になります。ファイル形式は `.snapshot` 拡張子の JSON で、
//! エントリ識別子とチャネル別の値のレコード列を持ちます。
//! スナップショットに存在しないエントリは「レコードなし」のまま
//! 残り、空値の `Some` とは区別されます。

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::catalog::host::Catalog;
use crate::types::{
    ChannelValues,
    ResourceKey,
};

/// スナップショットファイルの拡張子
pub const SNAPSHOT_EXTENSION: &str = "snapshot";

/// Defines errors that may occur while reading or writing a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Error when the file path does not carry the `.snapshot` extension
    #[error("snapshot file \"{0}\" does not exist or extension is invalid")]
    InvalidPath(PathBuf),
    /// Error when reading or writing the file fails
    #[error("failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the snapshot content is not valid JSON
    #[error("failed to parse snapshot file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// スナップショット内の 1 エントリ分のレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    /// エントリ識別子
    #[serde(flatten)]
    pub key: ResourceKey,

    /// スナップショット時点のチャネル別の値
    pub values: ChannelValues,
}

/// スナップショットファイルを読み込む
///
/// # Errors
/// - パスが存在しない、または拡張子が `.snapshot` でない
/// - 読み込みまたは JSON パースエラー
pub fn load(path: &Path) -> Result<Vec<SnapshotRecord>, SnapshotError> {
    if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SNAPSHOT_EXTENSION) {
        return Err(SnapshotError::InvalidPath(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "Loading snapshot");

    let content = std::fs::read_to_string(path)?;
    let records: Vec<SnapshotRecord> = serde_json::from_str(&content)?;

    tracing::info!(records = records.len(), "Loaded snapshot");

    Ok(records)
}

/// スナップショットの履歴値をカタログへ適用する
///
/// レコードが見つかったエントリには `Some(values)` が設定される。
/// 見つからなかったエントリは `None` のままで、これが New の
/// シグナルになる。カタログに存在しないレコード（エントリごと
/// 削除されたもの）は無視される。
pub fn apply(catalog: &mut Catalog, records: Vec<SnapshotRecord>) {
    let mut by_key: HashMap<ResourceKey, ChannelValues> =
        records.into_iter().map(|r| (r.key, r.values)).collect();

    let mut applied = 0_usize;
    for entry in catalog.entries_mut() {
        if let Some(values) = by_key.remove(&entry.key) {
            entry.snapshot = Some(values);
            applied += 1;
        }
    }

    if !by_key.is_empty() {
        tracing::debug!(
            orphaned = by_key.len(),
            "Snapshot records without a current catalog entry"
        );
    }
    tracing::debug!(applied, "Applied snapshot values");
}

/// カタログの現在値からスナップショットレコードを作る
#[must_use]
pub fn capture(catalog: &Catalog) -> Vec<SnapshotRecord> {
    catalog
        .entries()
        .iter()
        .map(|entry| SnapshotRecord { key: entry.key.clone(), values: entry.values.clone() })
        .collect()
}

/// スナップショットレコードをファイルへ書き出す
///
/// # Errors
/// - 出力パスの拡張子が `.snapshot` でない
/// - 書き込みまたはシリアライズエラー
pub fn write(records: &[SnapshotRecord], path: &Path) -> Result<(), SnapshotError> {
    if path.extension().and_then(|e| e.to_str()) != Some(SNAPSHOT_EXTENSION) {
        return Err(SnapshotError::InvalidPath(path.to_path_buf()));
    }

    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content)?;

    tracing::info!(path = %path.display(), records = records.len(), "Wrote snapshot");

    Ok(())
}
