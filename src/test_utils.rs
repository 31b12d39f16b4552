//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::catalog::ResourceEntry;
use crate::types::{
    ChannelValues,
    ResourceKey,
};

/// テスト用の `ResourceEntry` を作成する（コンテナは "app/Strings" 固定）
pub(crate) fn entry(
    key: &str,
    values: ChannelValues,
    snapshot: Option<ChannelValues>,
    is_invariant: bool,
) -> ResourceEntry {
    entry_in("app", "Strings", key, values, snapshot, is_invariant)
}

/// テスト用の `ResourceEntry` をコンテナ指定付きで作成する
pub(crate) fn entry_in(
    project: &str,
    file: &str,
    key: &str,
    values: ChannelValues,
    snapshot: Option<ChannelValues>,
    is_invariant: bool,
) -> ResourceEntry {
    let mut entry = ResourceEntry::new(ResourceKey::new(project, file, key), values);
    entry.snapshot = snapshot;
    entry.is_invariant = is_invariant;
    entry
}
