//! 分類結果のレコードと invariant 文字列セット

use std::collections::HashSet;
use std::hash::{
    Hash,
    Hasher,
};

use crate::catalog::ResourceEntry;
use crate::diff::flags::ChangeFlags;
use crate::types::{
    ChannelValues,
    ResourceKey,
};

/// 1 エントリ分の分類結果。
///
/// `reported` は初期状態では `current` と同一で、抑制ルール（ルール 4）
/// のみが書き換える。`current` はルール評価中も不変のまま保持される。
#[derive(Debug, Clone)]
pub struct DiffRecord {
    /// 対象エントリの識別子
    pub key: ResourceKey,

    /// 分類で得られた変更フラグ（抑制ルールは書き換えない）
    pub flags: ChangeFlags,

    /// エントリの現在値のコピー（不変）
    pub current: ChannelValues,

    /// レポートに出力する値（抑制ルールが書き換え得る）
    pub reported: ChannelValues,

    /// チャネル別コメント（レポートへそのまま引き渡す）
    pub comments: ChannelValues,
}

impl DiffRecord {
    /// エントリと変更フラグからレコードを作成する
    #[must_use]
    pub fn from_entry(entry: &ResourceEntry, flags: ChangeFlags) -> Self {
        Self {
            key: entry.key.clone(),
            flags,
            current: entry.values.clone(),
            reported: entry.values.clone(),
            comments: entry.comments.clone(),
        }
    }
}

/// Records compare equal when they refer to the same entry. Used for
/// deduplication of the surviving list.
impl PartialEq for DiffRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for DiffRecord {}

impl Hash for DiffRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// invariant とマークされたエントリの Neutral 値を蓄積するセット。
///
/// 分類フェーズで 1 回だけ構築され、抑制フェーズでは「自分自身は
/// invariant でなくても、既知の invariant と同じ Neutral 値を持つ
/// エントリ」を検出するために参照される。
#[derive(Debug, Clone, Default)]
pub struct InvariantSet {
    values: HashSet<String>,
}

impl InvariantSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Neutral 値を登録する
    pub fn insert(&mut self, value: impl Into<String>) {
        let _ = self.values.insert(value.into());
    }

    /// 登録済みの値かどうか
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
