//! 変更分類と抑制のパイプライン

mod classifier;
mod flags;
mod record;
mod suppression;

pub use classifier::{
    Classification,
    classify_entries,
};
pub use flags::{
    ChangeFlags,
    ChannelChange,
};
pub use record::{
    DiffRecord,
    InvariantSet,
};
pub use suppression::{
    SuppressionOutcome,
    suppress,
};

use crate::catalog::ResourceEntry;
use crate::types::ResourceKey;

/// パイプライン全体の結果
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    /// エクスポート対象のレコード。コンテナ識別子 + キーで整列済み、
    /// 同一エントリのレコードは除去済み
    pub records: Vec<DiffRecord>,

    /// German 訳欠落の警告（ルール 6）
    pub warnings: Vec<ResourceKey>,
}

/// カタログ全体を分類し、抑制ルールを適用する
///
/// 2 フェーズのバリアがある: エントリは他のエントリが登録した
/// invariant 値を参照し得るため、invariant セットの構築（フェーズ 1）
/// が全エントリ分完了してからでないと抑制（フェーズ 2）は実行
/// できない。
#[must_use]
pub fn run_diff(entries: &[ResourceEntry], uniform_values_are_invariant: bool) -> DiffReport {
    // フェーズ 1: 分類 + invariant セット構築
    let classification = classify_entries(entries, uniform_values_are_invariant);

    // フェーズ 2: 抑制
    let outcome = suppress(classification.records, &classification.invariants);

    // 出力順を決定的にし、同一エントリを指すレコードを除去する
    let mut records = outcome.records;
    records.sort_by(|a, b| a.key.cmp(&b.key));
    records.dedup();

    DiffReport { records, warnings: outcome.warnings }
}
