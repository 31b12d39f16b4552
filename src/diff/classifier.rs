//! エントリ単位の変更分類モジュール
//!
//! カタログの各エントリについて、現在値とスナップショット値を
//! チャネルごとに比較し、変更フラグを算出します。invariant エントリは
//! レポート対象から外れる代わりに、Neutral 値が invariant セットへ
//! 登録され、抑制フェーズの照合に使われます。

use crate::catalog::ResourceEntry;
use crate::diff::flags::{
    ChangeFlags,
    ChannelChange,
};
use crate::diff::record::{
    DiffRecord,
    InvariantSet,
};
use crate::types::Channel;

/// 分類フェーズの結果
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// 変更が検出されたエントリのレコード（未変更エントリは含まない）
    pub records: Vec<DiffRecord>,

    /// invariant エントリの Neutral 値を集めたセット
    pub invariants: InvariantSet,
}

/// カタログ全体を分類する
///
/// 全エントリを 1 パスで処理し、レコードの生成と invariant セットの
/// 構築を同時に行います。抑制フェーズはセットが完成してからでないと
/// 実行できないため、呼び出し側は必ずこの関数の完了を待ってから
/// 抑制に進みます。
///
/// # Arguments
/// * `entries` - カタログの全エントリ
/// * `uniform_values_are_invariant` - 3 チャネルの現在値がすべて同一の
///   エントリを、明示マーカーなしでも invariant として扱う（設定で
///   明示的に有効化した場合のみ）
#[must_use]
pub fn classify_entries(
    entries: &[ResourceEntry],
    uniform_values_are_invariant: bool,
) -> Classification {
    let mut records = Vec::new();
    let mut invariants = InvariantSet::new();

    for entry in entries {
        // invariant エントリはレポート対象外。Neutral 値だけ登録する
        if entry.is_invariant || (uniform_values_are_invariant && entry.values.is_uniform()) {
            tracing::debug!(entry = %entry.key, value = %entry.values.neutral, "Registered invariant value");
            invariants.insert(entry.values.neutral.clone());
            continue;
        }

        if let Some(record) = classify_entry(entry) {
            // 監査用に、生成したレコードをフラグ名付きでログへ残す
            tracing::info!(entry = %record.key, flags = %record.flags, "Classified change");
            records.push(record);
        }
    }

    tracing::debug!(
        records = records.len(),
        invariants = invariants.len(),
        "Classification completed"
    );

    Classification { records, invariants }
}

/// 1 エントリを分類する
///
/// 変更が検出されなかった場合は `None` を返します。
fn classify_entry(entry: &ResourceEntry) -> Option<DiffRecord> {
    // スナップショットにレコードが存在しない（値が空なのとは別）場合は
    // New として全チャネルの現在値を取り込む。チャネル比較は行わない
    let Some(snapshot) = &entry.snapshot else {
        return Some(DiffRecord::from_entry(entry, ChangeFlags::new_entry()));
    };

    // チャネルごとに独立して比較
    let mut flags = ChangeFlags::none();
    for channel in Channel::ALL {
        let change = ChannelChange::compare(entry.values.get(channel), snapshot.get(channel));
        flags.set(channel, change);
    }

    let flags = promote_to_new(flags);

    // 未変更エントリはレコードを生成しない
    if flags.is_none() {
        return None;
    }

    Some(DiffRecord::from_entry(entry, flags))
}

/// 昇格ルール: (NeutralAdded かつ FrenchAdded) または GermanAdded の場合、
/// レコード全体を New に畳み込む。
///
/// 同一実行内で「各チャネルに一斉追加された」組み合わせは、運用上
/// 新規エントリと等価として扱われる。条件は 3 チャネルの AND ではなく、
/// German 単独の Added でも成立する非対称な OR である点に注意。
const fn promote_to_new(flags: ChangeFlags) -> ChangeFlags {
    let neutral_added = matches!(flags.neutral, Some(ChannelChange::Added));
    let german_added = matches!(flags.german, Some(ChannelChange::Added));
    let french_added = matches!(flags.french, Some(ChannelChange::Added));

    if (neutral_added && french_added) || german_added {
        ChangeFlags::new_entry()
    } else {
        flags
    }
}
