//! 抑制ルールエンジン
//!
//! 分類済みレコードに対して固定順のルールチェーンを適用し、翻訳
//! ワークフロー上ノイズとなる変更を除外・加工します。ルールは
//! レコードごとに先頭から評価され、最初に成立したルールだけが
//! 適用されます（以降のルールはスキップ）。順序は交換可能では
//! ないため、チェーンの並びを変えてはいけません。

use crate::diff::flags::ChannelChange;
use crate::diff::record::{
    DiffRecord,
    InvariantSet,
};
use crate::types::{
    Channel,
    ResourceKey,
};

/// 抑制フェーズの結果
#[derive(Debug, Clone, Default)]
pub struct SuppressionOutcome {
    /// 生き残ったレコード（reported 値はルール 4 により書き換え済みの場合あり）
    pub records: Vec<DiffRecord>,

    /// German 訳が欠けているレコードの識別子（警告のみ、除外はしない）
    pub warnings: Vec<ResourceKey>,
}

/// 1 ルールの判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// レコードを除外する
    Drop(&'static str),
    /// レコードをそのまま残し、以降のルールを打ち切る
    Keep,
    /// reported の French 値を空にして残す
    ClearFrench,
    /// 警告付きで残す（German 訳欠落）
    WarnMissingGerman,
}

/// ルール関数。成立しなかった場合は `None` を返す。
///
/// ルール自身はレコードを書き換えない純関数で、加工（French 値の
/// クリア）はエンジン側が判定結果に従って行う。フラグはどのルールも
/// 書き換えない。
type Rule = fn(&DiffRecord, &InvariantSet) -> Option<Verdict>;

/// ルールチェーン。評価順に並んでいる。
const RULES: [(&str, Rule); 7] = [
    ("neutral-matches-invariant", rule_neutral_matches_invariant),
    ("neutral-deleted", rule_neutral_deleted),
    ("missing-french-pass-through", rule_missing_french_pass_through),
    ("co-change-clears-french", rule_co_change_clears_french),
    ("secondary-only-change", rule_secondary_only_change),
    ("german-translation-missing", rule_german_translation_missing),
    ("new-entry-pre-translated", rule_new_entry_pre_translated),
];

/// 分類済みレコードへルールチェーンを適用する
#[must_use]
pub fn suppress(records: Vec<DiffRecord>, invariants: &InvariantSet) -> SuppressionOutcome {
    let mut outcome = SuppressionOutcome::default();

    for mut record in records {
        match evaluate(&record, invariants) {
            Some((rule, Verdict::Drop(reason))) => {
                tracing::info!(rule, entry = %record.key, reason, "Suppressed change");
            }
            Some((rule, Verdict::Keep)) => {
                tracing::debug!(rule, entry = %record.key, "Kept change as-is");
                outcome.records.push(record);
            }
            Some((rule, Verdict::ClearFrench)) => {
                tracing::info!(
                    rule,
                    entry = %record.key,
                    reason = "neutral and German moved together, French did not",
                    "Cleared reported French value"
                );
                record.reported.french.clear();
                outcome.records.push(record);
            }
            Some((rule, Verdict::WarnMissingGerman)) => {
                tracing::warn!(rule, entry = %record.key, "German translation missing");
                outcome.warnings.push(record.key.clone());
                outcome.records.push(record);
            }
            None => outcome.records.push(record),
        }
    }

    outcome
}

/// 先頭から評価し、最初に成立したルールの判定を返す
fn evaluate(record: &DiffRecord, invariants: &InvariantSet) -> Option<(&'static str, Verdict)> {
    RULES.iter().find_map(|(name, rule)| rule(record, invariants).map(|verdict| (*name, verdict)))
}

/// ルール 1: Neutral の現在値が既知の invariant 値と一致するレコードは
/// 除外する。エントリ自身が invariant マーク済みかどうかは問わない
fn rule_neutral_matches_invariant(
    record: &DiffRecord,
    invariants: &InvariantSet,
) -> Option<Verdict> {
    invariants
        .contains(&record.current.neutral)
        .then_some(Verdict::Drop("neutral value matches a known invariant"))
}

/// ルール 2: Neutral が Deleted のレコードは他チャネルの状態に関わらず除外する
fn rule_neutral_deleted(record: &DiffRecord, _invariants: &InvariantSet) -> Option<Verdict> {
    record
        .flags
        .has(Channel::Neutral, ChannelChange::Deleted)
        .then_some(Verdict::Drop("neutral value was deleted"))
}

/// ルール 3: Neutral 値があり French 訳がまだ無いレコードは常にレポート
/// 対象。以降のルールによる加工・除外を受けずにそのまま残す
fn rule_missing_french_pass_through(
    record: &DiffRecord,
    _invariants: &InvariantSet,
) -> Option<Verdict> {
    (!record.current.neutral.is_empty() && record.current.french.is_empty())
        .then_some(Verdict::Keep)
}

/// ルール 4: Neutral と German が同時に動いたのに French が Changed で
/// ないレコードは、古い French 値をレポートに載せない（reported のみ
/// クリアし、現在値とフラグは保持する）
fn rule_co_change_clears_french(record: &DiffRecord, _invariants: &InvariantSet) -> Option<Verdict> {
    let neutral_moved = matches!(
        record.flags.neutral,
        Some(ChannelChange::Added | ChannelChange::Changed)
    );
    let german_moved = matches!(
        record.flags.german,
        Some(ChannelChange::Added | ChannelChange::Changed)
    );
    let french_changed = matches!(record.flags.french, Some(ChannelChange::Changed));

    (neutral_moved && german_moved && !french_changed).then_some(Verdict::ClearFrench)
}

/// ルール 5: Neutral が動いていないのに二次チャネルだけが動いた
/// レコードはノイズとして除外する
fn rule_secondary_only_change(record: &DiffRecord, _invariants: &InvariantSet) -> Option<Verdict> {
    let neutral_moved = matches!(
        record.flags.neutral,
        Some(ChannelChange::Added | ChannelChange::Changed)
    );
    let secondary_moved = matches!(
        record.flags.german,
        Some(ChannelChange::Added | ChannelChange::Changed)
    ) || matches!(
        record.flags.french,
        Some(ChannelChange::Added | ChannelChange::Changed)
    );

    (!neutral_moved && secondary_moved)
        .then_some(Verdict::Drop("only secondary channels moved"))
}

/// ルール 6: reported の German 値が空のレコードは警告付きで残す
fn rule_german_translation_missing(
    record: &DiffRecord,
    _invariants: &InvariantSet,
) -> Option<Verdict> {
    record.reported.german.is_empty().then_some(Verdict::WarnMissingGerman)
}

/// ルール 7: New なのに French の現在値を既に持つレコードは除外する。
/// 新規エントリが翻訳済みで届くことはないはずである
fn rule_new_entry_pre_translated(
    record: &DiffRecord,
    _invariants: &InvariantSet,
) -> Option<Verdict> {
    (record.flags.is_new && !record.current.french.is_empty())
        .then_some(Verdict::Drop("new entry already carries a French value"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::catalog::ResourceEntry;
    use crate::diff::flags::ChangeFlags;
    use crate::types::ChannelValues;

    fn record(current: ChannelValues, flags: ChangeFlags) -> DiffRecord {
        let entry =
            ResourceEntry::new(ResourceKey::new("app", "Strings", "greeting"), current);
        DiffRecord::from_entry(&entry, flags)
    }

    fn changed_flags(
        neutral: Option<ChannelChange>,
        german: Option<ChannelChange>,
        french: Option<ChannelChange>,
    ) -> ChangeFlags {
        ChangeFlags { neutral, german, french, is_new: false }
    }

    /// ルール 1: invariant 値と一致する Neutral 値を持つレコードは、
    /// フラグに関係なく除外される
    #[rstest]
    fn test_rule1_invariant_value_drops_record() {
        let mut invariants = InvariantSet::new();
        invariants.insert("Acme");

        let rec = record(
            ChannelValues::new("Acme", "Acme GmbH", "Acme SA"),
            changed_flags(Some(ChannelChange::Changed), Some(ChannelChange::Changed), None),
        );

        let outcome = suppress(vec![rec], &invariants);

        assert_that!(outcome.records, is_empty());
    }

    /// ルール 2: NeutralDeleted は除外される
    #[rstest]
    fn test_rule2_neutral_deleted_drops_record() {
        let rec = record(
            ChannelValues::new("", "Hallo", "Bonjour"),
            changed_flags(Some(ChannelChange::Deleted), None, None),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, is_empty());
    }

    /// ルール 3: French 訳が無いレコードは後続ルールを受けずに残る。
    /// German だけが動いたレコードでもルール 5 では落ちない
    #[rstest]
    fn test_rule3_pass_through_precedes_secondary_only_drop() {
        let rec = record(
            ChannelValues::new("Submit", "Senden", ""),
            changed_flags(None, Some(ChannelChange::Changed), None),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, len(eq(1)));
        let kept = outcome.records.first().unwrap();
        assert_that!(kept.reported.german, eq("Senden"));
        assert_that!(outcome.warnings, is_empty());
    }

    /// ルール 4: Neutral と German の同時変更で French が Changed でない
    /// 場合、reported の French 値だけが空になる
    #[rstest]
    fn test_rule4_co_change_clears_reported_french() {
        let rec = record(
            ChannelValues::new("Hello", "Servus", "Bonjour"),
            changed_flags(
                Some(ChannelChange::Changed),
                Some(ChannelChange::Changed),
                None,
            ),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, len(eq(1)));
        let kept = outcome.records.first().unwrap();
        assert_that!(kept.reported.french, eq(""));
        // 現在値とフラグは保持される
        assert_that!(kept.current.french, eq("Bonjour"));
        assert_that!(kept.flags.get(Channel::French), none());
    }

    /// ルール 4: French も Changed の場合は成立しない
    #[rstest]
    fn test_rule4_does_not_fire_when_french_changed() {
        let rec = record(
            ChannelValues::new("Hello", "Servus", "Salut"),
            changed_flags(
                Some(ChannelChange::Changed),
                Some(ChannelChange::Changed),
                Some(ChannelChange::Changed),
            ),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        let kept = outcome.records.first().unwrap();
        assert_that!(kept.reported.french, eq("Salut"));
    }

    /// ルール 5: 二次チャネルだけが動いたレコードは除外される
    #[rstest]
    fn test_rule5_secondary_only_change_drops_record() {
        let rec = record(
            ChannelValues::new("Hello", "Servus", "Bonjour"),
            changed_flags(None, Some(ChannelChange::Changed), None),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, is_empty());
    }

    /// ルール 6: German 訳が空のレコードは警告付きで残る
    #[rstest]
    fn test_rule6_missing_german_warns_but_keeps() {
        let rec = record(
            ChannelValues::new("Hello", "", "Bonjour"),
            changed_flags(Some(ChannelChange::Changed), None, None),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, len(eq(1)));
        assert_that!(outcome.warnings, len(eq(1)));
        let warned = outcome.warnings.first().unwrap();
        assert_that!(warned.key, eq("greeting"));
    }

    /// ルール 7: New かつ French の現在値が非空のレコードは除外される
    #[rstest]
    fn test_rule7_new_with_french_value_drops_record() {
        let rec = record(
            ChannelValues::new("Hello", "Hallo", "Bonjour"),
            ChangeFlags::new_entry(),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, is_empty());
    }

    /// New でも French が空ならルール 3 で素通りして残る
    #[rstest]
    fn test_new_without_french_survives() {
        let rec = record(ChannelValues::new("Hello", "Hallo", ""), ChangeFlags::new_entry());

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, len(eq(1)));
    }

    /// どのルールにも該当しないレコードはそのまま残る
    #[rstest]
    fn test_unmatched_record_survives_untouched() {
        // Neutral/German/French すべて Changed: ルール 4 は French Changed で
        // 不成立、ルール 5 は Neutral が動いているため不成立
        let rec = record(
            ChannelValues::new("Hello", "Servus", "Salut"),
            changed_flags(
                Some(ChannelChange::Changed),
                Some(ChannelChange::Changed),
                Some(ChannelChange::Changed),
            ),
        );

        let outcome = suppress(vec![rec], &InvariantSet::new());

        assert_that!(outcome.records, len(eq(1)));
        let kept = outcome.records.first().unwrap();
        assert_that!(kept.reported, eq(kept.current.clone()));
    }

    /// ルール 1 はルール 3 の素通りよりも優先される
    #[rstest]
    fn test_rule1_precedes_pass_through() {
        let mut invariants = InvariantSet::new();
        invariants.insert("Submit");

        let rec = record(
            ChannelValues::new("Submit", "Senden", ""),
            changed_flags(Some(ChannelChange::Changed), None, None),
        );

        let outcome = suppress(vec![rec], &invariants);

        assert_that!(outcome.records, is_empty());
    }

    /// ルールはフラグを書き換えない
    #[rstest]
    fn test_rules_never_mutate_flags() {
        let flags = changed_flags(
            Some(ChannelChange::Changed),
            Some(ChannelChange::Changed),
            None,
        );
        let rec = record(ChannelValues::new("Hello", "Servus", "Bonjour"), flags);

        let outcome = suppress(vec![rec], &InvariantSet::new());

        let kept = outcome.records.first().unwrap();
        assert_that!(kept.flags, eq(flags));
    }
}
