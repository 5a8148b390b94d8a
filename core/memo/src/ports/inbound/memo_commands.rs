//! カレンダー UI から見たメモ操作
//!
//! ウィジェットのイベント（日付選択・保存・削除アイコン・分類アイコン）を
//! そのままこの trait のメソッドに翻訳すればよいように、描画ライブラリに依存しない形にしている。

use crate::domain::{Category, DateKey, DayEntries, MemoRecord, Persistence};
use chrono::NaiveDate;

pub trait MemoCommands {
    /// 日付を開く（エディタ・ビューア表示用）。無ければ 3 分類とも空。
    fn on_date_activated(&self, date: DateKey) -> MemoRecord;

    /// 1 日分を丸ごと保存（上書き、マージしない）
    fn apply_edit(&mut self, date: DateKey, record: MemoRecord) -> Persistence;

    /// 1 件削除。範囲外の index は何もしない（Unchanged）。
    fn apply_delete(&mut self, date: DateKey, category: Category, index: usize) -> Persistence;

    /// 1 件追加（空白のみのテキストは無視）
    fn append(&mut self, date: DateKey, category: Category, text: &str) -> Persistence;

    /// 分類アイコン: 表示中の月で category を持つ日の一覧
    fn on_category_activated(&self, category: Category, visible_month: NaiveDate) -> Vec<DayEntries>;

    /// 表示中の月でメモがある日（カレンダー上の印）
    fn marked_days(&self, visible_month: NaiveDate) -> Vec<DateKey>;
}
