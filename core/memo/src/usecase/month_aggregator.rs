//! MonthAggregator: 表示中の月で分類別にメモを集める
//!
//! 状態を持たない。窓の計算だけ行い、走査は MemoStore に委ねる。

use crate::domain::{Category, DayEntries, MonthWindow};
use crate::usecase::memo_store::MemoStore;
use chrono::NaiveDate;

pub struct MonthAggregator;

impl MonthAggregator {
    /// reference を含む月の [月初, 月末] で category を持つ日（古い順）
    pub fn aggregate(store: &MemoStore, category: Category, reference: NaiveDate) -> Vec<DayEntries> {
        let window = MonthWindow::containing(reference);
        store.aggregate_by_category(category, &window.start, &window.end)
    }
}
