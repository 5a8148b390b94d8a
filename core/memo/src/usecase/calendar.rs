//! CalendarUseCase: カレンダー UI（または CLI）のイベントを MemoStore への操作に翻訳する
//!
//! MemoStore を 1 つ所有し、inbound ポート MemoCommands を実装する。

use crate::domain::{Category, DateKey, DayEntries, MemoRecord, MonthWindow, Persistence};
use crate::ports::inbound::MemoCommands;
use crate::usecase::memo_store::MemoStore;
use crate::usecase::month_aggregator::MonthAggregator;
use chrono::NaiveDate;

pub struct CalendarUseCase {
    store: MemoStore,
}

impl CalendarUseCase {
    pub fn new(store: MemoStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MemoStore {
        &self.store
    }

    /// 終了時など、明示的にストア全体を書き戻す
    pub fn flush(&self) -> Persistence {
        self.store.flush()
    }
}

impl MemoCommands for CalendarUseCase {
    fn on_date_activated(&self, date: DateKey) -> MemoRecord {
        self.store.get(&date)
    }

    fn apply_edit(&mut self, date: DateKey, record: MemoRecord) -> Persistence {
        self.store.save(date, record)
    }

    fn apply_delete(&mut self, date: DateKey, category: Category, index: usize) -> Persistence {
        match self.store.get(&date).without_entry(category, index) {
            Some(updated) => self.store.delete_entry(date, updated),
            None => Persistence::Unchanged,
        }
    }

    fn append(&mut self, date: DateKey, category: Category, text: &str) -> Persistence {
        self.store.append_entry(date, category, text)
    }

    fn on_category_activated(&self, category: Category, visible_month: NaiveDate) -> Vec<DayEntries> {
        MonthAggregator::aggregate(&self.store, category, visible_month)
    }

    fn marked_days(&self, visible_month: NaiveDate) -> Vec<DateKey> {
        let window = MonthWindow::containing(visible_month);
        self.store.dates_between(&window.start, &window.end)
    }
}
