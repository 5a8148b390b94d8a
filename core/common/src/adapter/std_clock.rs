//! 標準時刻実装（chrono::Local を委譲）

use crate::ports::outbound::Clock;
use chrono::NaiveDate;

/// ローカル時刻の今日を返す Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// 常に同じ日付を返す Clock 実装（テスト・再現用）
#[derive(Debug, Clone)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
