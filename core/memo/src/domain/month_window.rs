//! 月のウィンドウ（月初〜月末の閉区間）と集計結果の行

use super::date_key::DateKey;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// 表示中の月の `[start, end]`（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateKey,
    pub end: DateKey,
}

impl MonthWindow {
    /// reference を含む月の月初・月末
    pub fn containing(reference: NaiveDate) -> Self {
        let first = reference.with_day(1).unwrap_or(reference);
        let next_first = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        // NaiveDate::MAX の月は翌月が作れない
        let last = next_first
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self {
            start: DateKey::from_date(first),
            end: DateKey::from_date(last),
        }
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.start <= *key && *key <= self.end
    }
}

/// 集計結果の 1 行（日付と、その日の該当分類のエントリ列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntries {
    pub date: DateKey,
    pub entries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(y: i32, m: u32, d: u32) -> (String, String) {
        let w = MonthWindow::containing(ymd(y, m, d));
        (w.start.to_string(), w.end.to_string())
    }

    #[test]
    fn test_month_window_bounds() {
        assert_eq!(window(2024, 3, 15), ("2024/03/01".into(), "2024/03/31".into()));
        assert_eq!(window(2024, 4, 1), ("2024/04/01".into(), "2024/04/30".into()));
        assert_eq!(window(2024, 2, 29), ("2024/02/01".into(), "2024/02/29".into()));
        assert_eq!(window(2023, 2, 10), ("2023/02/01".into(), "2023/02/28".into()));
        assert_eq!(window(2024, 12, 31), ("2024/12/01".into(), "2024/12/31".into()));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let w = MonthWindow::containing(ymd(2024, 3, 15));
        assert!(w.contains(&DateKey::from_date(ymd(2024, 3, 1))));
        assert!(w.contains(&DateKey::from_date(ymd(2024, 3, 31))));
        assert!(!w.contains(&DateKey::from_date(ymd(2024, 2, 29))));
        assert!(!w.contains(&DateKey::from_date(ymd(2024, 4, 1))));
    }

    #[test]
    fn test_day_entries_serialize() {
        let row = DayEntries {
            date: DateKey::from_date(ymd(2024, 3, 10)),
            entries: vec!["mild".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"date":"2024/03/10","entries":["mild"]}"#
        );
    }
}
