//! 時刻 Outbound ポート
//!
//! usecase / CLI はこの trait 経由で「今日」を取得する（月表示の既定基準日など）。

use chrono::NaiveDate;

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// ローカルタイムゾーンでの今日の日付
    fn today(&self) -> NaiveDate;
}
