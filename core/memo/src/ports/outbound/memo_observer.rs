//! メモ変更の通知先 Outbound ポート

use crate::domain::{DateKey, LoadFault, MemoRecord, Persistence};

/// MemoStore の変更・破損検出を受け取る
///
/// 実装は adapter::LoggingMemoObserver（構造化ログへ記録）など。
pub trait MemoObserver: Send + Sync {
    /// key のレコードが変わった。None はキーごと削除されたことを表す。
    fn on_changed(&self, key: &DateKey, record: Option<&MemoRecord>, persistence: &Persistence);

    /// 起動時の読み込みで保存値を破損として捨てた
    fn on_load_fault(&self, _fault: &LoadFault) {}
}
