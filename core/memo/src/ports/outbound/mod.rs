//! Outbound ポート: メモストアが外界（永続スロット・変更通知先）を使うための trait

pub mod durable_storage;
pub mod memo_observer;

pub use durable_storage::DurableStorage;
pub use memo_observer::MemoObserver;
