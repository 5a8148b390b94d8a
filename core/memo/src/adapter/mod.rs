//! アダプター（永続スロット・変更通知・設定の実装）

pub mod config;
pub mod file_slot_storage;
pub mod logging_observer;
pub mod memory_slot_storage;

pub use config::{load_memo_config, MemoConfig};
pub use file_slot_storage::FileSlotStorage;
pub use logging_observer::LoggingMemoObserver;
pub use memory_slot_storage::InMemorySlotStorage;
