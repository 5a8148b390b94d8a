//! プロセス内メモリに保持する DurableStorage 実装（埋め込み・テスト用）

use crate::ports::outbound::DurableStorage;
use common::error::Error;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
    fail_writes: Mutex<bool>,
}

impl InMemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// true の間、write は常に失敗する（容量超過などの再現用）
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut f) = self.fail_writes.lock() {
            *f = fail;
        }
    }

    /// 成功した write の回数
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|n| *n).unwrap_or(0)
    }
}

fn poisoned() -> Error {
    Error::system("slot storage lock poisoned")
}

impl DurableStorage for InMemorySlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, Error> {
        let slots = self.slots.lock().map_err(|_| poisoned())?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), Error> {
        if *self.fail_writes.lock().map_err(|_| poisoned())? {
            return Err(Error::io_msg(format!("slot '{}': quota exceeded", slot)));
        }
        self.slots
            .lock()
            .map_err(|_| poisoned())?
            .insert(slot.to_string(), contents.to_string());
        *self.writes.lock().map_err(|_| poisoned())? += 1;
        Ok(())
    }
}
