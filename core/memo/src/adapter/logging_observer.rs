//! メモの変更・破損検出を構造化ログに記録する MemoObserver

use crate::domain::{DateKey, LoadFault, MemoRecord, Persistence};
use crate::ports::outbound::MemoObserver;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct LoggingMemoObserver {
    log: Arc<dyn Log>,
}

impl LoggingMemoObserver {
    pub fn new(log: Arc<dyn Log>) -> Self {
        Self { log }
    }
}

fn persistence_label(p: &Persistence) -> &'static str {
    match p {
        Persistence::Written => "written",
        Persistence::Unchanged => "unchanged",
        Persistence::Failed(_) => "failed",
    }
}

impl MemoObserver for LoggingMemoObserver {
    fn on_changed(&self, key: &DateKey, record: Option<&MemoRecord>, persistence: &Persistence) {
        let level = if persistence.is_failed() {
            LogLevel::Warn
        } else {
            LogLevel::Info
        };
        let mut rec = LogRecord::new(level, "memo write")
            .layer("adapter")
            .kind("memo")
            .field("date", key.to_string())
            .field("persistence", persistence_label(persistence));
        rec = match record {
            Some(r) => rec
                .field("operation", "update")
                .field("entries", r.total_entries()),
            None => rec.field("operation", "remove"),
        };
        let _ = self.log.log(&rec);
    }

    fn on_load_fault(&self, fault: &LoadFault) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Error, "memo store started empty")
                .layer("adapter")
                .kind("memo")
                .field("reason", fault.to_string()),
        );
    }
}
