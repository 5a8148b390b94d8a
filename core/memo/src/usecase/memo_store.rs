//! MemoStore: 日付キーのメモストア（唯一の正）
//!
//! 起動時に永続スロットから 1 回だけ読み込み、以後は変更のたびにストア全体を
//! スロットへ書き戻す（write-through、まとめ書きなし）。
//!
//! 不変条件: 3 分類とも空のレコードはストアに存在しない。save / delete_entry / append_entry の
//! どれで空になっても、その時点でキーごと取り除く。

use crate::domain::{Category, DateKey, DayEntries, LoadFault, MemoRecord, Persistence};
use crate::ports::outbound::{DurableStorage, MemoObserver};
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 既定のスロット名
pub const DEFAULT_SLOT: &str = "memos";

/// load() の結果。破損時も memos は空で返り、理由は fault に入る。
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub memos: BTreeMap<DateKey, MemoRecord>,
    pub fault: Option<LoadFault>,
    /// 形式不正で読み飛ばしたエントリのキー（生の文字列）
    pub skipped: Vec<String>,
}

pub struct MemoStore {
    storage: Arc<dyn DurableStorage>,
    log: Arc<dyn Log>,
    slot: String,
    memos: BTreeMap<DateKey, MemoRecord>,
    load_fault: Option<LoadFault>,
    observers: Vec<Arc<dyn MemoObserver>>,
}

impl MemoStore {
    /// スロットを読み込んでストアを開く。破損していても空のストアとして開く。
    pub fn open(storage: Arc<dyn DurableStorage>, log: Arc<dyn Log>, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let outcome = Self::load(storage.as_ref(), log.as_ref(), &slot);
        Self {
            storage,
            log,
            slot,
            memos: outcome.memos,
            load_fault: outcome.fault,
            observers: Vec::new(),
        }
    }

    /// スロットを読んでパース・形式検査する。
    ///
    /// - スロットなし: 空
    /// - 読み出し失敗・JSON 不正・トップレベルがオブジェクト以外: 空 + LoadFault
    /// - 個々のエントリはキーが日付として読めない、または値がレコードでなければ読み飛ばす
    pub fn load(storage: &dyn DurableStorage, log: &dyn Log, slot: &str) -> LoadOutcome {
        let text = match storage.read(slot) {
            Ok(Some(text)) => text,
            Ok(None) => return LoadOutcome::default(),
            Err(e) => return fault_outcome(log, slot, LoadFault::Unreadable(e.to_string())),
        };
        let outcome = match decode(&text) {
            Ok((memos, skipped)) => LoadOutcome {
                memos,
                fault: None,
                skipped,
            },
            Err(fault) => return fault_outcome(log, slot, fault),
        };
        for key in &outcome.skipped {
            let _ = log.log(
                &LogRecord::new(LogLevel::Warn, "memo entry skipped")
                    .layer("usecase")
                    .kind("memo")
                    .field("slot", slot)
                    .field("key", key.as_str()),
            );
        }
        let _ = log.log(
            &LogRecord::new(LogLevel::Info, "memo store loaded")
                .layer("usecase")
                .kind("memo")
                .field("slot", slot)
                .field("dates", outcome.memos.len()),
        );
        outcome
    }

    /// 起動時の読み込みで保存値を捨てていれば、その理由
    pub fn load_fault(&self) -> Option<&LoadFault> {
        self.load_fault.as_ref()
    }

    /// 変更通知先を登録する。読み込み時の破損があれば登録時にその observer へ通知する。
    pub fn subscribe(&mut self, observer: Arc<dyn MemoObserver>) {
        if let Some(fault) = &self.load_fault {
            observer.on_load_fault(fault);
        }
        self.observers.push(observer);
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// key のレコード。無ければ 3 分類とも空のレコード（ストアは変更しない）。
    pub fn get(&self, key: &DateKey) -> MemoRecord {
        self.memos.get(key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.memos.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    /// 保存されている日付（古い順）
    pub fn keys(&self) -> impl Iterator<Item = &DateKey> + '_ {
        self.memos.keys()
    }

    /// key のレコードを丸ごと置き換えて永続化する（マージしない）。
    /// 空のレコードを渡すとキーごと削除する。
    pub fn save(&mut self, key: DateKey, record: MemoRecord) -> Persistence {
        self.replace(key, record)
    }

    /// 1 件取り除いた後のレコードを受け取り、刈り込みを適用して永続化する。
    /// 空の分類は落とし、全分類が空ならキーごと削除する。
    pub fn delete_entry(&mut self, key: DateKey, updated: MemoRecord) -> Persistence {
        self.replace(key, updated)
    }

    /// category の末尾に 1 件追加する。前後の空白は落とし、空なら何もしない。
    pub fn append_entry(&mut self, key: DateKey, category: Category, text: &str) -> Persistence {
        let text = text.trim();
        if text.is_empty() {
            return Persistence::Unchanged;
        }
        let mut record = self.get(&key);
        record.push(category, text);
        self.replace(key, record)
    }

    /// [start, end]（両端含む）で category のエントリを持つ日を古い順に返す
    pub fn aggregate_by_category(
        &self,
        category: Category,
        start: &DateKey,
        end: &DateKey,
    ) -> Vec<DayEntries> {
        if start > end {
            return Vec::new();
        }
        self.memos
            .range(*start..=*end)
            .filter(|(_, record)| !record.entries(category).is_empty())
            .map(|(date, record)| DayEntries {
                date: *date,
                entries: record.entries(category).to_vec(),
            })
            .collect()
    }

    /// [start, end]（両端含む）でメモのある日
    pub fn dates_between(&self, start: &DateKey, end: &DateKey) -> Vec<DateKey> {
        if start > end {
            return Vec::new();
        }
        self.memos.range(*start..=*end).map(|(date, _)| *date).collect()
    }

    /// 現在の状態をスロットへ書き戻す
    pub fn flush(&self) -> Persistence {
        self.persist()
    }

    fn replace(&mut self, key: DateKey, record: MemoRecord) -> Persistence {
        let stored = match record.pruned() {
            Some(record) => {
                self.memos.insert(key, record);
                true
            }
            None => {
                self.memos.remove(&key);
                false
            }
        };
        let persistence = self.persist();
        let current = if stored { self.memos.get(&key) } else { None };
        for observer in &self.observers {
            observer.on_changed(&key, current, &persistence);
        }
        persistence
    }

    /// ストア全体を直列化してから 1 回で書く（差分書き込みはしない）
    fn persist(&self) -> Persistence {
        let result = serde_json::to_string(&self.memos)
            .map_err(common::error::Error::from)
            .and_then(|json| self.storage.write(&self.slot, &json));
        match result {
            Ok(()) => Persistence::Written,
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Error, "memo persist failed")
                        .layer("usecase")
                        .kind("memo")
                        .field("slot", self.slot.as_str())
                        .field("error", e.to_string()),
                );
                Persistence::Failed(e.to_string())
            }
        }
    }
}

fn fault_outcome(log: &dyn Log, slot: &str, fault: LoadFault) -> LoadOutcome {
    let _ = log.log(
        &LogRecord::new(LogLevel::Error, "stored memos discarded")
            .layer("usecase")
            .kind("memo")
            .field("slot", slot)
            .field("reason", fault.to_string()),
    );
    LoadOutcome {
        memos: BTreeMap::new(),
        fault: Some(fault),
        skipped: Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 保存テキストをストアに戻す。非正規のキー（2024-3-5 等）は正規化し、
/// 同じ日付に正規化されたキー同士は文書順に連結する。空レコードは落とす。
fn decode(text: &str) -> Result<(BTreeMap<DateKey, MemoRecord>, Vec<String>), LoadFault> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| LoadFault::Malformed(e.to_string()))?;
    let entries = match value {
        Value::Object(entries) => entries,
        other => return Err(LoadFault::WrongShape(json_kind(&other))),
    };
    let mut memos: BTreeMap<DateKey, MemoRecord> = BTreeMap::new();
    let mut skipped = Vec::new();
    for (raw_key, raw_record) in entries {
        let parsed = DateKey::parse(&raw_key)
            .ok()
            .zip(serde_json::from_value::<MemoRecord>(raw_record).ok());
        let Some((key, record)) = parsed else {
            skipped.push(raw_key);
            continue;
        };
        let merged = memos.entry(key).or_default();
        for (category, items) in record.iter() {
            for item in items {
                merged.push(category, item.clone());
            }
        }
    }
    memos.retain(|_, record| !record.is_empty());
    Ok((memos, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::InMemorySlotStorage;
    use common::adapter::NoopLog;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    fn store_with(contents: Option<&str>) -> (Arc<InMemorySlotStorage>, MemoStore) {
        let storage = Arc::new(InMemorySlotStorage::new());
        if let Some(text) = contents {
            storage.write(DEFAULT_SLOT, text).unwrap();
        }
        let store = MemoStore::open(storage.clone(), Arc::new(NoopLog), DEFAULT_SLOT);
        (storage, store)
    }

    #[test]
    fn test_open_missing_slot_is_empty_without_fault() {
        let (_, store) = store_with(None);
        assert!(store.is_empty());
        assert!(store.load_fault().is_none());
    }

    #[test]
    fn test_save_then_get_round_trip() {
        let (_, mut store) = store_with(None);
        let record = MemoRecord::new()
            .with(Category::Hospital, ["Dr. Lee, 10am", "blood test"])
            .with(Category::Pain, ["mild"]);
        assert_eq!(store.save(key("2024/03/05"), record.clone()), Persistence::Written);
        assert_eq!(store.get(&key("2024/03/05")), record);
    }

    #[test]
    fn test_save_is_full_overwrite() {
        let (_, mut store) = store_with(None);
        let _ = store.save(
            key("2024/03/05"),
            MemoRecord::new()
                .with(Category::Hospital, ["a"])
                .with(Category::Pain, ["b"]),
        );
        let _ = store.save(key("2024/03/05"), MemoRecord::new().with(Category::Pain, ["c"]));
        let got = store.get(&key("2024/03/05"));
        assert!(got.entries(Category::Hospital).is_empty());
        assert_eq!(got.entries(Category::Pain), ["c"]);
    }

    #[test]
    fn test_save_empty_record_removes_key() {
        let (storage, mut store) = store_with(None);
        let _ = store.save(key("2024/03/05"), MemoRecord::new().with(Category::Pain, ["x"]));
        let _ = store.save(key("2024/03/05"), MemoRecord::new());
        assert!(!store.contains(&key("2024/03/05")));
        assert_eq!(storage.read(DEFAULT_SLOT).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_get_does_not_create_key() {
        let (storage, store) = store_with(None);
        assert!(store.get(&key("2024/03/05")).is_empty());
        assert!(!store.contains(&key("2024/03/05")));
        assert_eq!(storage.read(DEFAULT_SLOT).unwrap(), None);
    }

    #[test]
    fn test_delete_last_entry_prunes_key() {
        let (_, mut store) = store_with(None);
        let record = MemoRecord::new().with(Category::Hospital, ["Dr. Lee, 10am"]);
        let _ = store.save(key("2024/03/05"), record.clone());

        let updated = record.without_entry(Category::Hospital, 0).unwrap();
        assert_eq!(store.delete_entry(key("2024/03/05"), updated), Persistence::Written);
        assert!(!store.contains(&key("2024/03/05")));
        assert_eq!(store.get(&key("2024/03/05")), MemoRecord::new());
    }

    #[test]
    fn test_delete_keeps_other_categories() {
        let (_, mut store) = store_with(None);
        let record = MemoRecord::new()
            .with(Category::Hospital, ["h"])
            .with(Category::Pain, ["p1", "p2"]);
        let _ = store.save(key("2024/03/05"), record.clone());
        let _ = store.delete_entry(
            key("2024/03/05"),
            record.without_entry(Category::Hospital, 0).unwrap(),
        );
        let got = store.get(&key("2024/03/05"));
        assert!(got.entries(Category::Hospital).is_empty());
        assert_eq!(got.entries(Category::Pain), ["p1", "p2"]);
    }

    #[test]
    fn test_append_entry_trims_and_ignores_blank() {
        let (_, mut store) = store_with(None);
        assert_eq!(
            store.append_entry(key("2024/03/05"), Category::Pain, "   "),
            Persistence::Unchanged
        );
        assert!(store.is_empty());
        let _ = store.append_entry(key("2024/03/05"), Category::Pain, " mild ");
        let _ = store.append_entry(key("2024/03/05"), Category::Pain, "sharp");
        assert_eq!(store.get(&key("2024/03/05")).entries(Category::Pain), ["mild", "sharp"]);
    }

    #[test]
    fn test_every_mutation_writes_whole_store() {
        let (storage, mut store) = store_with(None);
        let _ = store.append_entry(key("2024/03/05"), Category::Hospital, "a");
        let _ = store.append_entry(key("2024/03/06"), Category::Pain, "b");
        let written: Value =
            serde_json::from_str(&storage.read(DEFAULT_SLOT).unwrap().unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({
                "2024/03/05": {"hospital": ["a"]},
                "2024/03/06": {"pain": ["b"]}
            })
        );
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_reopen_restores_state() {
        let (storage, mut store) = store_with(None);
        let _ = store.append_entry(key("2024/03/05"), Category::MedicationTime, "8am");
        let reopened = MemoStore::open(storage, Arc::new(NoopLog), DEFAULT_SLOT);
        assert_eq!(
            reopened.get(&key("2024/03/05")).entries(Category::MedicationTime),
            ["8am"]
        );
    }

    #[test]
    fn test_load_array_is_wrong_shape() {
        let (_, store) = store_with(Some(r#"[{"2024/03/05": {"pain": ["x"]}}]"#));
        assert!(store.is_empty());
        assert_eq!(store.load_fault(), Some(&LoadFault::WrongShape("array")));
    }

    #[test]
    fn test_load_malformed_text_is_empty() {
        let (_, store) = store_with(Some("{\"2024/03/05\": {"));
        assert!(store.is_empty());
        assert!(matches!(store.load_fault(), Some(LoadFault::Malformed(_))));
    }

    #[test]
    fn test_load_skips_bad_entries_and_prunes_empty() {
        let (_, store) = store_with(Some(
            r#"{
                "2024/03/05": {"pain": ["mild"]},
                "yesterday": {"pain": ["x"]},
                "2024/03/06": {"pain": 3},
                "2024/03/07": {"hospital": [], "pain": []}
            }"#,
        ));
        assert!(store.load_fault().is_none());
        let keys: Vec<String> = store.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["2024/03/05"]);
    }

    #[test]
    fn test_load_merges_keys_that_normalize_to_same_date() {
        let (_, store) = store_with(Some(
            r#"{"2024/03/05": {"pain": ["a"]}, "2024-3-5": {"pain": ["b"], "hospital": ["h"]}}"#,
        ));
        let got = store.get(&key("2024/03/05"));
        assert_eq!(got.entries(Category::Pain), ["a", "b"]);
        assert_eq!(got.entries(Category::Hospital), ["h"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reopen_keeps_five_digit_year() {
        let (storage, mut store) = store_with(None);
        let far = DateKey::from_date(chrono::NaiveDate::from_ymd_opt(12345, 6, 7).unwrap());
        let _ = store.append_entry(far, Category::Pain, "far");
        let reopened = MemoStore::open(storage, Arc::new(NoopLog), DEFAULT_SLOT);
        assert_eq!(reopened.get(&far).entries(Category::Pain), ["far"]);
    }

    #[test]
    fn test_aggregate_window_and_category() {
        let (_, mut store) = store_with(None);
        let _ = store.append_entry(key("2024/02/29"), Category::Pain, "before");
        let _ = store.append_entry(key("2024/03/01"), Category::Pain, "first");
        let _ = store.append_entry(key("2024/03/10"), Category::Hospital, "no pain here");
        let _ = store.append_entry(key("2024/03/31"), Category::Pain, "last");
        let _ = store.append_entry(key("2024/04/01"), Category::Pain, "after");

        let rows = store.aggregate_by_category(Category::Pain, &key("2024/03/01"), &key("2024/03/31"));
        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2024/03/01", "2024/03/31"]);
        assert_eq!(rows[1].entries, vec!["last".to_string()]);

        assert!(store
            .aggregate_by_category(Category::Pain, &key("2024/03/31"), &key("2024/03/01"))
            .is_empty());
    }
}
