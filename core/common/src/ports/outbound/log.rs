//! 構造化ログ Outbound ポート
//!
//! 全レイヤー（CLI / usecase / adapter）から JSONL ログをファイルに出力するための trait。
//! メモの読み書き・永続化失敗・破損検出もここに記録する。
//! エラー時のコンソール表示（stderr）とは別チャネルで、ファイルにのみ書き出す。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: cli, usecase, adapter, wiring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    /// 例: lifecycle, config, memo, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

impl LogRecord {
    /// 現在時刻で 1 レコードを作る。layer / kind / fields は builder で足す。
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            layer: None,
            kind: None,
            fields: None,
        }
    }

    pub fn layer(mut self, layer: &str) -> Self {
        self.layer = Some(layer.to_string());
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    /// fields にキー・値を 1 つ追加する
    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// 構造化ログを出力する Outbound ポート
///
/// 実装は common::adapter::FileJsonLog（ファイルへ JSONL 追記）や NoopLog（テスト用・ログ先未解決時）など。
pub trait Log: Send + Sync {
    /// 1 レコードをログに書き出す（ファイルへ JSONL 1 行として追記）
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_record_serialize() {
        let rec = LogRecord {
            ts: "2024-03-05T09:00:00Z".to_string(),
            level: LogLevel::Info,
            message: "memo write".to_string(),
            layer: Some("adapter".to_string()),
            kind: Some("memo".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("date".to_string(), serde_json::json!("2024/03/05"));
                Some(m)
            },
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"ts\":\"2024-03-05T09:00:00Z\""));
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"message\":\"memo write\""));
        assert!(json.contains("\"layer\":\"adapter\""));
        assert!(json.contains("\"kind\":\"memo\""));
        assert!(json.contains("\"date\":\"2024/03/05\""));
    }

    #[test]
    fn test_log_record_builder() {
        let rec = LogRecord::new(LogLevel::Warn, "memo entry skipped")
            .layer("usecase")
            .kind("memo")
            .field("key", "2024/13/01")
            .field("count", 2);
        assert_eq!(rec.level, LogLevel::Warn);
        assert_eq!(rec.layer.as_deref(), Some("usecase"));
        let fields = rec.fields.unwrap();
        assert_eq!(fields["key"], serde_json::json!("2024/13/01"));
        assert_eq!(fields["count"], serde_json::json!(2));
    }

    #[test]
    fn test_log_record_omits_empty_optionals() {
        let json = serde_json::to_string(&LogRecord::new(LogLevel::Error, "x")).unwrap();
        assert!(!json.contains("layer"));
        assert!(!json.contains("fields"));
    }
}
