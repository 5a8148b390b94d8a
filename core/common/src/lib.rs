//! memo 共通ライブラリ
//!
//! `memo` コマンドとメモストアで共有するエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（HomeDir, Dirs）
pub mod domain;

/// Outbound ポート（FileSystem, Log, Clock, EnvResolver）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
