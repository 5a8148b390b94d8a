//! Ports & Adapters のポート定義
//!
//! - inbound: カレンダー UI / CLI がメモストアを呼び出すコマンドインターフェース
//! - outbound: 永続スロット・変更通知の trait（common の FileSystem / Log / Clock も利用）

pub mod inbound;
pub mod outbound;
