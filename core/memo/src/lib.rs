//! 日付キーのメモストア
//!
//! カレンダーの日付ごとに、病院・服薬時間・痛みの 3 分類でメモを保持する。
//! 描画（カレンダー・日付ピッカー・モーダル）は外部の協調者で、
//! `ports::inbound::MemoCommands` を通してストアを呼び出す。

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod ports;
pub mod usecase;
pub mod wiring;
