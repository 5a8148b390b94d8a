//! Inbound ポート: ドライバ（カレンダー UI・CLI）がメモストアを呼び出すインターフェース

pub mod memo_commands;

pub use memo_commands::MemoCommands;
