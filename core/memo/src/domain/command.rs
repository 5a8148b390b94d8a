//! memo コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の Runner が match でディスパッチする。

use super::{Category, DateKey, MemoRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// 1 日分のメモを開く（show <date>）
    Show { date: DateKey },

    /// 1 件追加（add <date> <category> <text...>）
    Add {
        date: DateKey,
        category: Category,
        text: String,
    },

    /// 1 日分を丸ごと上書き（set <date> --hospital ... --pain ...）
    Set { date: DateKey, record: MemoRecord },

    /// 1 件削除（delete <date> <category> <index>）
    Delete {
        date: DateKey,
        category: Category,
        index: usize,
    },

    /// 月内の分類別集計（month <category> [<date>]）。None は今日。
    Month {
        category: Category,
        reference: Option<DateKey>,
    },

    /// 月内でメモのある日（marks [<date>]）
    Marks { reference: Option<DateKey> },

    /// 保存されている全日付
    Dates,
}

impl Command {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Show { .. } => "show",
            Command::Add { .. } => "add",
            Command::Set { .. } => "set",
            Command::Delete { .. } => "delete",
            Command::Month { .. } => "month",
            Command::Marks { .. } => "marks",
            Command::Dates => "dates",
        }
    }

    /// ストアを書き換えるコマンドか
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Set { .. } | Command::Delete { .. }
        )
    }
}
