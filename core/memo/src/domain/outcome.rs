//! 永続化の結果型
//!
//! 永続化の失敗・保存値の破損は呼び出し側への Err にはせず、値として返す。
//! インメモリの状態は常に更新済みで、これらは「再起動後に残るか」だけを表す。

use std::fmt;

/// write-through 1 回分の結果
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// ストア全体を書き込んだ
    Written,
    /// 変更がなかったので書き込んでいない
    Unchanged,
    /// 書き込みに失敗した（インメモリの変更は保持、再試行しない）
    Failed(String),
}

impl Persistence {
    pub fn is_failed(&self) -> bool {
        matches!(self, Persistence::Failed(_))
    }
}

/// 起動時の読み込みで保存値を捨てた理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFault {
    /// スロットの読み出し自体に失敗
    Unreadable(String),
    /// JSON として壊れている
    Malformed(String),
    /// トップレベルがオブジェクトでない（配列など）
    WrongShape(&'static str),
}

impl fmt::Display for LoadFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFault::Unreadable(e) => write!(f, "stored memos could not be read: {}", e),
            LoadFault::Malformed(e) => write!(f, "stored memos are not valid JSON: {}", e),
            LoadFault::WrongShape(kind) => {
                write!(f, "stored memos must be a JSON object, found {}", kind)
            }
        }
    }
}
