//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits.h に合わせる。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// ファイル等の I/O 失敗
    #[error("{0}")]
    Io(String),

    /// JSON のシリアライズ・パース失敗
    #[error("json: {0}")]
    Json(String),

    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgs(String),

    /// 環境変数の解決失敗
    #[error("env: {0}")]
    Env(String),

    /// 見つからない
    #[error("not found: {0}")]
    NotFound(String),

    /// その他のシステムエラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgs(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgs(_) => 64,
            Error::Json(_) => 65,
            Error::NotFound(_) => 66,
            Error::Env(_) => 78,
            Error::Io(_) => 74,
            Error::System(_) => 70,
        }
    }

    /// 使い方の誤り（Usage を表示すべき）か
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgs(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
