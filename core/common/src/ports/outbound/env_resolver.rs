//! 環境変数解決 Outbound ポート
//!
//! 設定・データ・状態ディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// MEMO_HOME が設定されていれば返す
    fn home_dir_from_env(&self) -> Option<HomeDir>;

    /// config / data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. MEMO_HOME（設定されていれば config/ data/ state/ をその配下に置く）
    /// 2. XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME の memo
    /// 3. $HOME/.config/memo, $HOME/.local/share/memo, $HOME/.local/state/memo
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// 構造化ログ（JSONL）の出力先
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_dirs()?.logs_dir().join("memo.jsonl"))
    }
}
