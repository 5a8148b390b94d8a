//! 配線: 標準アダプタで MemoStore / CalendarUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem};
use common::domain::Dirs;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{load_memo_config, FileSlotStorage, LoggingMemoObserver, MemoConfig};
use crate::ports::outbound::DurableStorage;
use crate::usecase::{CalendarUseCase, MemoStore};

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub dirs: Dirs,
    pub clock: Arc<dyn Clock>,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
    pub config: MemoConfig,
    pub calendar: CalendarUseCase,
}

/// 配線: 環境変数からディレクトリを解決して App を組み立てる
pub fn wire_memo() -> Result<App, Error> {
    wire_memo_with(&StdEnvResolver, Arc::new(StdClock))
}

/// 配線: 任意の EnvResolver から App を組み立てる。
/// ログ出力先が解決できなければ NoopLog で続行する（データディレクトリは必須）。
pub fn wire_memo_with(env_resolver: &dyn EnvResolver, clock: Arc<dyn Clock>) -> Result<App, Error> {
    let dirs = env_resolver.resolve_dirs()?;
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = match env_resolver.resolve_log_file_path() {
        Ok(path) => Arc::new(FileJsonLog::new(Arc::clone(&fs), path)),
        Err(_) => Arc::new(NoopLog),
    };
    Ok(assemble(dirs, clock, fs, logger))
}

/// 配線: 解決済みのディレクトリと時刻源から App を組み立てる（テストからも使う）
pub fn wire_memo_in(dirs: Dirs, clock: Arc<dyn Clock>) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        dirs.logs_dir().join("memo.jsonl"),
    ));
    assemble(dirs, clock, fs, logger)
}

fn assemble(dirs: Dirs, clock: Arc<dyn Clock>, fs: Arc<dyn FileSystem>, logger: Arc<dyn Log>) -> App {
    let config = load_memo_config(fs.as_ref(), &dirs.config_file());
    let storage: Arc<dyn DurableStorage> =
        Arc::new(FileSlotStorage::new(Arc::clone(&fs), &dirs.data_dir));
    let mut store = MemoStore::open(storage, Arc::clone(&logger), config.slot.clone());
    store.subscribe(Arc::new(LoggingMemoObserver::new(Arc::clone(&logger))));
    App {
        dirs,
        clock,
        logger,
        config,
        calendar: CalendarUseCase::new(store),
    }
}
