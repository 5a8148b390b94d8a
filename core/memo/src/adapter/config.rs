//! memo の設定（config.json）読み込み（adapter 層）

use crate::usecase::memo_store::DEFAULT_SLOT;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::Path;

/// 月集計が空のときに CLI が表示する文言
pub const DEFAULT_EMPTY_MESSAGE: &str = "메모가 없습니다.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoConfig {
    /// 永続スロット名（data_dir/<slot>.json）
    pub slot: String,
    /// 月集計が 0 件のときのプレースホルダ行の文言
    pub empty_message: String,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

/// config.json を読む。無ければ既定値、壊れていれば警告して既定値。
pub fn load_memo_config(fs: &dyn FileSystem, path: &Path) -> MemoConfig {
    if !fs.exists(path) {
        return MemoConfig::default();
    }
    match read_config(fs, path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", path.display(), e);
            MemoConfig::default()
        }
    }
}

fn read_config(fs: &dyn FileSystem, path: &Path) -> Result<MemoConfig, Error> {
    let content = fs.read_to_string(path)?;
    let config: MemoConfig = serde_json::from_str(&content)?;
    if config.slot.trim().is_empty() {
        return Err(Error::invalid_argument("slot must not be empty"));
    }
    Ok(config)
}
