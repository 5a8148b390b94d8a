//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "memo";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<PathBuf> {
    env::var(name).ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// XDG_* が設定されていればそれを、なければ $HOME/<fallback> を使う
fn xdg_dir(var: &str, home_fallback: &[&str]) -> Result<PathBuf, Error> {
    if let Some(base) = non_empty_var(var) {
        return Ok(base.join(APP_DIR));
    }
    let mut path = non_empty_var("HOME").ok_or_else(|| Error::env("HOME is not set"))?;
    for part in home_fallback {
        path.push(part);
    }
    path.push(APP_DIR);
    Ok(path)
}

impl EnvResolver for StdEnvResolver {
    fn home_dir_from_env(&self) -> Option<HomeDir> {
        non_empty_var("MEMO_HOME").map(HomeDir::new)
    }

    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = self.home_dir_from_env() {
            return Ok(home.to_dirs());
        }
        Ok(Dirs {
            config_dir: xdg_dir("XDG_CONFIG_HOME", &[".config"])?,
            data_dir: xdg_dir("XDG_DATA_HOME", &[".local", "share"])?,
            state_dir: xdg_dir("XDG_STATE_HOME", &[".local", "state"])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 環境変数はプロセス共有のため、1 テスト内で設定・復元まで行う
    #[test]
    fn test_resolve_dirs_prefers_memo_home() {
        let original = env::var("MEMO_HOME").ok();
        env::set_var("MEMO_HOME", "/tmp/memo_home_test");

        let dirs = StdEnvResolver.resolve_dirs().unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/tmp/memo_home_test/data"));
        assert_eq!(
            StdEnvResolver.resolve_log_file_path().unwrap(),
            PathBuf::from("/tmp/memo_home_test/state/logs/memo.jsonl")
        );

        match original {
            Some(val) => env::set_var("MEMO_HOME", val),
            None => env::remove_var("MEMO_HOME"),
        }
    }
}
