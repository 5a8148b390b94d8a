//! ディレクトリ内の `<slot>.json` を読み書きする DurableStorage 実装
//!
//! 書き込みは `<slot>.json.tmp` に全体を書いてから rename で差し替える。
//! 途中で失敗しても既存の `<slot>.json` はそのまま残る。

use crate::ports::outbound::DurableStorage;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileSlotStorage {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// スロットのファイルパス
    pub fn path(&self, slot: &str) -> Result<PathBuf, Error> {
        if slot.is_empty()
            || slot.starts_with('.')
            || slot.contains(['/', '\\'])
        {
            return Err(Error::invalid_argument(format!("invalid slot name '{}'", slot)));
        }
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl DurableStorage for FileSlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, Error> {
        let path = self.path(slot)?;
        match self.fs.metadata(&path) {
            Err(_) => Ok(None),
            Ok(m) if !m.is_file() => Err(Error::io_msg(format!(
                "'{}' is not a regular file",
                path.display()
            ))),
            Ok(_) => self.fs.read_to_string(&path).map(Some),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), Error> {
        let path = self.path(slot)?;
        self.fs.create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = self.fs.write(&tmp, contents) {
            let _ = self.fs.remove_file(&tmp);
            return Err(e);
        }
        self.fs.rename(&tmp, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    fn storage(dir: &Path) -> FileSlotStorage {
        FileSlotStorage::new(Arc::new(StdFileSystem), dir)
    }

    #[test]
    fn test_read_missing_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(storage(tmp.path()).read("memos").unwrap(), None);
    }

    #[test]
    fn test_write_creates_dir_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");
        let s = storage(&dir);
        s.write("memos", r#"{"2024/03/05":{"pain":["a"]}}"#).unwrap();
        s.write("memos", "{}").unwrap();
        assert_eq!(s.read("memos").unwrap().as_deref(), Some("{}"));
        assert!(dir.join("memos.json").is_file());
        assert!(!dir.join("memos.json.tmp").exists());
    }

    #[test]
    fn test_directory_in_place_of_slot_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("memos.json")).unwrap();
        let err = storage(tmp.path()).read("memos").unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_rejects_path_like_slot_names() {
        let tmp = tempfile::tempdir().unwrap();
        let s = storage(tmp.path());
        for slot in ["", "../memos", "a/b", ".hidden"] {
            assert!(s.write(slot, "{}").unwrap_err().is_usage(), "slot: {:?}", slot);
        }
    }
}
