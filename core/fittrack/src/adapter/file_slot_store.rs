//! スロットをファイルとして読み書きする SlotStore 実装
//!
//! 1 スロット = データディレクトリ直下の 1 ファイル（ファイル名 = スロット名）。

use crate::ports::outbound::SlotStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

/// データディレクトリ配下にスロットを保存する SlotStore 実装
pub struct FileSlotStore {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }
}

impl SlotStore for FileSlotStore {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, Error> {
        let path = self.slot_path(slot);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    fn write_slot(&self, slot: &str, value: &str) -> Result<(), Error> {
        self.fs.create_dir_all(&self.dir)?;
        self.fs.write(&self.slot_path(slot), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    fn store(dir: &std::path::Path) -> FileSlotStore {
        FileSlotStore::new(Arc::new(StdFileSystem), dir.to_path_buf())
    }

    #[test]
    fn test_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store(dir.path()).read_slot("absent").unwrap(), None);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let s = store(dir.path());
        s.write_slot("fittrack_theme", "dark").unwrap();
        assert_eq!(
            s.read_slot("fittrack_theme").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_write_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("fittrack");
        let s = store(&nested);
        s.write_slot("fittrack_entries_v1", "[]").unwrap();
        assert!(nested.join("fittrack_entries_v1").is_file());
    }

    #[test]
    fn test_write_replaces_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let s = store(dir.path());
        s.write_slot("slot", "first-version-with-longer-content").unwrap();
        s.write_slot("slot", "second").unwrap();
        assert_eq!(s.read_slot("slot").unwrap().as_deref(), Some("second"));
    }
}
