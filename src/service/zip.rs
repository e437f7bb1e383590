use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;
use crate::error::{Error, Result};
use crate::models::item::entry_name;

/// 壓縮檔中的一個項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// 含資料夾路徑的完整名稱
    pub full_name: String,
    /// 最後一段名稱，目錄項目為空字串
    pub name: String,
    /// 解壓縮後大小
    pub size: u64,
}

/// 依壓縮檔順序延遲讀取項目資訊，擁有壓縮檔句柄，結束或捨棄時即釋放
pub struct ArchiveEntries<R> {
    archive: ZipArchive<R>,
    index: usize,
}

impl ArchiveEntries<File> {
    pub fn open(archive_path: &Path) -> Result<Self> {
        let file = File::open(archive_path)?;
        if !file.metadata()?.is_file() {
            return Err(Error::InvalidRoot { path: archive_path.to_path_buf() });
        }
        Self::new(file)
    }
}

impl<R: Read + Seek> ArchiveEntries<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(ArchiveEntries { archive, index: 0 })
    }
}

impl<R: Read + Seek> Iterator for ArchiveEntries<R> {
    type Item = Result<ArchiveEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.archive.len();
        if self.index >= len {
            return None;
        }
        let entry = match self.archive.by_index_raw(self.index) {
            Ok(entry) => ArchiveEntry {
                full_name: entry.name().to_string(),
                name: entry_name(entry.name()).to_string(),
                size: entry.size(),
            },
            Err(err) => {
                // 項目標頭損毀時不再繼續讀取
                self.index = len;
                return Some(Err(err.into()));
            }
        };
        self.index += 1;
        Some(Ok(entry))
    }
}

/// 讀取壓縮檔中指定項目的解壓縮內容
pub fn read_entry_content(archive_path: &Path, full_name: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    let mut entry = match archive.by_name(full_name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(Error::EntryNotFound {
                archive: archive_path.to_path_buf(),
                name: full_name.to_string(),
            })
        }
        Err(err) => return Err(err.into()),
    };
    let mut buffer = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
pub(crate) fn write_test_archive(path: &Path, entries: &[(&str, &[u8])]) {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }
    zip.finish().unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn lists_entries_in_archive_order() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("data.zip");
        write_test_archive(
            &archive,
            &[("b.txt", b"bb"), ("folder/", b""), ("folder/a.md", b"aaaa")],
        );

        let entries: Vec<ArchiveEntry> = ArchiveEntries::open(&archive)
            .unwrap()
            .map(|entry| entry.unwrap())
            .collect();
        let names: Vec<(&str, &str, u64)> = entries
            .iter()
            .map(|e| (e.full_name.as_str(), e.name.as_str(), e.size))
            .collect();
        assert_eq!(
            names,
            vec![("b.txt", "b.txt", 2), ("folder/", "", 0), ("folder/a.md", "a.md", 4)]
        );
    }

    #[test]
    fn rejects_corrupt_and_missing_archives() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.zip");
        fs::write(&bogus, b"definitely not a zip file").unwrap();

        assert!(matches!(ArchiveEntries::open(&bogus), Err(Error::Archive(_))));
        assert!(matches!(
            ArchiveEntries::open(&temp.path().join("missing.zip")),
            Err(Error::Io(_))
        ));
        assert!(matches!(
            ArchiveEntries::open(temp.path()),
            Err(Error::InvalidRoot { .. })
        ));
    }

    #[test]
    fn reads_from_any_seekable_reader() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("mem.zip");
        write_test_archive(&archive, &[("only.bin", b"123")]);
        let bytes = fs::read(&archive).unwrap();

        let entries: Vec<ArchiveEntry> = ArchiveEntries::new(Cursor::new(bytes))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].full_name, "only.bin");
        assert_eq!(entries[0].size, 3);
    }

    #[test]
    fn reads_entry_content_by_full_name() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("content.zip");
        write_test_archive(&archive, &[("docs/readme.txt", b"hello backup")]);

        let data = read_entry_content(&archive, "docs/readme.txt").unwrap();
        assert_eq!(data, b"hello backup");
        assert!(matches!(
            read_entry_content(&archive, "docs/missing.txt"),
            Err(Error::EntryNotFound { .. })
        ));
    }
}
