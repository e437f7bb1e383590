use std::fs::File;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::slice;
use log::{debug, info};
use crate::error::{Error, Result};
use crate::models::item::{extension_of, ArchiveFileItem, FileItem, PhysicalFileItem};
use crate::models::options::SelectionOptions;
use crate::service::file::{LocalFileSystem, SafeFileWalker};
use crate::service::traits::i_service::FileSystemPort;
use crate::service::zip::{ArchiveEntries, ArchiveEntry};

/// 單一項目允許的最大大小，與設定的大小上限各自獨立檢查
pub const MAX_ITEM_SIZE: u64 = i32::MAX as u64;

/// 已選取項目的集合，維護插入順序與累計大小
pub struct FileItemCollection {
    items: Vec<FileItem>,
    total_size: u64,
    file_system: Box<dyn FileSystemPort>,
}

impl Default for FileItemCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FileItemCollection {
    pub fn new() -> Self {
        Self::with_file_system(Box::new(LocalFileSystem::new()))
    }

    pub fn with_file_system(file_system: Box<dyn FileSystemPort>) -> Self {
        FileItemCollection {
            items: Vec::new(),
            total_size: 0,
            file_system,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn get(&self, index: usize) -> Option<&FileItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, FileItem> {
        self.items.iter()
    }

    /// 移除指定索引的項目並扣除其大小；索引超出範圍時 panic
    pub fn remove_at(&mut self, index: usize) -> FileItem {
        let item = self.items.remove(index);
        self.total_size -= item.size();
        item
    }

    pub fn clear(&mut self) {
        self.total_size = 0;
        self.items.clear();
    }

    /// 依選項掃描來源，每接受一個項目就加入集合並立即交給呼叫端。
    ///
    /// 根路徑無效（目錄不存在、壓縮檔損毀等）時直接回傳錯誤；
    /// 掃描途中無法容忍的錯誤則以序列中的 `Err` 回報，之後序列結束。
    pub fn add_range<'a>(&'a mut self, options: &'a SelectionOptions) -> Result<AddRange<'a>> {
        info!(
            "開始掃描：{}（{}，{}子資料夾）",
            options.root().display(),
            if options.is_archive_root() { "壓縮檔" } else { "目錄" },
            if options.is_include_subfolders() { "含" } else { "不含" }
        );

        let FileItemCollection { items, total_size, file_system } = self;
        let file_system: &'a dyn FileSystemPort = &**file_system;
        let source = if options.is_archive_root() {
            Source::Archive(ArchiveEntries::open(options.root())?)
        } else {
            Source::Folder(SafeFileWalker::new(
                file_system,
                options.root(),
                options.is_include_subfolders(),
            )?)
        };

        Ok(AddRange {
            items,
            total_size,
            file_system,
            options,
            source: Some(source),
        })
    }
}

impl Index<usize> for FileItemCollection {
    type Output = FileItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a FileItemCollection {
    type Item = &'a FileItem;
    type IntoIter = slice::Iter<'a, FileItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

enum Candidate {
    Entry(ArchiveEntry),
    File(PathBuf),
}

enum Source<'a> {
    Archive(ArchiveEntries<File>),
    Folder(SafeFileWalker<'a>),
}

/// 單次掃描的延遲序列，由呼叫端拉取驅動；捨棄時釋放壓縮檔句柄
pub struct AddRange<'a> {
    items: &'a mut Vec<FileItem>,
    total_size: &'a mut u64,
    file_system: &'a dyn FileSystemPort,
    options: &'a SelectionOptions,
    // 序列結束後設為 None，立即釋放壓縮檔句柄
    source: Option<Source<'a>>,
}

impl AddRange<'_> {
    /// 序列是否已結束（來源句柄已釋放）
    pub fn is_finished(&self) -> bool {
        self.source.is_none()
    }

    fn check_file_item_count(&self) -> bool {
        let limit = self.options.get_file_count_limit();
        limit == 0 || self.items.len() < limit
    }

    fn check_file_item_size(&self, item: &FileItem) -> bool {
        let limit = self.options.get_file_size_limit();
        let size = item.size();
        if (limit != 0 && size > limit) || size > MAX_ITEM_SIZE {
            debug!("{} 大小 {} 位元組超過限制，跳過", item, size);
            return false;
        }
        if self.total_size.checked_add(size).is_none() {
            debug!("{} 會使累計大小溢位，跳過", item);
            return false;
        }
        true
    }

    fn accept(&mut self, item: FileItem) -> Option<FileItem> {
        if !self.check_file_item_size(&item) {
            return None;
        }
        *self.total_size += item.size();
        self.items.push(item.clone());
        Some(item)
    }

    fn create_archive_item(&mut self, entry: ArchiveEntry) -> Option<FileItem> {
        let item = FileItem::Archive(ArchiveFileItem::new(
            self.options.root().to_path_buf(),
            entry.full_name,
            entry.size,
        ));
        self.accept(item)
    }

    fn create_physical_item(&mut self, path: PathBuf) -> Option<FileItem> {
        let size = match self.file_system.file_size(&path) {
            Ok(size) => size,
            Err(err) => {
                debug!("無法取得 {} 的大小，跳過：{}", path.display(), err);
                return None;
            }
        };
        self.accept(FileItem::Physical(PhysicalFileItem::new(path, size)))
    }

    fn is_skipped_entry(&self, entry: &ArchiveEntry) -> bool {
        entry.name.is_empty() || (!self.options.is_include_subfolders() && entry.full_name != entry.name)
    }

    fn file_extension(path: &Path) -> &str {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(extension_of)
            .unwrap_or_default()
    }

    fn finish(&mut self) {
        if self.source.take().is_some() {
            info!("掃描完成，共 {} 個項目，總大小 {} 位元組", self.items.len(), self.total_size);
        }
    }
}

impl Iterator for AddRange<'_> {
    type Item = Result<FileItem>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // 達到數量上限即停止，不再檢查後續候選項目
            if !self.check_file_item_count() {
                self.finish();
                return None;
            }

            let candidate = match self.source.as_mut()? {
                Source::Archive(entries) => entries.next().map(|entry| entry.map(Candidate::Entry)),
                Source::Folder(walker) => walker
                    .next()
                    .map(|path| path.map(Candidate::File).map_err(Error::from)),
            };

            let accepted = match candidate {
                None => {
                    self.finish();
                    return None;
                }
                Some(Err(err)) => {
                    self.source = None;
                    return Some(Err(err));
                }
                Some(Ok(Candidate::Entry(entry))) => {
                    if self.is_skipped_entry(&entry)
                        || !self.options.accepts_extension(extension_of(&entry.name))
                    {
                        continue;
                    }
                    self.create_archive_item(entry)
                }
                Some(Ok(Candidate::File(path))) => {
                    if !self.options.accepts_extension(Self::file_extension(&path)) {
                        continue;
                    }
                    self.create_physical_item(path)
                }
            };

            if let Some(item) = accepted {
                return Some(Ok(item));
            }
        }
    }
}
