use std::fs;
use std::io;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::vec;
use log::{debug, warn};
use walkdir::WalkDir;
use crate::service::traits::i_service::{DirListing, FileSystemPort};

/// 權限不足與路徑過長視為空子樹，其餘錯誤一律向上回報
pub fn is_tolerated_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::InvalidFilename
    )
}

/// 本機檔案系統，使用 walkdir 只讀取一層目錄
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        LocalFileSystem
    }
}

impl FileSystemPort for LocalFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<DirListing> {
        if !fs::metadata(path)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("'{}' 不是目錄", path.display()),
            ));
        }

        let mut listing = DirListing::default();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            let file_type = entry.file_type();
            // 符號連結依其目標分類
            let is_link = file_type.is_symlink();
            if file_type.is_dir() || (is_link && entry.path().is_dir()) {
                listing.directories.push(entry.into_path());
            } else if file_type.is_file() || (is_link && entry.path().is_file()) {
                listing.files.push(entry.into_path());
            }
        }
        Ok(listing)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn directory_key(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

struct Frame {
    directories: vec::IntoIter<PathBuf>,
    files: vec::IntoIter<PathBuf>,
}

impl From<DirListing> for Frame {
    fn from(listing: DirListing) -> Self {
        Frame {
            directories: listing.directories.into_iter(),
            files: listing.files.into_iter(),
        }
    }
}

/// 深度優先的延遲檔案列舉：先走訪子目錄，再輸出目前目錄的檔案。
/// 根目錄的任何錯誤在建立時即回報；子目錄權限不足或路徑過長時略過該子樹。
/// 已走訪過的目錄（例如經由符號連結再次抵達）不會重複走訪。
pub struct SafeFileWalker<'a> {
    file_system: &'a dyn FileSystemPort,
    recurse: bool,
    stack: Vec<Frame>,
    visited: HashSet<PathBuf>,
}

impl<'a> SafeFileWalker<'a> {
    pub fn new(file_system: &'a dyn FileSystemPort, root: &Path, recurse: bool) -> io::Result<Self> {
        let listing = file_system.list_dir(root)?;
        debug!(
            "根目錄 {}：{} 個子目錄，{} 個檔案",
            root.display(),
            listing.directories.len(),
            listing.files.len()
        );
        let mut visited = HashSet::new();
        visited.insert(file_system.directory_key(root));
        Ok(SafeFileWalker {
            file_system,
            recurse,
            stack: vec![Frame::from(listing)],
            visited,
        })
    }
}

impl Iterator for SafeFileWalker<'_> {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            if self.recurse {
                if let Some(directory) = frame.directories.next() {
                    if !self.visited.insert(self.file_system.directory_key(&directory)) {
                        debug!("目錄 {} 已走訪過，跳過", directory.display());
                        continue;
                    }
                    match self.file_system.list_dir(&directory) {
                        Ok(listing) => self.stack.push(Frame::from(listing)),
                        Err(err) if is_tolerated_error(&err) => {
                            warn!("無法存取目錄 {}，跳過：{}", directory.display(), err);
                        }
                        Err(err) => {
                            self.stack.clear();
                            return Some(Err(err));
                        }
                    }
                    continue;
                }
            }
            if let Some(file) = frame.files.next() {
                return Some(Ok(file));
            }
            self.stack.pop();
        }
    }
}
