use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::service::zip::read_entry_content;

/// 實體檔案項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalFileItem {
    path: PathBuf,
    size: u64,
}

impl PhysicalFileItem {
    pub fn new(path: PathBuf, size: u64) -> Self {
        PhysicalFileItem { path, size }
    }
}

/// 壓縮檔內的項目，保留所屬壓縮檔路徑以便之後讀取內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFileItem {
    archive_path: PathBuf,
    full_name: String,
    size: u64,
}

impl ArchiveFileItem {
    pub fn new(archive_path: PathBuf, full_name: String, size: u64) -> Self {
        ArchiveFileItem { archive_path, full_name, size }
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

/// 可選取的備份項目，大小於建立時決定且不再改變
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileItem {
    Physical(PhysicalFileItem),
    Archive(ArchiveFileItem),
}

impl FileItem {
    pub fn size(&self) -> u64 {
        match self {
            FileItem::Physical(item) => item.size,
            FileItem::Archive(item) => item.size,
        }
    }

    /// 不含目錄的名稱
    pub fn name(&self) -> &str {
        match self {
            FileItem::Physical(item) => item
                .path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default(),
            FileItem::Archive(item) => entry_name(&item.full_name),
        }
    }

    /// 實體檔案為完整路徑，壓縮檔項目為其在壓縮檔內的完整名稱
    pub fn path(&self) -> &Path {
        match self {
            FileItem::Physical(item) => &item.path,
            FileItem::Archive(item) => Path::new(&item.full_name),
        }
    }

    pub fn extension(&self) -> &str {
        extension_of(self.name())
    }

    pub fn is_archive_entry(&self) -> bool {
        matches!(self, FileItem::Archive(_))
    }

    /// 讀取項目內容，壓縮檔項目會重新開啟所屬壓縮檔
    pub fn read_content(&self) -> Result<Vec<u8>> {
        match self {
            FileItem::Physical(item) => Ok(fs::read(&item.path)?),
            FileItem::Archive(item) => read_entry_content(&item.archive_path, &item.full_name),
        }
    }
}

impl fmt::Display for FileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileItem::Physical(item) => write!(f, "{}", item.path.display()),
            FileItem::Archive(item) => {
                write!(f, "{}!{}", item.archive_path.display(), item.full_name)
            }
        }
    }
}

/// 壓縮檔項目的完整名稱取最後一段；目錄項目（以分隔符結尾）回傳空字串
pub fn entry_name(full_name: &str) -> &str {
    full_name.rsplit(['/', '\\']).next().unwrap_or_default()
}

/// 取得副檔名（含開頭的點，保留大小寫）；沒有點或以點結尾時回傳空字串
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index + 1 < file_name.len() => &file_name[index..],
        _ => "",
    }
}
