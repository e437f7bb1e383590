use std::io;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::service::collection::FileItemCollection;

/// 單一目錄的直接內容
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

// 檔案系統接口，負責目錄列舉與檔案大小查詢
pub trait FileSystemPort {
    /// 列出目錄下的直接子目錄與檔案
    /// # 回傳
    /// - 權限不足或路徑過長時必須以對應的 `io::ErrorKind` 回報，讓呼叫端可以略過該子樹
    fn list_dir(&self, path: &Path) -> io::Result<DirListing>;

    /// 取得檔案大小（位元組）
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// 判斷兩個路徑是否為同一目錄時使用的鍵
    fn directory_key(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

// 檢視服務接口，讓使用者在掃描後取消選取部分項目
pub trait ReviewServiceTrait {
    /// 回傳要移除的項目索引
    fn review(&self, items: &FileItemCollection) -> Result<Vec<usize>>;
}
