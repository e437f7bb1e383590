use std::path::{Path, PathBuf};

/// 掃描選項：描述掃描根路徑、來源類型與各項過濾/限制條件
#[derive(Debug, Clone, Default)]
pub struct SelectionOptions {
    root: PathBuf,
    is_archive_root: bool,
    include_subfolders: bool,
    extension_filters: Option<Vec<String>>,
    is_include_filters: bool,
    file_size_limit: u64,
    file_count_limit: usize,
}

impl SelectionOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SelectionOptions {
            root: root.into(),
            is_include_filters: true,
            ..Default::default()
        }
    }

    pub fn archive_root(mut self, is_archive_root: bool) -> Self {
        self.is_archive_root = is_archive_root;
        self
    }

    pub fn include_subfolders(mut self, include_subfolders: bool) -> Self {
        self.include_subfolders = include_subfolders;
        self
    }

    /// true：僅保留清單中的副檔名；false：排除清單中的副檔名
    pub fn include_filters(mut self, is_include_filters: bool) -> Self {
        self.is_include_filters = is_include_filters;
        self
    }

    /// 單一項目大小上限（位元組），0 表示不限制
    pub fn file_size_limit(mut self, limit: u64) -> Self {
        self.file_size_limit = limit;
        self
    }

    /// 最多接受的項目數量，0 表示不限制
    pub fn file_count_limit(mut self, limit: usize) -> Self {
        self.file_count_limit = limit;
        self
    }

    pub fn extension_filters(mut self, search_pattern: &str) -> Self {
        self.set_extension_filters(search_pattern);
        self
    }

    /// 解析以逗號分隔的副檔名清單，空白輸入會清除過濾條件
    pub fn set_extension_filters(&mut self, search_pattern: &str) {
        let filters: Vec<String> = search_pattern
            .split(',')
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .map(String::from)
            .collect();
        self.extension_filters = if filters.is_empty() { None } else { Some(filters) };
    }

    pub fn get_extension_filters(&self) -> Option<&[String]> {
        self.extension_filters.as_deref()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_archive_root(&self) -> bool {
        self.is_archive_root
    }

    pub fn is_include_subfolders(&self) -> bool {
        self.include_subfolders
    }

    pub fn is_include_filters(&self) -> bool {
        self.is_include_filters
    }

    pub fn get_file_size_limit(&self) -> u64 {
        self.file_size_limit
    }

    pub fn get_file_count_limit(&self) -> usize {
        self.file_count_limit
    }

    /// 判斷副檔名（含開頭的點）是否通過過濾條件，比對時不分大小寫
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let Some(filters) = &self.extension_filters else {
            return true;
        };
        let extension = extension.to_lowercase();
        let contained = filters.iter().any(|filter| filter.to_lowercase() == extension);
        if self.is_include_filters { contained } else { !contained }
    }
}
