use clap::Parser;
use std::path::Path;
use crate::error::{Error, Result};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "backup-picker",
    about = "從目錄或 ZIP 壓縮檔挑選備份候選檔案",
    long_about = "掃描目錄或 ZIP 壓縮檔，依副檔名、單檔大小上限與數量上限挑選備份候選檔案，並統計總大小。\n不帶任何參數執行時進入互動模式。使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    /// 掃描根路徑（目錄或 ZIP 壓縮檔）
    pub root: String,
    /// 將根路徑視為 ZIP 壓縮檔
    #[arg(long, default_value_t = false)]
    pub archive: bool,
    /// 包含子資料夾
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
    /// 以逗號分隔的副檔名清單，例如 ".txt,.md"
    #[arg(short, long, default_value = "")]
    pub extensions: String,
    /// 排除清單中的副檔名（預設為僅包含）
    #[arg(long, default_value_t = false)]
    pub exclude: bool,
    /// 單檔大小上限（位元組），0 表示不限制
    #[arg(long, default_value_t = 0)]
    pub max_size: u64,
    /// 最多選取的檔案數，0 表示不限制
    #[arg(long, default_value_t = 0)]
    pub max_count: usize,
    /// 掃描後逐一檢視並取消選取
    #[arg(long, default_value_t = false)]
    pub review: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn validate_root_path(root: &str) -> Result<&Path> {
    let path = Path::new(root);
    if root.trim().is_empty() {
        return Err(Error::InvalidInput { reason: "根路徑不可為空".to_string() });
    }
    if !path.exists() {
        log::error!("根路徑不存在：{}", root);
        return Err(Error::InvalidInput { reason: format!("根路徑 '{}' 不存在", root) });
    }
    Ok(path)
}

pub fn is_valid_extension(extension: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
    !extension.contains(&invalid_chars[..])
}

pub fn validate_extension_filters(extensions: &str) -> Result<()> {
    for extension in extensions.split(',').map(str::trim) {
        if !is_valid_extension(extension) {
            return Err(Error::InvalidInput { reason: format!("無效的副檔名: {}", extension) });
        }
    }
    Ok(())
}
