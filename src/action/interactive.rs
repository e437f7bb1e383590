use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::path::Path;

use crate::config::config::validate_extension_filters;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::selection_facade::SelectionFacade;
use crate::facade::traits::i_selection::SelectionFacadeTrait;
use crate::models::options::SelectionOptions;
use crate::models::selection::SelectionReport;
use crate::service::collection::FileItemCollection;
use crate::service::config_service::DefaultConfigAdapter;
use crate::service::traits::i_service::ReviewServiceTrait;
use crate::utils::utils::{format_file_size, setup_logging};

pub fn process_interactive_mode() -> Result<SelectionReport> {
    println!("=== 歡迎使用互動模式 ===");
    let root = get_root_path()?;
    let is_archive_root = get_source_kind(&root)?;
    let use_default_config = get_default_config_option()?;
    let log_level = get_log_level_option()?;
    setup_logging(&log_level)?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：包含子資料夾，不過濾副檔名，不限制大小與數量");
        Box::new(DefaultConfigAdapter::new(root, is_archive_root))
    } else {
        Box::new(InteractiveConfigAdapter::new(root, is_archive_root))
    };

    let mut facade = SelectionFacade::new(
        config_port,
        Box::new(DialoguerReview),
        FileItemCollection::new(),
    );
    facade.execute_selection()
}

pub fn get_root_path() -> Result<String> {
    let root = Input::new()
        .with_prompt("請輸入要掃描的目錄或 ZIP 壓縮檔路徑")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input).exists() { Ok(()) } else { Err(format!("路徑 '{}' 不存在", input)) }
        })
        .interact_text()?;
    Ok(root)
}

pub fn get_source_kind(root: &str) -> Result<bool> {
    let default = if Path::new(root).is_file() { 1 } else { 0 };
    let selection = Select::new()
        .with_prompt("選擇來源類型（使用方向鍵選擇，按 Enter 確認）")
        .items(&["目錄", "ZIP 壓縮檔"])
        .default(default)
        .interact()?;
    Ok(selection == 1)
}

pub fn get_default_config_option() -> Result<bool> {
    let use_default = Confirm::new()
        .with_prompt("是否使用預設配置？（包含子資料夾、不過濾、不限制）")
        .default(true)
        .interact()?;
    Ok(use_default)
}

pub fn get_include_subfolders() -> Result<bool> {
    let include = Confirm::new()
        .with_prompt("是否包含子資料夾？")
        .default(true)
        .interact()?;
    Ok(include)
}

pub fn get_extension_filters() -> Result<(String, bool)> {
    let extensions: String = Input::new()
        .with_prompt("輸入以逗號分隔的副檔名（例如：.txt,.md，留空表示不過濾）")
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_extension_filters(input).map_err(|e| e.to_string())
        })
        .interact_text()?;
    if extensions.trim().is_empty() {
        return Ok((extensions, true));
    }

    let mode = Select::new()
        .with_prompt("選擇過濾方式")
        .items(&["僅包含這些副檔名", "排除這些副檔名"])
        .default(0)
        .interact()?;
    Ok((extensions, mode == 0))
}

pub fn get_file_size_limit() -> Result<u64> {
    let limit = Input::new()
        .with_prompt("單檔大小上限（位元組，0 表示不限制）")
        .default(0u64)
        .interact_text()?;
    Ok(limit)
}

pub fn get_file_count_limit() -> Result<usize> {
    let limit = Input::new()
        .with_prompt("最多選取的檔案數（0 表示不限制）")
        .default(0usize)
        .interact_text()?;
    Ok(limit)
}

pub fn get_review_option() -> Result<bool> {
    let review = Confirm::new()
        .with_prompt("掃描後是否逐一檢視並取消選取？")
        .default(false)
        .interact()?;
    Ok(review)
}

pub fn get_log_level_option() -> Result<String> {
    let levels = ["info", "warn", "error", "debug"];
    let selection = Select::new()
        .with_prompt("選擇日誌等級")
        .items(&levels)
        .default(0)
        .interact()?;
    Ok(levels[selection].to_string())
}

// 互動配置適配器
pub struct InteractiveConfigAdapter {
    root: String,
    is_archive_root: bool,
}

impl InteractiveConfigAdapter {
    pub fn new(root: String, is_archive_root: bool) -> Self {
        InteractiveConfigAdapter { root, is_archive_root }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let include_subfolders = get_include_subfolders()?;
        let (extensions, is_include_filters) = get_extension_filters()?;
        let file_size_limit = get_file_size_limit()?;
        let file_count_limit = get_file_count_limit()?;
        let review = get_review_option()?;

        let options = SelectionOptions::new(&self.root)
            .archive_root(self.is_archive_root)
            .include_subfolders(include_subfolders)
            .extension_filters(&extensions)
            .include_filters(is_include_filters)
            .file_size_limit(file_size_limit)
            .file_count_limit(file_count_limit);

        Ok(AppConfig {
            options,
            review,
            no_progress: false,
        })
    }
}

/// 以多選清單讓使用者取消勾選不需要的項目
pub struct DialoguerReview;

impl ReviewServiceTrait for DialoguerReview {
    fn review(&self, items: &FileItemCollection) -> Result<Vec<usize>> {
        let labels: Vec<String> = items
            .iter()
            .map(|item| format!("{} ({})", item, format_file_size(item.size())))
            .collect();
        let defaults = vec![true; labels.len()];
        let kept = MultiSelect::new()
            .with_prompt("取消勾選不需要備份的檔案（空白鍵切換，Enter 確認）")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;
        Ok((0..labels.len()).filter(|index| !kept.contains(index)).collect())
    }
}
